//! xor

use core::hint::black_box;

/// Xors the source into the destination
///
/// # Panics
/// If source and destination are of different sizes.
///
/// # Leaks
/// This function may leak timing information in the following ways:
///
/// - The function execution time is linearly proportional to the input length
/// - Length mismatches between source and destination are immediately detectable via panic
///
/// These leaks do not reveal anything about the content being XORed.
///
/// # Examples
///
/// ```
/// use ikeprf_constant_time::xor;
///
/// let mut dst = b"hello".to_vec();
/// xor(&mut dst, b"world");
/// assert_eq!(dst, b"\x1f\n\x1e\x00\x0b");
/// ```
#[inline]
pub fn xor(dst: &mut [u8], src: &[u8]) {
    assert!(black_box(src.len()) == black_box(dst.len()));
    for (dv, sv) in dst.iter_mut().zip(src.iter()) {
        *black_box(dv) ^= black_box(*sv);
    }
}
