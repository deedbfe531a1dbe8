//! Adding numbers

use core::hint::black_box;

/// Interpret both slices as big-endian unsigned integers of the same width and add `src` to
/// `dst`, modulo 2^(8·`dst.len()`).
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
/// # Examples
///
/// ```
/// use ikeprf_constant_time::add;
///
/// let mut a = [0x01, 0xff, 0xff];
/// add(&mut a, &[0x00, 0x00, 0x01]);
/// assert_eq!(a, [0x02, 0x00, 0x00]);
///
/// // the carry out of the most significant byte is dropped
/// let mut b = [0xff, 0xff];
/// add(&mut b, &[0x00, 0x02]);
/// assert_eq!(b, [0x00, 0x01]);
/// ```
#[inline]
pub fn add(dst: &mut [u8], src: &[u8]) {
    assert!(black_box(src.len()) == black_box(dst.len()));
    let mut carry = 0u16;
    for (dv, sv) in dst.iter_mut().rev().zip(src.iter().rev()) {
        let sum = black_box(*dv as u16) + black_box(*sv as u16) + black_box(carry);
        *black_box(dv) = sum as u8;
        *black_box(&mut carry) = black_box(sum >> 8);
    }
}
