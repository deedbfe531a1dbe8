use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Storage for secret data of a fixed size
///
/// ```
/// use ikeprf_secret_memory::Secret;
///
/// let mut xkey: Secret<4> = Secret::from_slice(&[1, 2, 3, 4]);
/// xkey.secret_mut()[0] ^= 0xff;
/// assert_eq!(xkey.secret(), &[0xfe, 2, 3, 4]);
/// assert_eq!(format!("{xkey:?}"), "<SECRET>");
/// ```
pub struct Secret<const N: usize> {
    storage: Box<[u8; N]>,
}

impl<const N: usize> Secret<N> {
    /// Copies `slice` into a new [Secret]
    ///
    /// # Panics
    ///
    /// If `slice` is not exactly `N` bytes long.
    pub fn from_slice(slice: &[u8]) -> Self {
        let mut new_self = Self::zero();
        new_self.secret_mut().copy_from_slice(slice);
        new_self
    }

    /// Returns a new [Secret] that is zero initialized
    pub fn zero() -> Self {
        Self {
            storage: Box::new([0u8; N]),
        }
    }

    /// Borrows the data
    pub fn secret(&self) -> &[u8; N] {
        &self.storage
    }

    /// Borrows the data mutably
    pub fn secret_mut(&mut self) -> &mut [u8; N] {
        &mut self.storage
    }
}

impl<const N: usize> ZeroizeOnDrop for Secret<N> {}
impl<const N: usize> Zeroize for Secret<N> {
    fn zeroize(&mut self) {
        self.storage.zeroize()
    }
}

impl<const N: usize> Drop for Secret<N> {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl<const N: usize> Clone for Secret<N> {
    fn clone(&self) -> Self {
        Self::from_slice(self.secret())
    }
}

/// The Debug implementation of [Secret] does not reveal the secret data,
/// instead a placeholder `<SECRET>` is used
impl<const N: usize> fmt::Debug for Secret<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("<SECRET>")
    }
}
