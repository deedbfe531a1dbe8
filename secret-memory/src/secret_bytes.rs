use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Storage for secret data whose length is only known at runtime
///
/// The allocation is made with the exact size of the secret and never grows, so no stale copy
/// can be left behind by a reallocation.
///
/// ```
/// use ikeprf_secret_memory::SecretBytes;
///
/// let mut key = SecretBytes::from_slice(b"Jefe");
/// assert_eq!(key.secret(), b"Jefe");
///
/// // the previous contents are erased before the new key is stored
/// key.replace(&[0x0b; 20]);
/// assert_eq!(key.len(), 20);
/// assert_eq!(format!("{key:?}"), "<SECRET>");
/// ```
pub struct SecretBytes {
    storage: Box<[u8]>,
}

impl SecretBytes {
    /// Copies `slice` into a new [SecretBytes]
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            storage: slice.into(),
        }
    }

    /// Overwrites the current contents with zeros, releases them and stores a copy of `slice`
    pub fn replace(&mut self, slice: &[u8]) {
        self.zeroize();
        self.storage = slice.into();
    }

    /// Borrows the data
    pub fn secret(&self) -> &[u8] {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl ZeroizeOnDrop for SecretBytes {}
impl Zeroize for SecretBytes {
    fn zeroize(&mut self) {
        self.storage.zeroize()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.zeroize()
    }
}

impl Clone for SecretBytes {
    fn clone(&self) -> Self {
        Self::from_slice(self.secret())
    }
}

/// The Debug implementation of [SecretBytes] does not reveal the secret data,
/// instead a placeholder `<SECRET>` is used
impl fmt::Debug for SecretBytes {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("<SECRET>")
    }
}
