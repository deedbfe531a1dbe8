//! Storage for secret data.
//!
//! [Secret] holds a fixed number of bytes, [SecretBytes] a number chosen at runtime (PRF keys may
//! have any length). Both live on the heap so moving the owning value around does not leave
//! copies of the secret behind, and both zeroize their storage before it is freed.
//!
//! [Scrubbed] does the same for values of foreign types that cannot zeroize themselves.

mod scrubbed;
pub use crate::scrubbed::Scrubbed;

mod secret;
pub use crate::secret::Secret;

mod secret_bytes;
pub use crate::secret_bytes::SecretBytes;
