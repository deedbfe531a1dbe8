#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time implementations of some primitives
//!
//! Byte string operations needed by the pseudo random functions: XOR for CBC chaining and key
//! injection, and addition modulo 2^(8·n) on big-endian numbers for the FIPS 186-2 generator.
//!
//! # Examples
//!
//! ```rust
//! use ikeprf_constant_time::{add, increment, xor};
//!
//! let mut xkey = [0x00, 0xff];
//! add(&mut xkey, &[0x00, 0x01]);
//! assert_eq!(xkey, [0x01, 0x00]);
//!
//! increment(&mut xkey);
//! assert_eq!(xkey, [0x01, 0x01]);
//!
//! xor(&mut xkey, &[0x01, 0x01]);
//! assert_eq!(xkey, [0x00, 0x00]);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - Length mismatches between inputs are immediately detectable
//! - Execution time scales linearly with input size

mod add;
mod increment;
mod xor;

pub use add::add;
pub use increment::increment;
pub use xor::xor;
