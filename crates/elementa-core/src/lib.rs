//! Core traits and types shared by the elementa crates
//!
//! This crate provides the small foundation both capability crates stand on:
//!
//! 1. **Scalar widths** - [`Scalar`] describes a fixed-width float type
//! 2. **Byte views** - [`ContiguousBytes`] lends read-only contiguous storage
//! 3. **Errors** - [`Error`] for the few shape conversions that can fail
//!
//! # Example
//!
//! ```rust
//! use elementa_core::{ContiguousBytes, Scalar};
//!
//! assert_eq!(<f32 as Scalar>::BITS, 32);
//! let width = [1.0f64, 2.0].with_contiguous_bytes(|bytes| bytes.len());
//! assert_eq!(width, 16);
//! ```

pub mod contiguous;
pub mod error;
pub mod numeric;

// Re-export core types
pub use contiguous::ContiguousBytes;
pub use error::{Error, Result};
pub use numeric::Scalar;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ContiguousBytes, Error, Result, Scalar};
}
