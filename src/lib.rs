//! Generic elementary functions and a pull-based iteration protocol
//!
//! This umbrella crate re-exports the workspace:
//!
//! - [`elementa_core`] - the [`Scalar`] width trait, byte views and the
//!   error type
//! - [`elementa_elementary`] - [`ElementaryFunctions`] for `f32`, `f64`,
//!   `[T; N]` (and `half::f16` with the `f16` feature)
//! - [`elementa_iter`] - [`IteratorProtocol`], [`Iterable`] and the built-in
//!   sequences
//!
//! # Example
//!
//! ```rust
//! use elementa::prelude::*;
//!
//! fn rms<S, T>(samples: &S) -> T
//! where
//!     S: Iterable<Element = T>,
//!     T: Real,
//! {
//!     let mut sum = T::zero();
//!     let mut n = T::zero();
//!     samples.for_each(|x| {
//!         sum = sum + x * x;
//!         n = n + T::one();
//!     });
//!     functions::sqrt(sum / n)
//! }
//!
//! assert_eq!(rms(&vec![3.0f64, 4.0, 0.0, 0.0]), 2.5);
//! assert_eq!(rms(&[2.0f32; 8]), 2.0);
//! ```

pub use elementa_core;
pub use elementa_elementary;
pub use elementa_iter;

pub use elementa_core::{ContiguousBytes, Error, Result, Scalar};
pub use elementa_elementary::{ElementaryFunctions, FloatingPointSign, Real};
pub use elementa_iter::{Iterable, IteratorProtocol, Repeatable, SinglePass};

/// Prelude module for convenient imports
pub mod prelude {
    pub use elementa_core::prelude::*;
    pub use elementa_elementary::prelude::*;
    pub use elementa_iter::prelude::*;
}
