//! Elementary functions over float widths and fixed-size vectors
//!
//! This crate provides the [`ElementaryFunctions`] capability: square and
//! n-th roots, the trigonometric and hyperbolic families and their inverses,
//! exponentials and logarithms, the error and gamma functions, and powers.
//!
//! # Architecture Overview
//!
//! 1. **Capability** - [`ElementaryFunctions`], associated functions only
//! 2. **Scalar widths** - one impl per width (`f32`, `f64`, and `half::f16`
//!    with the `f16` feature), each calling only routines of its own precision
//! 3. **Vector lifting** - one blanket impl for `[T; N]`, lane by lane
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: the width is a type parameter, resolved at
//!   compile time; there is no runtime numeric wrapper
//! - **Total functions**: domain violations give NaN or ±∞, never a panic
//! - **No policy in the lifting**: a vector lane equals the scalar result
//!
//! # Example
//!
//! ```rust
//! use elementa_elementary::{functions as ef, ElementaryFunctions, Vector4};
//!
//! fn norm<T: ElementaryFunctions>(x: T, y: T) -> T {
//!     T::hypot(x, y)
//! }
//!
//! assert_eq!(norm(3.0f64, 4.0), 5.0);
//! assert_eq!(norm([3.0f32, 5.0], [4.0, 12.0]), [5.0, 13.0]);
//!
//! let v: Vector4<f64> = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(ef::powi(v, 2), [1.0, 4.0, 9.0, 16.0]);
//! ```

pub mod functions;
pub mod real;
pub mod routines;
mod scalar;
pub mod sign;
pub mod traits;
pub mod vector;

pub use real::{gamma_from_log, log_sum_exp, sigmoid, softplus, Real};
pub use routines::{routine_for, routine_table, Routine, RoutineEntry, RoutineReport};
pub use sign::FloatingPointSign;
pub use traits::ElementaryFunctions;
pub use vector::{
    splat, vector_from_slice, Vector16, Vector2, Vector3, Vector32, Vector4, Vector64, Vector8,
    NAMED_WIDTHS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::functions;
    pub use crate::{ElementaryFunctions, FloatingPointSign, Real};
    pub use crate::{Vector16, Vector2, Vector3, Vector32, Vector4, Vector64, Vector8};
}
