//! Which routine backs each operation, per width
//!
//! Mirrors the per-width impls so callers (and benchmarks) can see whether an
//! operation lowers to a compiler intrinsic or calls a width-qualified `libm`
//! routine, without reading the source.

use std::sync::OnceLock;

use elementa_core::Scalar;

/// How one operation is computed for one width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// An LLVM intrinsic, usually a single instruction
    Intrinsic,
    /// A `libm` entry point of the width's own precision
    Libm(&'static str),
    /// Computed in a wider type and rounded once
    Promoted { via: &'static str },
}

/// One row of a width's routine table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineEntry {
    pub operation: &'static str,
    pub routine: Routine,
}

const fn entry(operation: &'static str, routine: Routine) -> RoutineEntry {
    RoutineEntry { operation, routine }
}

macro_rules! table {
    ($($op:literal => $routine:expr),* $(,)?) => {
        &[$(entry($op, $routine)),*]
    };
}

use Routine::{Intrinsic, Libm};

const F32_ROUTINES: &[RoutineEntry] = table!(
    "sqrt" => Intrinsic, "cbrt" => Libm("cbrtf"),
    "sin" => Intrinsic, "cos" => Intrinsic, "tan" => Libm("tanf"),
    "asin" => Libm("asinf"), "acos" => Libm("acosf"), "atan" => Libm("atanf"),
    "atan2" => Libm("atan2f"),
    "sinh" => Libm("sinhf"), "cosh" => Libm("coshf"), "tanh" => Libm("tanhf"),
    "asinh" => Libm("asinhf"), "acosh" => Libm("acoshf"), "atanh" => Libm("atanhf"),
    "exp" => Intrinsic, "exp2" => Intrinsic, "exp10" => Libm("exp10f"),
    "exp_m1" => Libm("expm1f"),
    "log" => Intrinsic, "log2" => Intrinsic, "log10" => Intrinsic,
    "log_1p" => Libm("log1pf"),
    "erf" => Libm("erff"), "erfc" => Libm("erfcf"), "hypot" => Libm("hypotf"),
    "gamma" => Libm("tgammaf"), "log_gamma" => Libm("lgammaf"),
    "pow" => Libm("powf"), "powi" => Libm("powf"), "root" => Libm("powf"),
    "mul_add" => Intrinsic,
);

const F64_ROUTINES: &[RoutineEntry] = table!(
    "sqrt" => Intrinsic, "cbrt" => Libm("cbrt"),
    "sin" => Intrinsic, "cos" => Intrinsic, "tan" => Libm("tan"),
    "asin" => Libm("asin"), "acos" => Libm("acos"), "atan" => Libm("atan"),
    "atan2" => Libm("atan2"),
    "sinh" => Libm("sinh"), "cosh" => Libm("cosh"), "tanh" => Libm("tanh"),
    "asinh" => Libm("asinh"), "acosh" => Libm("acosh"), "atanh" => Libm("atanh"),
    "exp" => Intrinsic, "exp2" => Intrinsic, "exp10" => Libm("exp10"),
    "exp_m1" => Libm("expm1"),
    "log" => Intrinsic, "log2" => Intrinsic, "log10" => Intrinsic,
    "log_1p" => Libm("log1p"),
    "erf" => Libm("erf"), "erfc" => Libm("erfc"), "hypot" => Libm("hypot"),
    "gamma" => Libm("tgamma"), "log_gamma" => Libm("lgamma"),
    "pow" => Libm("pow"), "powi" => Libm("pow"), "root" => Libm("pow"),
    "mul_add" => Intrinsic,
);

/// Widths that can describe their routines
pub trait RoutineReport: Scalar {
    fn routines() -> &'static [RoutineEntry];
}

impl RoutineReport for f32 {
    fn routines() -> &'static [RoutineEntry] {
        F32_ROUTINES
    }
}

impl RoutineReport for f64 {
    fn routines() -> &'static [RoutineEntry] {
        F64_ROUTINES
    }
}

#[cfg(feature = "f16")]
const PROMOTED: Routine = Routine::Promoted { via: "f32" };

#[cfg(feature = "f16")]
const F16_ROUTINES: &[RoutineEntry] = table!(
    "sqrt" => PROMOTED, "cbrt" => PROMOTED, "sin" => PROMOTED, "cos" => PROMOTED,
    "tan" => PROMOTED, "asin" => PROMOTED, "acos" => PROMOTED, "atan" => PROMOTED,
    "atan2" => PROMOTED, "sinh" => PROMOTED, "cosh" => PROMOTED, "tanh" => PROMOTED,
    "asinh" => PROMOTED, "acosh" => PROMOTED, "atanh" => PROMOTED, "exp" => PROMOTED,
    "exp2" => PROMOTED, "exp10" => PROMOTED, "exp_m1" => PROMOTED, "log" => PROMOTED,
    "log2" => PROMOTED, "log10" => PROMOTED, "log_1p" => PROMOTED, "erf" => PROMOTED,
    "erfc" => PROMOTED, "hypot" => PROMOTED, "gamma" => PROMOTED,
    "log_gamma" => PROMOTED, "pow" => PROMOTED, "powi" => PROMOTED, "root" => PROMOTED,
    "mul_add" => PROMOTED,
);

#[cfg(feature = "f16")]
impl RoutineReport for half::f16 {
    fn routines() -> &'static [RoutineEntry] {
        F16_ROUTINES
    }
}

/// Routine backing `operation` for width `T`, if the operation exists
pub fn routine_for<T: RoutineReport>(operation: &str) -> Option<Routine> {
    T::routines()
        .iter()
        .find(|e| e.operation == operation)
        .map(|e| e.routine)
}

/// Routine tables of every enabled width, keyed by width name
///
/// Built on first use and logged once at debug level.
pub fn routine_table() -> &'static [(&'static str, &'static [RoutineEntry])] {
    static TABLE: OnceLock<Vec<(&'static str, &'static [RoutineEntry])>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut widths: Vec<(&'static str, &'static [RoutineEntry])> = vec![
            (<f32 as Scalar>::NAME, f32::routines()),
            (<f64 as Scalar>::NAME, f64::routines()),
        ];
        #[cfg(feature = "f16")]
        widths.push((<half::f16 as Scalar>::NAME, half::f16::routines()));

        for (name, entries) in &widths {
            let intrinsics = entries
                .iter()
                .filter(|e| e.routine == Routine::Intrinsic)
                .count();
            log::debug!(
                "elementary routines for {name}: {intrinsics} intrinsic, {} library",
                entries.len() - intrinsics
            );
        }
        widths
    })
}
