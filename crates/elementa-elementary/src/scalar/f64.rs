//! Double precision
//!
//! Operations with an LLVM intrinsic go through the inherent `f64` methods,
//! which lower to the hardware instruction where one exists. Everything else
//! calls the double-precision `libm` routine.

impl_elementary!(
    f64,
    unary: {
        cbrt => cbrt,
        tan => tan,
        asin => asin,
        acos => acos,
        atan => atan,
        sinh => sinh,
        cosh => cosh,
        tanh => tanh,
        asinh => asinh,
        acosh => acosh,
        atanh => atanh,
        exp10 => exp10,
        exp_m1 => expm1,
        log_1p => log1p,
        erf => erf,
        erfc => erfc,
        gamma => tgamma,
        log_gamma => lgamma,
    },
    binary: {
        atan2 => atan2,
        hypot => hypot,
    },
    pow: pow,
);
