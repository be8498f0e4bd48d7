//! Single precision
//!
//! Operations with an LLVM intrinsic go through the inherent `f32` methods,
//! which lower to the hardware instruction where one exists. Everything else
//! calls the single-precision (`f`-suffixed) `libm` routine.

impl_elementary!(
    f32,
    unary: {
        cbrt => cbrtf,
        tan => tanf,
        asin => asinf,
        acos => acosf,
        atan => atanf,
        sinh => sinhf,
        cosh => coshf,
        tanh => tanhf,
        asinh => asinhf,
        acosh => acoshf,
        atanh => atanhf,
        exp10 => exp10f,
        exp_m1 => expm1f,
        log_1p => log1pf,
        erf => erff,
        erfc => erfcf,
        gamma => tgammaf,
        log_gamma => lgammaf,
    },
    binary: {
        atan2 => atan2f,
        hypot => hypotf,
    },
    pow: powf,
);
