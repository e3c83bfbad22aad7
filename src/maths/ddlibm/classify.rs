use super::{ABS_MASK, EXP_MASK, SIGN_MASK, f64_to_bits, is_inf_bits, is_nan_bits};

/// IEEE-754 class of a binary64 operand, with the sign folded in where the
/// kernels care about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpClass {
    Nan,
    PosInf,
    NegInf,
    PosZero,
    NegZero,
    Subnormal,
    Normal,
}

impl FpClass {
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        matches!(self, FpClass::PosZero | FpClass::NegZero)
    }

    #[inline(always)]
    pub fn is_infinite(self) -> bool {
        matches!(self, FpClass::PosInf | FpClass::NegInf)
    }

    #[inline(always)]
    pub fn is_finite(self) -> bool {
        !matches!(self, FpClass::Nan | FpClass::PosInf | FpClass::NegInf)
    }
}

#[inline(always)]
pub fn classify(x: f64) -> FpClass {
    let u = f64_to_bits(x);
    let neg = (u & SIGN_MASK) != 0;
    if is_nan_bits(u) {
        return FpClass::Nan;
    }
    if is_inf_bits(u) {
        return if neg { FpClass::NegInf } else { FpClass::PosInf };
    }
    if (u & ABS_MASK) == 0 {
        return if neg {
            FpClass::NegZero
        } else {
            FpClass::PosZero
        };
    }
    if (u & EXP_MASK) == 0 {
        FpClass::Subnormal
    } else {
        FpClass::Normal
    }
}
