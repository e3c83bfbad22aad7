//! Checked entry points.
//!
//! The plain kernels report exceptional cases only through the IEEE value
//! they return. The `*_checked` variants run the same kernel and tag the
//! result with the kind of exception it represents. Quiet NaN operands
//! propagate without an error; only operations that create a NaN are
//! reported as invalid.

use core::fmt;

use super::classify::{FpClass, classify};
use super::{exp, log, pow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathErrorKind {
    /// No meaningful real result; the value is a quiet NaN.
    Invalid,
    /// Exact infinite result from finite operands (log(0), pow(0, y < 0)).
    Pole,
    /// Finite exact result too large to represent; the value is infinite.
    Overflow,
    /// Non-zero exact result rounded into the subnormal range or to zero.
    Underflow,
}

impl fmt::Display for MathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathErrorKind::Invalid => write!(f, "invalid operation"),
            MathErrorKind::Pole => write!(f, "pole error"),
            MathErrorKind::Overflow => write!(f, "overflow"),
            MathErrorKind::Underflow => write!(f, "underflow"),
        }
    }
}

/// Exception raised by a kernel, carrying the IEEE result it returned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MathError {
    kind: MathErrorKind,
    value: f64,
}

impl MathError {
    #[inline(always)]
    fn new(kind: MathErrorKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> MathErrorKind {
        self.kind
    }

    /// The value the unchecked kernel returns for the same operands.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (result {:e})", self.kind, self.value)
    }
}

impl core::error::Error for MathError {}

#[inline(always)]
fn tiny(class: FpClass) -> bool {
    class.is_zero() || class == FpClass::Subnormal
}

/// Tags finite-operand results that left the normal range.
#[inline(always)]
fn range_check(value: f64) -> Result<f64, MathError> {
    let class = classify(value);
    if class.is_infinite() {
        return Err(MathError::new(MathErrorKind::Overflow, value));
    }
    if tiny(class) {
        return Err(MathError::new(MathErrorKind::Underflow, value));
    }
    Ok(value)
}

pub fn exp_checked(x: f64) -> Result<f64, MathError> {
    let value = exp(x);
    if !classify(x).is_finite() {
        return Ok(value);
    }
    range_check(value)
}

pub fn log_checked(x: f64) -> Result<f64, MathError> {
    let value = log(x);
    match classify(x) {
        FpClass::PosZero | FpClass::NegZero => Err(MathError::new(MathErrorKind::Pole, value)),
        FpClass::Nan | FpClass::PosInf => Ok(value),
        _ if x < 0.0 => Err(MathError::new(MathErrorKind::Invalid, value)),
        _ => Ok(value),
    }
}

pub fn pow_checked(x: f64, y: f64) -> Result<f64, MathError> {
    let value = pow(x, y);
    let cx = classify(x);
    let cy = classify(y);
    if value.is_nan() {
        if cx == FpClass::Nan || cy == FpClass::Nan {
            return Ok(value);
        }
        return Err(MathError::new(MathErrorKind::Invalid, value));
    }
    if cx.is_zero() && y < 0.0 {
        return Err(MathError::new(MathErrorKind::Pole, value));
    }
    if !cx.is_finite() || !cy.is_finite() || cx.is_zero() || cy.is_zero() {
        return Ok(value);
    }
    range_check(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn exp_checked_reports_range_errors() {
        assert_eq!(exp_checked(0.0), Ok(1.0));
        assert_eq!(exp_checked(f64::NEG_INFINITY), Ok(0.0));
        assert_eq!(exp_checked(f64::INFINITY), Ok(f64::INFINITY));
        assert!(exp_checked(f64::NAN).is_ok_and(f64::is_nan));

        let err = exp_checked(710.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Overflow);
        assert_eq!(err.value(), f64::INFINITY);

        let err = exp_checked(-746.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Underflow);
        assert_eq!(err.value(), 0.0);

        // subnormal result
        let err = exp_checked(-740.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Underflow);
        assert_eq!(err.value(), exp(-740.0));
        assert!(err.value() > 0.0);
    }

    #[test]
    fn log_checked_reports_domain_errors() {
        assert_eq!(log_checked(1.0), Ok(0.0));
        assert_eq!(log_checked(f64::INFINITY), Ok(f64::INFINITY));
        assert!(log_checked(f64::NAN).is_ok_and(f64::is_nan));

        for x in [0.0, -0.0] {
            let err = log_checked(x).unwrap_err();
            assert_eq!(err.kind(), MathErrorKind::Pole);
            assert_eq!(err.value(), f64::NEG_INFINITY);
        }
        for x in [-1.0, f64::NEG_INFINITY, -f64::from_bits(1)] {
            let err = log_checked(x).unwrap_err();
            assert_eq!(err.kind(), MathErrorKind::Invalid);
            assert!(err.value().is_nan());
        }
    }

    #[test]
    fn pow_checked_classifies_results() {
        assert_eq!(pow_checked(2.0, 10.0), Ok(1024.0));
        assert_eq!(pow_checked(f64::NAN, 0.0), Ok(1.0));
        assert!(pow_checked(f64::NAN, 2.0).is_ok_and(f64::is_nan));
        assert_eq!(pow_checked(0.0, 3.0), Ok(0.0));
        assert_eq!(pow_checked(f64::INFINITY, 2.0), Ok(f64::INFINITY));
        assert_eq!(pow_checked(0.5, f64::INFINITY), Ok(0.0));

        let err = pow_checked(-8.0, 1.0 / 3.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Invalid);
        assert!(err.value().is_nan());
        let err = pow_checked(-1.0, f64::INFINITY).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Invalid);
        for y in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = pow_checked(1.0, y).unwrap_err();
            assert_eq!(err.kind(), MathErrorKind::Invalid);
            assert!(err.value().is_nan());
        }
        assert!(pow_checked(1.0, f64::NAN).is_ok_and(f64::is_nan));
        assert_eq!(pow_checked(1.0, 5.0), Ok(1.0));

        let err = pow_checked(-0.0, -3.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Pole);
        assert_eq!(err.value(), f64::NEG_INFINITY);
        let err = pow_checked(0.0, -0.5).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Pole);
        assert_eq!(err.value(), f64::INFINITY);

        let err = pow_checked(10.0, 400.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Overflow);
        let err = pow_checked(-10.0, 401.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Overflow);
        assert_eq!(err.value(), f64::NEG_INFINITY);

        let err = pow_checked(10.0, -400.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Underflow);
        assert_eq!(err.value(), 0.0);
        let err = pow_checked(2.0, -1060.0).unwrap_err();
        assert_eq!(err.kind(), MathErrorKind::Underflow);
        assert_eq!(err.value(), f64::from_bits(1 << 14));
    }

    #[test]
    fn checked_values_match_plain_kernels() {
        for &x in &[-800.0, -740.0, -1.5, 0.0, 3.25, 700.0, 800.0] {
            let checked = exp_checked(x).unwrap_or_else(|e| e.value());
            assert_eq!(checked.to_bits(), exp(x).to_bits());
        }
        for &x in &[-2.0, -0.0, 0.0, 1e-310, 0.5, 1e300] {
            let checked = log_checked(x).unwrap_or_else(|e| e.value());
            assert_eq!(checked.is_nan(), log(x).is_nan());
            if !checked.is_nan() {
                assert_eq!(checked.to_bits(), log(x).to_bits());
            }
        }
    }

    #[test]
    fn error_display() {
        let err = exp_checked(1000.0).unwrap_err();
        assert_eq!(format!("{err}"), "overflow (result inf)");
        let err = log_checked(0.0).unwrap_err();
        assert_eq!(format!("{err}"), "pole error (result -inf)");
    }
}
