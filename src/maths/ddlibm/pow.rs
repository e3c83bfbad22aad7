use super::dd::DoubleDouble;
use super::exp::exp_scaled;
use super::log::log_reduce;
use super::pow_data::{POW_EXP_TABLE_BITS, POW_EXP2_TAB_U64, POW_LOG_TABLE_BITS, POW_LOG2_TAB_U64};
use super::{
    ABS_MASK, EXP_MASK, MANT_MASK, ONE_BITS, SIGN_MASK, add_exponent, f64_from_bits, f64_to_bits,
    get_exp_bits, is_nan_bits, round_ties_even,
};

// ========= pow(x, y) =========

const LOG2E_HI: f64 = f64::from_bits(0x3ff71547652b82fe);
const LOG2E_LO: f64 = f64::from_bits(0x3c7777d0ffda0d24);
const LOG2E: DoubleDouble = DoubleDouble::new(LOG2E_HI, LOG2E_LO);

// ln(1+r) = r - r^2/2 + r^3 (P3 + P4 r + ... + P7 r^4), |r| < 2^-10
const POW_P3: f64 = f64::from_bits(0x3fd5555555555555);
const POW_P4: f64 = f64::from_bits(0xbfd0000000000000);
const POW_P5: f64 = f64::from_bits(0x3fc999999999999a);
const POW_P6: f64 = f64::from_bits(0xbfc5555555555555);
const POW_P7: f64 = f64::from_bits(0x3fc2492492492492);

// 2^f - 1 = sum (ln2)^j / j! f^j, |f| <= 2^-9
const EXP2_E1: f64 = f64::from_bits(0x3fe62e42fefa39ef);
const EXP2_E2: f64 = f64::from_bits(0x3fcebfbdff82c58f);
const EXP2_E3: f64 = f64::from_bits(0x3fac6b08d704a0c0);
const EXP2_E4: f64 = f64::from_bits(0x3f83b2ab6fba4e77);
const EXP2_E5: f64 = f64::from_bits(0x3f55d87fe78a6731);
const EXP2_E6: f64 = f64::from_bits(0x3f2430912f86c787);
const EXP2_E7: f64 = f64::from_bits(0x3eeffcbfc588b0c7);

const N: i64 = 1i64 << POW_EXP_TABLE_BITS;
const INV_N: f64 = 1.0 / N as f64;

// |y * log2|x|| beyond this always overflows or underflows.
const POW_BOUND: f64 = 1100.0;
const EXP2_HI: f64 = 1024.0;
const EXP2_LO: f64 = -1080.0;
const SCALE_LIMIT: i64 = 1020;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntClass {
    NotInt,
    Odd,
    Even,
}

/// Integer class of a finite, non-zero `y` from its bits.
#[inline(always)]
fn int_class(iy: u64) -> IntClass {
    let e = get_exp_bits(iy);
    if e < 0x3ff {
        return IntClass::NotInt;
    }
    if e > 0x3ff + 52 {
        return IntClass::Even;
    }
    let shift = (0x3ff + 52 - e) as u32;
    let sig = (iy & MANT_MASK) | (1u64 << 52);
    if sig & ((1u64 << shift) - 1) != 0 {
        return IntClass::NotInt;
    }
    if (sig >> shift) & 1 != 0 {
        IntClass::Odd
    } else {
        IntClass::Even
    }
}

#[inline(always)]
fn apply_sign(x: f64, neg: bool) -> f64 {
    if neg {
        f64_from_bits(f64_to_bits(x) | SIGN_MASK)
    } else {
        x
    }
}

/// log2(x) as a double-double for positive normal `ix`, with `adj` removed
/// from the exponent (pre-scaled subnormals). Relative error below 2^-70.
#[inline(always)]
fn log2_dd(ix: u64, adj: i64) -> DoubleDouble {
    let (k, i, r) = log_reduce::<POW_LOG_TABLE_BITS>(ix);
    let rh = r.hi;

    // ln(1+r) with the r^2/2 term carried exactly
    let q = r.mul(r).mul_f64(-0.5);
    let r2 = rh * rh;
    let tail = r2 * rh * (POW_P3 + rh * POW_P4 + r2 * (POW_P5 + rh * POW_P6 + r2 * POW_P7));
    let v = r.add(q).add_f64(tail).mul(LOG2E);

    let thi = f64_from_bits(POW_LOG2_TAB_U64[2 * i]);
    let tlo = f64_from_bits(POW_LOG2_TAB_U64[2 * i + 1]);
    // exact: thi is a multiple of 2^-42 and |k| < 2^11
    DoubleDouble::new((k - adj) as f64 + thi, tlo).add(v)
}

/// 2^(z.hi + z.lo) for |z.hi| <= 1100.
#[inline(always)]
fn exp2_dd(z: DoubleDouble) -> f64 {
    if z.hi > EXP2_HI {
        return f64::INFINITY;
    }
    if z.hi < EXP2_LO {
        return 0.0;
    }

    let k = round_ties_even(z.hi * N as f64);
    let kd = k as f64;
    // z.hi - kd / N is exact; z.lo goes in before the polynomial
    let f = (z.hi - kd * INV_N) + z.lo;

    let idx = (k & (N - 1)) as usize * 2;
    let n = k >> POW_EXP_TABLE_BITS;
    let tail = f64_from_bits(POW_EXP2_TAB_U64[idx]);
    let tbits = POW_EXP2_TAB_U64[idx + 1];

    let f2 = f * f;
    if (-SCALE_LIMIT..=SCALE_LIMIT).contains(&n) {
        let p = f * (EXP2_E1 + f * EXP2_E2) + f2 * f * (EXP2_E3 + f * EXP2_E4 + f2 * EXP2_E5);
        let scale = f64_from_bits(add_exponent(tbits, n));
        return scale + scale * (tail + p);
    }
    // results near overflow or in the subnormal range need the longer series
    let p = f * (EXP2_E1 + f * EXP2_E2)
        + f2 * f * (EXP2_E3 + f * EXP2_E4 + f2 * (EXP2_E5 + f * EXP2_E6 + f2 * EXP2_E7));
    exp_scaled(tail + p, tbits, n)
}

#[inline(always)]
pub fn pow(x: f64, y: f64) -> f64 {
    let ix = f64_to_bits(x);
    let iy = f64_to_bits(y);

    if (iy << 1) == 0 {
        return 1.0;
    }
    if is_nan_bits(ix) || is_nan_bits(iy) {
        return x + y;
    }

    let mut ax = ix & ABS_MASK;
    let x_neg = (ix & SIGN_MASK) != 0;
    let y_neg = (iy & SIGN_MASK) != 0;

    if (iy & ABS_MASK) == EXP_MASK {
        if ax == ONE_BITS {
            return (y - y) / (y - y);
        }
        return if (ax > ONE_BITS) != y_neg {
            f64::INFINITY
        } else {
            0.0
        };
    }

    let yc = int_class(iy);
    let neg = x_neg && yc == IntClass::Odd;

    if ax == 0 {
        if y_neg {
            // pole: divide by a zero carrying the result's sign
            let zero = if neg { x } else { x * x };
            return 1.0 / zero;
        }
        return if neg { x } else { 0.0 };
    }
    if ax == EXP_MASK {
        return if y_neg {
            apply_sign(0.0, neg)
        } else {
            apply_sign(f64::INFINITY, neg)
        };
    }
    if x_neg && yc == IntClass::NotInt {
        return (x - x) / (x - x);
    }
    if ax == ONE_BITS {
        return apply_sign(1.0, neg);
    }

    let mut adj = 0i64;
    if ax < 0x0010_0000_0000_0000 {
        ax = f64_to_bits(f64_from_bits(ax) * f64::from_bits(0x4330_0000_0000_0000));
        adj = 52;
    }

    let l = log2_dd(ax, adj);
    let zest = y * l.hi;
    if zest > POW_BOUND {
        return apply_sign(f64::INFINITY, neg);
    }
    if zest < -POW_BOUND {
        return apply_sign(0.0, neg);
    }

    // |y| < 2^63 here, so the product split cannot overflow
    apply_sign(exp2_dd(l.mul_f64(y)), neg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ulps(actual: f64, expected: f64) -> f64 {
        if actual == expected {
            return 0.0;
        }
        let e = expected.abs();
        let ulp = if e < f64::MIN_POSITIVE {
            f64::from_bits(1)
        } else {
            e.next_up() - e
        };
        (actual - expected).abs() / ulp
    }

    #[test]
    fn test_int_class() {
        let cases = [
            (1.0, IntClass::Odd),
            (-3.0, IntClass::Odd),
            (2.0, IntClass::Even),
            (0.5, IntClass::NotInt),
            (3.5, IntClass::NotInt),
            (f64::from_bits(1), IntClass::NotInt),
            (4_503_599_627_370_497.0, IntClass::Odd), // 2^52 + 1
            (9_007_199_254_740_992.0, IntClass::Even), // 2^53
            (1e300, IntClass::Even),
            (f64::MAX, IntClass::Even),
        ];
        for &(y, class) in &cases {
            assert_eq!(int_class(f64_to_bits(y)), class, "int_class({y})");
        }
    }

    #[test]
    fn test_pow_log2_table() {
        let scale = f64::from_bits(0x4290_0000_0000_0000); // 2^42
        for i in 0..=512usize {
            let hi = f64_from_bits(POW_LOG2_TAB_U64[2 * i]);
            let lo = f64_from_bits(POW_LOG2_TAB_U64[2 * i + 1]);
            let b = (512 + i) as f64 / 1024.0;
            assert!((hi + lo + b.log2()).abs() <= 2e-16, "entry {i}");
            assert!(lo.abs() <= f64::from_bits(0x3d50_0000_0000_0000), "entry {i}");
            let h = hi * scale;
            assert_eq!(h, h.trunc(), "entry {i} hi is not a multiple of 2^-42");
        }
        assert_eq!(f64_from_bits(POW_LOG2_TAB_U64[0]), 1.0);
        assert_eq!(f64_from_bits(POW_LOG2_TAB_U64[1024]), 0.0);
    }

    #[test]
    fn test_pow_exp2_table() {
        for j in 0..N as usize {
            let tail = f64_from_bits(POW_EXP2_TAB_U64[2 * j]);
            let hi = f64_from_bits(POW_EXP2_TAB_U64[2 * j + 1]);
            assert!((1.0..2.0).contains(&hi), "entry {j}");
            assert!(tail.abs() < f64::EPSILON, "entry {j}");
            assert!(ulps(hi, (j as f64 * INV_N).exp2()) <= 1.0, "entry {j}");
        }
    }

    #[test]
    fn test_log2_dd() {
        for &x in &[
            1.5,
            0.75,
            3.0,
            10.0,
            1.000_000_000_000_000_2,
            0.999_999_999_999_999_9,
            1e300,
            1e-300,
            f64::MAX,
            f64::MIN_POSITIVE,
        ] {
            let l = log2_dd(f64_to_bits(x), 0);
            assert_eq!(l.hi, l.hi + l.lo, "log2_dd({x}) not normalized");
            assert!(ulps(l.hi, x.log2()) <= 1.0, "log2_dd({x}) = {}", l.hi);
        }
        let l = log2_dd(f64_to_bits(8.0), 0);
        assert_eq!((l.hi, l.lo), (3.0, 0.0));
        let sub = f64::from_bits(0x0008_0000_0000_0000) * f64::from_bits(0x4330_0000_0000_0000);
        let l = log2_dd(f64_to_bits(sub), 52);
        assert_eq!(l.hi, -1023.0);
    }

    #[test]
    fn test_exp2_dd() {
        for &z in &[0.0, 0.5, -0.5, 10.25, -10.3, 1000.7, 1023.99, -1021.5, -1060.25, -1074.0] {
            let actual = exp2_dd(DoubleDouble::from_f64(z));
            let expected = z.exp2();
            assert!(
                ulps(actual, expected) <= 1.0,
                "exp2_dd({z}) = {actual:e}, expected {expected:e}"
            );
        }
        assert_eq!(exp2_dd(DoubleDouble::from_f64(1024.0)), f64::INFINITY);
        assert_eq!(exp2_dd(DoubleDouble::from_f64(-1090.0)), 0.0);
        // the low word moves the result
        let z = DoubleDouble::new(0.5, 1e-17);
        assert!(exp2_dd(z) >= core::f64::consts::SQRT_2);
    }

    #[test]
    fn test_pow_exact_powers_of_two() {
        for k in -1074..=1023i32 {
            let expected = if k >= -1022 {
                f64::from_bits(((k + 1023) as u64) << 52)
            } else {
                f64::from_bits(1u64 << (k + 1074))
            };
            assert_eq!(pow(2.0, k as f64), expected, "pow(2, {k})");
        }
        assert_eq!(pow(2.0, -1075.0), 0.0);
        assert_eq!(pow(2.0, 1024.0), f64::INFINITY);
        assert_eq!(pow(0.5, 3.0), 0.125);
        assert_eq!(pow(4.0, 0.5), 2.0);
    }

    #[test]
    fn test_pow_negative_base_signs() {
        assert_eq!(pow(-2.0, 3.0), -8.0);
        assert_eq!(pow(-2.0, 4.0), 16.0);
        assert_eq!(pow(-1.0, 1e300), 1.0);
        assert_eq!(pow(-1.0, -3.0), -1.0);
        assert_eq!(pow(-1.0, 4_503_599_627_370_497.0), -1.0);
        assert_eq!(pow(-2.0, 1025.0), f64::NEG_INFINITY);
        assert_eq!(pow(-2.0, -1073.0), -f64::from_bits(2));
        let z = pow(-2.0, -1075.0);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
        let z = pow(-2.0, -1201.0);
        assert!(z == 0.0 && z.is_sign_negative());
        assert!(pow(-2.0, 0.5).is_nan());
    }

    #[test]
    fn test_pow_subnormal_base() {
        for &(x, y) in &[
            (f64::from_bits(1), 0.5),
            (f64::from_bits(1), -0.25),
            (f64::from_bits(0x0000_0000_0123_4567), 0.3),
            (f64::MIN_POSITIVE / 3.0, -0.01),
            (f64::from_bits(0x0008_0000_0000_0000), 1.0),
        ] {
            let actual = pow(x, y);
            let expected = x.powf(y);
            assert!(
                ulps(actual, expected) <= 1.0,
                "pow({x:e}, {y}) = {actual:e}, expected {expected:e}"
            );
        }
    }

    #[test]
    fn test_pow_near_one_large_exponent() {
        for &(x, y) in &[
            (1.000_000_000_000_000_2, 1e15),
            (0.999_999_999_999_999_9, -3e15),
            (1.000_001, 700_000.0),
            (0.999_999, 5e8),
            (1.000_000_000_1, -7e12),
        ] {
            let actual = pow(x, y);
            let expected = x.powf(y);
            assert!(
                ulps(actual, expected) <= 1.0,
                "pow({x}, {y}) = {actual:e}, expected {expected:e}"
            );
        }
    }

    #[test]
    fn test_pow_unit_base() {
        assert!(pow(1.0, f64::NAN).is_nan());
        assert!(pow(1.0, f64::INFINITY).is_nan());
        assert!(pow(1.0, f64::NEG_INFINITY).is_nan());
        assert_eq!(pow(1.0, 0.0), 1.0);
        assert_eq!(pow(1.0, -0.0), 1.0);
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        for &y in &[3.5, -2.0, 0.5, 1e308, -1e308, f64::from_bits(1), f64::MAX] {
            assert_eq!(pow(1.0, y), 1.0, "pow(1, {y:e})");
        }
    }
}
