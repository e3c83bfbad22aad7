use super::exp_data::{EXP_TAB_U64, EXP_TABLE_BITS};
use super::dd::DoubleDouble;
use super::{
    ABS_MASK, SIGN_MASK, add_exponent, f64_from_bits, f64_to_bits, get_exp_bits, round_ties_even,
};

// ========= exp(x) =========

const N: i64 = 1i64 << EXP_TABLE_BITS;
const INV_LN2_N: f64 = f64::from_bits(0x40571547652b82fe); // 64 / ln2
const LN2_HI_N: f64 = f64::from_bits(0x3f862e42fefa0000); // 17 trailing zero bits
const LN2_LO_N: f64 = f64::from_bits(0x3d1cf79abc9e3b3a);

// e^r - 1 ~ r + EXP_C2 r^2 + ... + EXP_C6 r^6 on |r| <= ln2 / 128
const EXP_C2: f64 = f64::from_bits(0x3fdffffffffffffe);
const EXP_C3: f64 = f64::from_bits(0x3fc5555555548ba1);
const EXP_C4: f64 = f64::from_bits(0x3fa55555555b9e25);
const EXP_C5: f64 = f64::from_bits(0x3f811115c090cf0f);
const EXP_C6: f64 = f64::from_bits(0x3f56c15ce3289860);

pub(super) const EXP_HI: f64 = 709.782712893384;
pub(super) const EXP_LO: f64 = -745.1332191019411;

// |x| below this rounds e^x to 1.
const TINY_TOP: i32 = 0x3c9;
// Scales with |n| above this take the two-step path.
const SCALE_LIMIT: i64 = 1020;
const MIN_NORMAL_BITS: u64 = 0x0010_0000_0000_0000;

/// 2^e for a normal-range exponent.
#[inline(always)]
fn pow2i(e: i64) -> f64 {
    f64_from_bits(((e + 0x3ff) as u64) << 52)
}

/// `2^n * hi * (1 + tmp)` for a table entry `tbits` whose exponent field is
/// that of 1.0, when 2^n alone is not representable.
///
/// The power is applied in two halves n1 + n2 = n so every intermediate stays
/// normal. A subnormal result is rounded from the full double-double sum, so
/// it rounds once.
#[inline(always)]
pub(super) fn exp_scaled(tmp: f64, tbits: u64, n: i64) -> f64 {
    let n1 = n / 2;
    let n2 = n - n1;
    let scale = f64_from_bits(add_exponent(tbits, n1));
    let y = DoubleDouble::new(scale, scale * tmp).normalize();
    if n > 0 {
        return y.value() * pow2i(n2);
    }

    let mut r = y.hi * pow2i(n2);
    if (f64_to_bits(r) & ABS_MASK) <= MIN_NORMAL_BITS {
        // r * 2^-n2 and y.hi lie within half a result ulp (h) of each other
        let d = y.hi - r * pow2i(-n2);
        let h = pow2i(-1075 - n2);
        if d != 0.0 {
            let sign = f64_to_bits(d) & SIGN_MASK;
            let excess = (f64_from_bits(f64_to_bits(d) & ABS_MASK) - h)
                + f64_from_bits(f64_to_bits(y.lo) ^ sign);
            if excess > 0.0 {
                r += f64_from_bits(sign | 1);
            }
        }
    }
    r
}

#[inline(always)]
pub fn exp(x: f64) -> f64 {
    let ux = f64_to_bits(x);
    let top = get_exp_bits(ux);
    if top == 0x7ff {
        if (ux << 12) != 0 {
            return x;
        }
        return if (ux >> 63) != 0 { 0.0 } else { f64::INFINITY };
    }
    if top < TINY_TOP {
        return 1.0 + x;
    }
    if x > EXP_HI {
        return f64::INFINITY;
    }
    if x < EXP_LO {
        return 0.0;
    }

    let k = round_ties_even(x * INV_LN2_N);
    let kd = k as f64;
    let r = (x - kd * LN2_HI_N) - kd * LN2_LO_N;

    let idx = (k & (N - 1)) as usize * 2;
    let n = k >> EXP_TABLE_BITS;
    let tail = f64_from_bits(EXP_TAB_U64[idx]);
    let tbits = EXP_TAB_U64[idx + 1];

    let r2 = r * r;
    let mut p = (r + tail) + r2 * r2 * r * (EXP_C5 + r * EXP_C6);
    p += r2 * r * (EXP_C3 + r * EXP_C4);
    let tmp = p + r2 * EXP_C2;
    if !(-SCALE_LIMIT..=SCALE_LIMIT).contains(&n) {
        return exp_scaled(tmp, tbits, n);
    }
    let scale = f64_from_bits(add_exponent(tbits, n));
    scale + scale * tmp
}
