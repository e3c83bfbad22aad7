use super::dd::DoubleDouble;
use super::log_data::{LOG_TAB_U64, LOG_TABLE_BITS};
use super::{MANT_MASK, ONE_BITS, f64_from_bits, f64_to_bits};

// ========= ln(x) =========

const LN2_HI: f64 = f64::from_bits(0x3fe62e42fefa3800);
const LN2_LO: f64 = f64::from_bits(0x3d2ef35793c76730);

// ln(1+r) - r ~ A2 r^2 + ... + A7 r^7, fitted on |r| <= 2^-8 with A2 = -1/2 kept exact
const LOG_A2: f64 = f64::from_bits(0xbfe0000000000000);
const LOG_A3: f64 = f64::from_bits(0x3fd5555555555555);
const LOG_A4: f64 = f64::from_bits(0xbfcffffffffb13dd);
const LOG_A5: f64 = f64::from_bits(0x3fc999999995397b);
const LOG_A6: f64 = f64::from_bits(0xbfc555692d7915c1);
const LOG_A7: f64 = f64::from_bits(0x3fc2493635f77669);

// (ln(1+r) - r + r^2/2) / r^3 ~ C0 + C1 r + ... + C6 r^6 on |r| <= 2^-6
const LOG_C0: f64 = f64::from_bits(0x3fd5555555555555);
const LOG_C1: f64 = f64::from_bits(0xbfd0000000000b34);
const LOG_C2: f64 = f64::from_bits(0x3fc999999999adf9);
const LOG_C3: f64 = f64::from_bits(0xbfc555554a212f68);
const LOG_C4: f64 = f64::from_bits(0x3fc249248819b8e1);
const LOG_C5: f64 = f64::from_bits(0xbfc001667dbd1bd0);
const LOG_C6: f64 = f64::from_bits(0x3fbc7452ea70c3bd);

const NEAR_LO: u64 = 0x3fef800000000000; // 1 - 2^-6
const NEAR_HI: u64 = 0x3ff0400000000000; // 1 + 2^-6

/// Splits a positive normal `ix` into x = 2^k * m with m in [1, 2) and
/// returns `k`, the table index `i` and r = B_i * m - 1 as a double-double.
///
/// B_i = (2^BITS + i) / 2^(BITS+1) approximates 1/m to `BITS` fraction
/// bits; it comes from a single-precision reciprocal of m truncated to 23
/// mantissa bits. With m split after 52 - BITS - 1 fraction bits both
/// partial products are exact.
#[inline(always)]
pub(super) fn log_reduce<const BITS: u32>(ix: u64) -> (i64, usize, DoubleDouble) {
    let k = ((ix >> 52) & 0x7ff) as i64 - 1023;
    let mbits = (ix & MANT_MASK) | ONE_BITS;
    let m = f64_from_bits(mbits);

    let shift = 23 - BITS;
    let mf = f32::from_bits(0x3f80_0000 | ((ix & MANT_MASK) >> 29) as u32);
    let b0 = 1.0f32 / mf;
    let bb = (b0.to_bits() + (1u32 << (shift - 1))) & !((1u32 << shift) - 1);
    let i = ((bb >> shift) & ((1u32 << (BITS + 1)) - 1)) as usize;
    let b = f32::from_bits(bb) as f64;

    let mhi = f64_from_bits(mbits & !((1u64 << (BITS + 1)) - 1));
    let mlo = m - mhi;
    (k, i, DoubleDouble::fast_two_sum(b * mhi - 1.0, b * mlo))
}

#[inline(always)]
fn near_one_tail(r: f64) -> f64 {
    let r2 = r * r;
    LOG_C0
        + r * LOG_C1
        + r2 * (LOG_C2 + r * LOG_C3)
        + r2 * r2 * (LOG_C4 + r * LOG_C5 + r2 * LOG_C6)
}

#[inline(always)]
fn log_poly(r: f64) -> f64 {
    let r2 = r * r;
    r2 * (LOG_A2 + r * LOG_A3 + r2 * LOG_A4) + r2 * r2 * r * (LOG_A5 + r * LOG_A6 + r2 * LOG_A7)
}

/// ln(x) for |x - 1| < 2^-6: r - r^2/2 is carried as a double-double and the
/// cubic tail is added once.
#[inline(always)]
fn log_near_one(x: f64) -> f64 {
    let r = x - 1.0;
    let half_sq = DoubleDouble::two_prod(r, r).mul_f64(LOG_A2);
    let s = DoubleDouble::from_f64(r).add(half_sq);
    s.hi + (s.lo + r * r * r * near_one_tail(r))
}

#[inline(always)]
pub fn log(x: f64) -> f64 {
    let mut ix = f64_to_bits(x);

    if ix.wrapping_sub(NEAR_LO) < NEAR_HI - NEAR_LO {
        if ix == ONE_BITS {
            return 0.0;
        }
        return log_near_one(x);
    }

    let top = (ix >> 48) as u32;
    let mut adj = 0i64;
    if top.wrapping_sub(0x0010) >= 0x7ff0 - 0x0010 {
        if (ix << 1) == 0 {
            // pole
            return -1.0 / (x * x);
        }
        if ix == 0x7ff0_0000_0000_0000 {
            return x;
        }
        if (top & 0x7ff0) == 0x7ff0 && (ix << 12) != 0 {
            return x;
        }
        if (top & 0x8000) != 0 {
            return (x - x) / (x - x);
        }
        ix = f64_to_bits(x * f64::from_bits(0x4330_0000_0000_0000));
        adj = 52;
    }

    let (k, i, r) = log_reduce::<LOG_TABLE_BITS>(ix);
    let kd = (k - adj) as f64;
    let thi = f64_from_bits(LOG_TAB_U64[2 * i]);
    let tlo = f64_from_bits(LOG_TAB_U64[2 * i + 1]);

    // k * LN2_HI + thi is exact
    let t = DoubleDouble::new(kd * LN2_HI + thi, kd * LN2_LO + tlo);
    let s = t.add(r);
    s.hi + (s.lo + log_poly(r.hi))
}
