//! Table-driven exp/log/pow kernels.
//!
//! Every kernel reduces its argument with a small lookup table, evaluates a
//! short polynomial on the reduced argument and rebuilds the result with
//! double-double corrections, touching only bit patterns and basic IEEE
//! arithmetic. Special operands are resolved from the raw bits before any
//! arithmetic happens.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod dd;
mod exp;
mod exp_data;
mod log;
mod log_data;
mod pow;
mod pow_data;
mod status;

pub use classify::{FpClass, classify};
pub use dd::DoubleDouble;
pub use exp::exp;
pub use log::log;
pub use pow::pow;
pub use status::{MathError, MathErrorKind, exp_checked, log_checked, pow_checked};

// ========= bit helpers =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;
const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
const MANT_MASK: u64 = 0x000f_ffff_ffff_ffff;
const ONE_BITS: u64 = 0x3ff0_0000_0000_0000;

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}

#[inline(always)]
fn is_nan_bits(u: u64) -> bool {
    (u & EXP_MASK) == EXP_MASK && (u & MANT_MASK) != 0
}

#[inline(always)]
fn is_inf_bits(u: u64) -> bool {
    (u & ABS_MASK) == EXP_MASK
}

/// Round to nearest integer, ties to even. Requires |x| < 2^52.
#[inline(always)]
fn round_ties_even(x: f64) -> i64 {
    let t = x as i64;
    let frac = x - t as f64;
    if frac > 0.5 || (frac == 0.5 && (t & 1) != 0) {
        t + 1
    } else if frac < -0.5 || (frac == -0.5 && (t & 1) != 0) {
        t - 1
    } else {
        t
    }
}

/// Adds `n` to the biased exponent field of `bits` (wrapping; callers with
/// |n| > 1020 go through `exp_scaled`).
#[inline(always)]
fn add_exponent(bits: u64, n: i64) -> u64 {
    bits.wrapping_add((n as u64) << 52)
}
