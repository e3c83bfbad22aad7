#![no_std]

#[cfg(test)]
extern crate std;

pub mod maths;

pub use maths::ddlibm;
pub use maths::ddlibm::{
    DoubleDouble, FpClass, MathError, MathErrorKind, classify, exp, exp_checked, log, log_checked,
    pow, pow_checked,
};
