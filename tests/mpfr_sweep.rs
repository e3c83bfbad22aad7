#![cfg(feature = "mpfr")]

use ddmaths::ddlibm;
use rug::Float;
use rug::ops::Pow;
use std::env;

const MPFR_PREC: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Kernel {
    Exp,
    Log,
    Pow(f64),
}

impl Kernel {
    fn from_env() -> Kernel {
        let y = env::var("DDMATHS_MPFR_Y")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(2.5);
        match env::var("DDMATHS_MPFR_FN").as_deref() {
            Ok("log") => Kernel::Log,
            Ok("pow") => Kernel::Pow(y),
            _ => Kernel::Exp,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kernel::Exp => "exp",
            Kernel::Log => "log",
            Kernel::Pow(_) => "pow",
        }
    }

    fn mpfr(self, x: f64) -> f64 {
        let mut v = Float::with_val(MPFR_PREC, x);
        match self {
            Kernel::Exp => {
                v.exp_mut();
                v.to_f64()
            }
            Kernel::Log => {
                v.ln_mut();
                v.to_f64()
            }
            Kernel::Pow(y) => {
                let e = Float::with_val(MPFR_PREC, y);
                let r: Float = v.pow(&e);
                r.to_f64()
            }
        }
    }

    fn ddlibm(self, x: f64) -> f64 {
        match self {
            Kernel::Exp => ddlibm::exp(x),
            Kernel::Log => ddlibm::log(x),
            Kernel::Pow(y) => ddlibm::pow(x, y),
        }
    }

    fn glibc(self, g: &LibmFns, x: f64) -> f64 {
        unsafe {
            match self {
                Kernel::Exp => (g.exp)(x),
                Kernel::Log => (g.log)(x),
                Kernel::Pow(y) => (g.pow)(x, y),
            }
        }
    }
}

fn ulp_size(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let next = if x.is_sign_negative() {
        x.next_down()
    } else {
        x.next_up()
    };
    (next - x).abs()
}

fn ulp_error(actual: f64, expected: f64) -> f64 {
    if actual.is_nan() && expected.is_nan() {
        return 0.0;
    }
    let diff = (actual - expected).abs();
    if diff == 0.0 {
        return 0.0;
    }
    let ulp = ulp_size(expected);
    if !ulp.is_finite() || ulp == 0.0 {
        return f64::INFINITY;
    }
    diff / ulp
}

struct LibmFns {
    exp: unsafe extern "C" fn(f64) -> f64,
    log: unsafe extern "C" fn(f64) -> f64,
    pow: unsafe extern "C" fn(f64, f64) -> f64,
}

fn glibc_opt() -> Option<LibmFns> {
    let path = env::var("DDMATHS_GLIBC_LIBM")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            let default = "/lib/x86_64-linux-gnu/libm.so.6";
            if std::path::Path::new(default).exists() {
                Some(default.to_string())
            } else {
                None
            }
        })?;

    let lib = unsafe { libloading::Library::new(&path).ok()? };
    let lib = Box::leak(Box::new(lib));
    unsafe {
        let exp: libloading::Symbol<unsafe extern "C" fn(f64) -> f64> = lib.get(b"exp").ok()?;
        let log: libloading::Symbol<unsafe extern "C" fn(f64) -> f64> = lib.get(b"log").ok()?;
        let pow: libloading::Symbol<unsafe extern "C" fn(f64, f64) -> f64> =
            lib.get(b"pow").ok()?;
        Some(LibmFns {
            exp: *exp,
            log: *log,
            pow: *pow,
        })
    }
}

fn sweep_offsets(radius: i64, stride: i64) -> Vec<i64> {
    let mut offsets = Vec::new();
    let mut off = -radius;
    while off <= radius {
        offsets.push(off);
        off = off.saturating_add(stride);
        if off == i64::MAX {
            break;
        }
    }
    offsets
}

fn offset_bits(base: u64, offset: i64) -> f64 {
    let bits = if offset < 0 {
        base.wrapping_sub(offset.unsigned_abs())
    } else {
        base.wrapping_add(offset as u64)
    };
    f64::from_bits(bits)
}

struct ReportRow {
    label: &'static str,
    x: f64,
    mpfr: f64,
    fast: f64,
    fast_ulps: f64,
    glibc: Option<(f64, f64)>,
}

fn push_report(
    rows: &mut Vec<ReportRow>,
    kernel: Kernel,
    label: &'static str,
    x: f64,
    glibc: Option<&LibmFns>,
) {
    let mpfr = kernel.mpfr(x);
    let fast = kernel.ddlibm(x);
    let fast_ulps = ulp_error(fast, mpfr);
    let glibc_row = glibc
        .map(|g| kernel.glibc(g, x))
        .map(|v| (v, ulp_error(v, mpfr)));
    rows.push(ReportRow {
        label,
        x,
        mpfr,
        fast,
        fast_ulps,
        glibc: glibc_row,
    });
}

fn print_report(rows: &[ReportRow]) {
    println!("| Case | x | mpfr bits | ddlibm bits | ddlibm ulp | glibc bits | glibc ulp |");
    println!("| :--- | ---: | :--- | :--- | ---: | :--- | ---: |");
    for row in rows {
        let mpfr_bits = format!("{:016x}", row.mpfr.to_bits());
        let fast_bits = format!("{:016x}", row.fast.to_bits());
        let (glibc_bits, glibc_ulps) = match row.glibc {
            Some((v, ulps)) => (format!("{:016x}", v.to_bits()), format!("{ulps:.3}")),
            None => ("n/a".to_string(), "n/a".to_string()),
        };
        println!(
            "| {} | {:.17e} | {} | {} | {:.3} | {} | {} |",
            row.label, row.x, mpfr_bits, fast_bits, row.fast_ulps, glibc_bits, glibc_ulps
        );
    }
}

struct SweepResult {
    max_ulps: f64,
    max_x: f64,
    first_mismatch: Option<(f64, f64, f64)>,
}

fn sweep(kernel: Kernel, x0: f64, radius: i64, stride: i64) -> SweepResult {
    let base_bits = x0.to_bits();
    let mut result = SweepResult {
        max_ulps: 0.0,
        max_x: x0,
        first_mismatch: None,
    };
    for offset in sweep_offsets(radius, stride.max(1)) {
        let x = offset_bits(base_bits, offset);
        let expected = kernel.mpfr(x);
        let actual = kernel.ddlibm(x);
        let ulps = ulp_error(actual, expected);
        if ulps > result.max_ulps {
            result.max_ulps = ulps;
            result.max_x = x;
        }
        if result.first_mismatch.is_none() && ulps != 0.0 {
            result.first_mismatch = Some((x, actual, expected));
        }
    }
    result
}

#[test]
fn mpfr_sweep_fixed_points() {
    // neighbourhoods of the table and range-reduction seams
    let cases = [
        (Kernel::Exp, f64::from_bits(0x3c90_0000_0000_0000)),
        (Kernel::Exp, std::f64::consts::LN_2 / 128.0),
        (Kernel::Exp, -708.396_418_532_264_1),
        (Kernel::Exp, 709.78),
        (Kernel::Log, 1.0),
        (Kernel::Log, 0.984_375),
        (Kernel::Log, 1.015_625),
        (Kernel::Log, f64::MIN_POSITIVE),
        (Kernel::Pow(0.5), 2.0),
        (Kernel::Pow(-1.5), 1.0),
        (Kernel::Pow(1000.5), 1.5),
    ];
    for (kernel, x0) in cases {
        let result = sweep(kernel, x0, 2_000, 1);
        assert!(
            result.max_ulps <= 1.0,
            "{} sweep around {x0}: ulps={} at x={}",
            kernel.name(),
            result.max_ulps,
            result.max_x
        );
    }
}

#[test]
fn mpfr_sweep() {
    let x0 = match env::var("DDMATHS_MPFR_X") {
        Ok(v) => v.parse::<f64>().expect("DDMATHS_MPFR_X must be f64"),
        Err(_) => return,
    };
    let kernel = Kernel::from_env();
    let radius = env::var("DDMATHS_MPFR_RADIUS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(10_000);
    let stride = env::var("DDMATHS_MPFR_STRIDE")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);

    let glibc = glibc_opt();
    let result = sweep(kernel, x0, radius, stride);
    let mut report = Vec::new();
    push_report(&mut report, kernel, "x0", x0, glibc.as_ref());

    let mut max_glibc_ulps = 0.0f64;
    let mut max_glibc_x = x0;
    if let Some(ref g) = glibc {
        for offset in sweep_offsets(radius, stride.max(1)) {
            let x = offset_bits(x0.to_bits(), offset);
            let gulps = ulp_error(kernel.glibc(g, x), kernel.mpfr(x));
            if gulps > max_glibc_ulps {
                max_glibc_ulps = gulps;
                max_glibc_x = x;
            }
        }
    }

    println!(
        "MPFR {} sweep around x0={x0} (radius={radius} stride={stride})",
        kernel.name()
    );
    println!(
        "ddlibm max ulp error vs MPFR: ulps={} at x={}",
        result.max_ulps, result.max_x
    );
    if let Some((x, actual, expected)) = result.first_mismatch {
        println!(
            "first ddlibm mismatch: x={x} actual={actual:.17e} expected={expected:.17e} ulps={}",
            ulp_error(actual, expected)
        );
    } else {
        println!("no mismatches against MPFR in sweep range");
    }

    if glibc.is_some() {
        println!("glibc max ulp error vs MPFR: ulps={max_glibc_ulps} at x={max_glibc_x}");
    }

    push_report(&mut report, kernel, "ddlibm_max", result.max_x, glibc.as_ref());
    if glibc.is_some() {
        push_report(&mut report, kernel, "glibc_max", max_glibc_x, glibc.as_ref());
    }
    if let Some((x, _, _)) = result.first_mismatch {
        push_report(&mut report, kernel, "ddlibm_first", x, glibc.as_ref());
    }

    let report_enabled = env::var("DDMATHS_MPFR_REPORT")
        .ok()
        .map(|v| v != "0")
        .unwrap_or(true);
    if report_enabled {
        print_report(&report);
    }
    assert!(result.max_ulps <= 1.0);
}
