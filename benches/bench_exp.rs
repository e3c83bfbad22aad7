use criterion::Criterion;
use ddmaths::ddlibm;

use bench_util::{bench_inputs, configure_criterion, gen_range, glibc_exp};

fn bench_exp(c: &mut Criterion) {
    let inputs = [
        -745.133_219_101_941_1,
        -720.0,
        -100.0,
        -20.0,
        -1.0,
        -1e-6,
        0.0,
        1e-6,
        0.5,
        1.0,
        2.0,
        10.0,
        100.0,
        709.5,
    ];
    let common = gen_range(1024, -20.0, 20.0, 0x51ed);
    let wide = gen_range(1024, -745.0, 709.7, 0xe4b);

    let mut group = c.benchmark_group("exp/smoke");
    bench_inputs(&mut group, &inputs, ddlibm::exp, glibc_exp);
    group.finish();

    let mut group = c.benchmark_group("exp/common");
    bench_inputs(&mut group, &common, ddlibm::exp, glibc_exp);
    group.finish();

    // exercises the scaled paths near overflow and in the subnormal range
    let mut group = c.benchmark_group("exp/wide");
    bench_inputs(&mut group, &wide, ddlibm::exp, glibc_exp);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp(&mut c);
    c.final_summary();
}
