use criterion::Criterion;
use ddmaths::ddlibm;

use bench_util::{bench_inputs, configure_criterion, gen_log_uniform, gen_range, glibc_log};

fn bench_log(c: &mut Criterion) {
    let inputs = [
        f64::from_bits(1),
        f64::MIN_POSITIVE,
        1e-300,
        1e-20,
        1e-6,
        0.1,
        0.5,
        0.9,
        1.0,
        1.000_000_000_001,
        2.0,
        10.0,
        1e5,
        1e100,
    ];
    let near_one = gen_range(1024, 0.985, 1.015, 0x0e1);
    let wide = gen_log_uniform(1024, -1000, 1000, 0x106);

    let mut group = c.benchmark_group("log/smoke");
    bench_inputs(&mut group, &inputs, ddlibm::log, glibc_log);
    group.finish();

    let mut group = c.benchmark_group("log/near_one");
    bench_inputs(&mut group, &near_one, ddlibm::log, glibc_log);
    group.finish();

    let mut group = c.benchmark_group("log/wide");
    bench_inputs(&mut group, &wide, ddlibm::log, glibc_log);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_log(&mut c);
    c.final_summary();
}
