//! Criterion benchmarks for powercalc_core solving and curve generation
//!
//! Run with: cargo bench -p powercalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use powercalc_core::analysis::{
    CurveConfig, CurveMetric, SweepParameter, evaluate_curve, generate_curve, select_scenarios,
};
use powercalc_core::model::{Design, Param, ParameterSet, SolveDirection};
use powercalc_core::solve::solve;

fn two_means() -> ParameterSet {
    ParameterSet::from([
        (Param::Alpha, 0.05),
        (Param::Power, 0.8),
        (Param::MeanA, 132.86),
        (Param::MeanB, 127.44),
        (Param::StdDevA, 15.34),
        (Param::StdDevB, 18.23),
        (Param::Kappa, 2.0),
    ])
}

fn mcnemar() -> ParameterSet {
    ParameterSet::from([
        (Param::Alpha, 0.05),
        (Param::Power, 0.8),
        (Param::P10, 0.05),
        (Param::P01, 0.45),
    ])
}

fn bench_single_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let params = two_means();

    group.bench_function("two_means_sample_size", |b| {
        b.iter(|| {
            solve(
                black_box(Design::TwoMeansOneSided),
                SolveDirection::SampleSize,
                black_box(&params),
            )
        })
    });

    let with_n = two_means().with(Param::SampleSize, 85.0);
    group.bench_function("two_means_power", |b| {
        b.iter(|| {
            solve(
                black_box(Design::TwoMeansOneSided),
                SolveDirection::Power,
                black_box(&with_n),
            )
        })
    });

    group.finish();
}

fn bench_sample_size_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_size_curve");

    let cases = [
        ("two_means", Design::TwoMeansOneSided, two_means(), Param::MeanA, 120.0, 140.0),
        ("mcnemar", Design::McNemarTwoSided, mcnemar(), Param::P10, 0.01, 0.3),
    ];

    for (name, design, params, parameter, min, max) in cases.iter() {
        for requested in [0.8, 0.9] {
            let scenarios = select_scenarios(Some(requested));
            group.bench_with_input(
                BenchmarkId::new(*name, scenarios.len()),
                &scenarios,
                |b, scenarios| {
                    b.iter(|| {
                        generate_curve(
                            black_box(*design),
                            black_box(params),
                            *parameter,
                            *min,
                            *max,
                            scenarios,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_power_curve(c: &mut Criterion) {
    let params = two_means();
    let scenarios = select_scenarios(Some(0.8));
    let config = CurveConfig {
        design: Design::TwoMeansOneSided,
        sweep: SweepParameter::new(Param::SampleSize, 10.0, 300.0),
        metric: CurveMetric::Power,
    };

    c.bench_function("power_curve_two_means", |b| {
        b.iter(|| evaluate_curve(black_box(&config), black_box(&params), &scenarios))
    });
}

criterion_group!(
    benches,
    bench_single_solve,
    bench_sample_size_curve,
    bench_power_curve,
);
criterion_main!(benches);
