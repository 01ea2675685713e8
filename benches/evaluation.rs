extern crate criterion;

use criterion::{Criterion, criterion_group, criterion_main};
use std::time::Duration;

use gmf::prelude::*;

fn model() -> GlobalMapping<StaticApriori> {
    let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
    let apriori = StaticApriori::new(vec![AprioriValues::from_zenith_delays(2.3, 0.1)]);

    let mut model = GlobalMapping::new(config, apriori).unwrap();

    model
        .init(&[GRS80.to_cartesian(16.37_f64.to_radians(), 48.2_f64.to_radians(), 156.0)])
        .unwrap();

    model
}

fn benchmark(c: &mut Criterion) {
    let mut evaluation_grp = c.benchmark_group("evaluation");

    evaluation_grp.measurement_time(Duration::from_secs(20));

    let epoch = Epoch::from_mjd_utc(55055.0);
    let elevation = 10.0_f64.to_radians();

    evaluation_grp.bench_function("GMF/init", |b| {
        b.iter(|| {
            let _ = model();
        })
    });

    let mut vienna = model();

    evaluation_grp.bench_function("GMF/mapf", |b| {
        b.iter(|| {
            let _ = vienna.mapping_function_hydrostatic(epoch, 0, 0.0, elevation);
            let _ = vienna.mapping_function_wet(epoch, 0, 0.0, elevation);
        })
    });

    evaluation_grp.bench_function("GMF/slant_delay", |b| {
        b.iter(|| {
            let _ = vienna.slant_delay(epoch, 0, 0.0, elevation).unwrap();
        })
    });

    let grid = EvaluationGrid::default();

    evaluation_grp.bench_function("GMF/grid", |b| {
        b.iter(|| {
            let _ = grid.evaluate(&mut vienna, 0, [epoch]).unwrap();
        })
    });

    evaluation_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
