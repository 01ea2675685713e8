use crate::{
    prelude::{
        AprioriTimeSeries, AprioriValues, Epoch, Error, EvaluationGrid, GlobalMapping,
        GlobalMappingConfig, Linspace, StaticApriori, TimeSeries, Unit, GRS80,
    },
    tests::init_logger,
};

fn small_grid() -> EvaluationGrid {
    EvaluationGrid::default()
        .with_elevation_space(Linspace::new(5.0, 85.0, 20.0).unwrap())
        .with_azimuth_space(Linspace::new(-90.0, 90.0, 90.0).unwrap())
}

#[test]
fn vienna_grid_evaluation() {
    init_logger();

    let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
    let apriori = AprioriValues::from_zenith_delays(2.3, 0.1).with_dry_gradients(1.0E-3, 0.0);
    let mut model = GlobalMapping::new(config, StaticApriori::new(vec![apriori])).unwrap();

    let t0 = Epoch::from_mjd_utc(55055.0);
    let epochs = TimeSeries::inclusive(t0, t0 + 12.0 * Unit::Hour, 6.0 * Unit::Hour);

    let grid = small_grid();
    assert_eq!(grid.len(), 15);

    let evaluated = grid
        .evaluate_station(&mut model, &GRS80, 16.37, 48.2, 156.0, epochs)
        .unwrap_or_else(|e| panic!("grid evaluation failed: {}", e));

    assert_eq!(evaluated.len(), 3);
    assert_eq!(evaluated[0].epoch, t0);
    assert_eq!(evaluated[2].epoch, t0 + 12.0 * Unit::Hour);

    for grid_epoch in evaluated.iter() {
        assert_eq!(grid_epoch.samples.len(), 15);

        // highest elevation first
        assert_eq!(grid_epoch.samples[0].point.y(), 85.0);
        assert_eq!(grid_epoch.samples[14].point.y(), 5.0);

        for window in grid_epoch.samples.windows(2) {
            assert!(window[0].point.y() >= window[1].point.y());
        }

        for sample in grid_epoch.samples.iter() {
            assert!(sample.mapf_hydrostatic >= 1.0);
            assert!(sample.mapf_wet >= 1.0);
            assert!(sample.slant_delay > 2.4);

            // no east partial due north
            if sample.point.x() == 0.0 {
                assert_eq!(sample.gradient_east, 0.0);
                assert!(sample.gradient_north > 0.0);
            }
        }

        // north gradient increases the delay due north, compared to due east
        let (north, east) = (&grid_epoch.samples[13], &grid_epoch.samples[14]);
        assert_eq!(north.point.x(), 0.0);
        assert_eq!(east.point.x(), 90.0);
        assert!(north.slant_delay > east.slant_delay);
    }

    // reference values, due north at e=5°
    let sample = &evaluated[0].samples[13];
    assert!((sample.mapf_hydrostatic - 10.116824369806823).abs() < 1.0E-8);
    assert!((sample.mapf_wet - 10.761454414592242).abs() < 1.0E-8);
}

#[test]
fn grid_evaluation_coverage() {
    init_logger();

    let t0 = Epoch::from_mjd_utc(55055.0);
    let t1 = t0 + 6.0 * Unit::Hour;

    let series = AprioriTimeSeries::default()
        .with_node(t0, vec![AprioriValues::from_zenith_delays(2.30, 0.10)])
        .with_node(t1, vec![AprioriValues::from_zenith_delays(2.32, 0.14)]);

    let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
    let mut model = GlobalMapping::new(config, series).unwrap();

    let grid = small_grid();

    let evaluated = grid
        .evaluate_station(
            &mut model,
            &GRS80,
            0.0,
            0.0,
            0.0,
            vec![t0, t0 + 3.0 * Unit::Hour, t1],
        )
        .unwrap();

    assert_eq!(evaluated.len(), 3);

    // zenith-most samples follow the interpolated zenith delays
    let zenith = evaluated
        .iter()
        .map(|grid_epoch| grid_epoch.samples[0].slant_delay)
        .collect::<Vec<_>>();

    assert!(zenith[0] < zenith[1]);
    assert!(zenith[1] < zenith[2]);

    // epoch not covered by the a priori time series
    match grid.evaluate(&mut model, 0, vec![t0, t1 + 1.0 * Unit::Second]) {
        Err(Error::EpochOutOfRange(epoch)) => {
            assert_eq!(epoch, t1 + 1.0 * Unit::Second);
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn invalid_grid_evaluation() {
    init_logger();

    let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
    let apriori = StaticApriori::new(vec![AprioriValues::from_zenith_delays(2.3, 0.1)]);
    let mut model = GlobalMapping::new(config, apriori).unwrap();

    let mut grid = small_grid();
    grid.azimuth.spacing = 0.0;

    let t0 = Epoch::from_mjd_utc(55055.0);

    match grid.evaluate_station(&mut model, &GRS80, 16.37, 48.2, 156.0, vec![t0]) {
        Err(Error::InvalidGridSpacing) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}
