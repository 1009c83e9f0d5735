use assert_approx_eq::assert_approx_eq;

use cruise_fit::analyzer::{analyze, Flight, Params};
use cruise_fit::common::color::error_to_color;
use cruise_fit::common::error::Error;
use cruise_fit::common::structs::Coordinate;
use cruise_fit::dataset::RawDataset;
use cruise_fit::metric::{sphere_distance, Metric};
use cruise_fit::report::{ConsoleReporter, Reporter};

fn builtin_flights() -> Vec<Flight> {
    RawDataset::builtin().unwrap().resolve().unwrap()
}

#[test]
fn residuals_balance_out() {
    let flights = builtin_flights();
    for metric in Metric::ALL {
        let analysis = analyze(&flights, &metric, Params::default()).unwrap();
        assert_eq!(analysis.flights.len(), flights.len());

        // the fit is a ratio of totals, so the absolute residuals cancel
        let residual: f64 = analysis
            .flights
            .iter()
            .map(|f| f.error * analysis.scale.predict(f.average_duration))
            .sum();
        assert_approx_eq!(residual, 0.0);

        for f in &analysis.flights {
            assert!(f.error.is_finite());
            assert!(f.error > -1.0);
            assert_eq!(f.color, error_to_color(f.error * 2.0));
        }
    }
}

#[test]
fn qatar_from_sao_paulo() {
    let gru = Coordinate::new(-23.43, -46.47).unwrap();
    let doh = Coordinate::new(25.27, 51.61).unwrap();

    let flights = builtin_flights();
    let analysis = analyze(&flights, &Metric::Sphere, Params::default()).unwrap();
    let qtr = analysis
        .flights
        .iter()
        .find(|f| f.flight.name() == "QTR780")
        .unwrap();

    assert_approx_eq!(qtr.distance, sphere_distance(gru, doh));
    assert_approx_eq!(qtr.average_duration, 13.0 + 92.0 / 7.0 / 60.0);
    assert!(qtr.error.is_finite());
    let prediction = analysis.scale.predict(qtr.average_duration);
    assert_eq!(qtr.error > 0.0, qtr.distance > prediction);
}

#[test]
fn batches_are_independent() {
    let flights = builtin_flights();
    let sphere = analyze(&flights, &Metric::Sphere, Params::default()).unwrap();
    let map = analyze(&flights, &Metric::AeMap, Params::default()).unwrap();
    let sphere_again = analyze(&flights, &Metric::Sphere, Params::default()).unwrap();

    assert_ne!(sphere.scale, map.scale);
    assert_eq!(sphere.scale, sphere_again.scale);
    for (a, b) in sphere.flights.iter().zip(&map.flights) {
        assert_eq!(a.average_duration, b.average_duration);
    }
}

#[test]
fn empty_batch() {
    assert!(matches!(
        analyze(&[], &Metric::AeMap, Params::default()),
        Err(Error::EmptyBatch)
    ));
}

#[test]
fn plain_report() {
    yansi::Paint::disable();

    let flights = builtin_flights();
    let mut console = ConsoleReporter::new(Vec::new());
    for metric in Metric::ALL {
        let analysis = analyze(&flights, &metric, Params::default()).unwrap();
        console.analysis(metric.name(), &analysis).unwrap();
    }
    let out = String::from_utf8(console.into_inner()).unwrap();
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.len(), 2 + 2 * flights.len());
    assert_eq!(lines[0], "Sphere:");
    assert_eq!(lines[1 + flights.len()], "AE Map:");
    assert!(lines[1].starts_with(" - QTR780 (GRU-DOH): "));
    assert!(lines.iter().skip(1).take(flights.len()).all(|l| l.ends_with("% off")));
}
