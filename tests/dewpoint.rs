//! Magnus 이슬점/상대습도/온도 역산 회귀 테스트.
//! 기준값은 DWD 측정값, Sensirion 응용 노트, Bernd Kuemmel 계산표에서 가져왔다.
use std::cell::RefCell;

use humid_air_toolbox::air::{
    magnus::DEWPOINT_TOLERANCE_C, Diagnostics, DomainWarning, PhysicalConstants, Psychrometer,
    Silent,
};
use humid_air_toolbox::quantity::QuantityKind;
use humid_air_toolbox::{
    compute_dewpoint, compute_relative_humidity, compute_temperature, PsychroError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.4}, tol {tol})"
    );
}

/// (T °C, RH %, Td °C)
const KNOWN_GOOD: [(f64, f64, f64); 4] = [
    (25.14, 32.0, 7.335),
    (25.0, 10.0, -8.77),
    (50.0, 90.0, 47.90),
    (25.0, 50.0, 13.85),
];

/// 검증 범위 밖 극단값
const LIMITS: [(f64, f64, f64); 4] = [
    (-260.0, 1.0, -260.3),
    (1.0, 0.1, -68.0),
    (-40.0, 0.101, -90.0),
    (100.0, 99.0, 99.7),
];

#[derive(Default)]
struct Recorder {
    warnings: RefCell<Vec<DomainWarning>>,
    intermediates: RefCell<Vec<&'static str>>,
}

impl Diagnostics for Recorder {
    fn intermediate(&self, name: &'static str, _value: f64) {
        self.intermediates.borrow_mut().push(name);
    }

    fn domain_warning(&self, warning: &DomainWarning) {
        self.warnings.borrow_mut().push(*warning);
    }
}

fn quiet() -> Psychrometer<Silent> {
    Psychrometer::with_diagnostics(PhysicalConstants::default(), Silent)
}

#[test]
fn known_good_dewpoints() {
    for (t, rh, td) in KNOWN_GOOD {
        let actual = compute_dewpoint(t, rh).expect("dewpoint");
        assert_close(&format!("Td({t}, {rh})"), actual, td, 0.2);
    }
}

#[test]
fn known_good_relative_humidity() {
    for (t, rh, td) in KNOWN_GOOD {
        let actual = compute_relative_humidity(t, td).expect("rh") * 100.0;
        assert_close(&format!("RH({t}, {td})"), actual, rh, 0.2);
    }
}

#[test]
fn known_good_temperature() {
    for (t, rh, td) in KNOWN_GOOD {
        let actual = compute_temperature(td, rh).expect("temperature");
        assert_close(&format!("T({td}, {rh})"), actual, t, 0.2);
    }
}

#[test]
fn limit_values_still_compute() {
    let p = quiet();
    for (t, rh, td) in LIMITS {
        assert_close("Td", p.dewpoint(t, rh).expect("dewpoint"), td, 0.2);
        assert_close(
            "RH",
            p.relative_humidity_pct(t, td).expect("rh"),
            rh,
            0.2,
        );
        assert_close("T", p.temperature(td, rh).expect("temperature"), t, 0.2);
    }
}

#[test]
fn round_trip_inside_magnus_range() {
    let p = quiet();
    for t in (-45..=60).step_by(15).map(f64::from) {
        for rh in [1.0, 5.0, 20.0, 50.0, 80.0, 100.0] {
            let td = p.dewpoint(t, rh).expect("dewpoint");
            assert!(td <= t + 1e-9, "Td {td} > T {t} at RH {rh}");
            assert_close("RH", p.relative_humidity_pct(t, td).unwrap(), rh, 0.2);
            assert_close("T", p.temperature(td, rh).unwrap(), t, 0.2);
        }
    }
}

#[test]
fn dewpoint_approaches_temperature_at_saturation() {
    let p = quiet();
    let mut previous = f64::NEG_INFINITY;
    for rh in [10.0, 40.0, 70.0, 95.0, 99.9, 100.0] {
        let td = p.dewpoint(21.0, rh).unwrap();
        assert!(td > previous);
        previous = td;
    }
    assert_close("Td(21, 100)", previous, 21.0, 1e-9);
}

#[test]
fn derivations_agree_within_tolerance() {
    let p = quiet();
    for t in [-45.0, -20.0, 0.0, 15.0, 35.0, 60.0] {
        for rh in [1.0, 10.0, 33.0, 66.0, 100.0] {
            let d = p.dewpoint_derivations(t, rh).unwrap();
            assert!(
                d.max_spread() < DEWPOINT_TOLERANCE_C,
                "spread {} at T={t} RH={rh}",
                d.max_spread()
            );
        }
    }
}

#[test]
fn non_positive_humidity_is_invalid_input() {
    for rh in [0.0, -10.0, f64::NAN] {
        let err = compute_dewpoint(20.0, rh).unwrap_err();
        assert!(
            matches!(
                err,
                PsychroError::InvalidInput {
                    quantity: QuantityKind::RelativeHumidity,
                    ..
                }
            ),
            "{err:?}"
        );
        assert!(compute_temperature(5.0, rh).is_err());
    }
}

#[test]
fn below_absolute_zero_is_invalid_input() {
    assert!(compute_dewpoint(-300.0, 50.0).is_err());
    assert!(compute_relative_humidity(20.0, -280.0).is_err());
}

#[test]
fn out_of_range_temperature_warns_but_computes() {
    let p = Psychrometer::with_diagnostics(PhysicalConstants::default(), Recorder::default());
    let td = p.dewpoint(100.0, 99.0).expect("dewpoint");
    assert_close("Td", td, 99.7, 0.2);
    let warnings = p.diagnostics().warnings.borrow();
    assert_eq!(
        *warnings,
        vec![DomainWarning::TemperatureOutsideMagnusRange {
            quantity: QuantityKind::Temperature,
            value_c: 100.0
        }]
    );
}

#[test]
fn in_range_temperature_does_not_warn() {
    let p = Psychrometer::with_diagnostics(PhysicalConstants::default(), Recorder::default());
    p.dewpoint(25.0, 50.0).unwrap();
    assert!(p.diagnostics().warnings.borrow().is_empty());
    assert!(p
        .diagnostics()
        .intermediates
        .borrow()
        .contains(&"vapor_pressure_hpa"));
}

#[test]
fn supersaturation_warns() {
    let p = Psychrometer::with_diagnostics(PhysicalConstants::default(), Recorder::default());
    let td = p.dewpoint(10.0, 105.0).unwrap();
    assert!(td > 10.0);
    assert!(p
        .diagnostics()
        .warnings
        .borrow()
        .iter()
        .any(|w| matches!(w, DomainWarning::Supersaturated { .. })));
}

#[test]
fn hot_extremely_dry_air_fails_cross_check() {
    // 상용로그 근사(0.4343)의 오차가 T=100 °C, RH=0.01% 에서 허용치를 넘는다.
    match compute_dewpoint(100.0, 0.01) {
        Err(PsychroError::Consistency {
            derivations,
            tolerance_c,
        }) => {
            assert_eq!(tolerance_c, DEWPOINT_TOLERANCE_C);
            let spread = derivations.max_spread();
            assert!(spread > DEWPOINT_TOLERANCE_C && spread < 2e-3, "{spread}");
            assert_close(
                "Td by vapor pressure",
                derivations.vapor_pressure_inversion_c,
                -45.667,
                0.01,
            );
        }
        other => panic!("expected Consistency, got {other:?}"),
    }
}
