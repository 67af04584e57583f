//! 두 값으로 나머지를 구하는 습공기 상태 계산 테스트.
use humid_air_toolbox::air::{
    resolve, HumidAirInput, MagnusConstants, PhysicalConstants, Psychrometer, Silent,
};
use humid_air_toolbox::quantity::QuantityKind;
use humid_air_toolbox::PsychroError;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.4}, tol {tol})"
    );
}

fn quiet() -> Psychrometer<Silent> {
    Psychrometer::with_diagnostics(PhysicalConstants::default(), Silent)
}

#[test]
fn temperature_and_humidity_give_dewpoint() {
    let input = HumidAirInput {
        temperature_c: Some(25.0),
        relative_humidity_pct: Some(50.0),
        dewpoint_c: None,
    };
    let state = resolve(&quiet(), input, true).unwrap();
    assert_eq!(state.derived, QuantityKind::Dewpoint);
    assert_close("Td", state.dewpoint_c, 13.85, 0.2);
    assert_close("e", state.vapor_pressure_hpa, 15.80, 0.01);
    let tw = state.wet_bulb_c.expect("wet bulb requested");
    assert!(tw > state.dewpoint_c && tw < state.temperature_c);
}

#[test]
fn temperature_and_dewpoint_give_humidity() {
    let input = HumidAirInput {
        temperature_c: Some(25.0),
        relative_humidity_pct: None,
        dewpoint_c: Some(-8.77),
    };
    let state = resolve(&quiet(), input, false).unwrap();
    assert_eq!(state.derived, QuantityKind::RelativeHumidity);
    assert_close("RH", state.relative_humidity_pct, 10.0, 0.2);
    assert!(state.wet_bulb_c.is_none());
}

#[test]
fn dewpoint_and_humidity_give_temperature() {
    let input = HumidAirInput {
        temperature_c: None,
        relative_humidity_pct: Some(90.0),
        dewpoint_c: Some(47.90),
    };
    let state = resolve(&quiet(), input, false).unwrap();
    assert_eq!(state.derived, QuantityKind::Temperature);
    assert_close("T", state.temperature_c, 50.0, 0.2);
}

#[test]
fn all_three_prefers_temperature_and_humidity() {
    let input = HumidAirInput {
        temperature_c: Some(25.0),
        relative_humidity_pct: Some(50.0),
        dewpoint_c: Some(0.0),
    };
    let state = resolve(&quiet(), input, false).unwrap();
    assert_close("Td", state.dewpoint_c, 13.85, 0.2);
}

#[test]
fn fewer_than_two_inputs_is_missing_input() {
    let cases = [
        HumidAirInput::default(),
        HumidAirInput {
            temperature_c: Some(20.0),
            ..Default::default()
        },
        HumidAirInput {
            dewpoint_c: Some(5.0),
            ..Default::default()
        },
    ];
    for input in cases {
        let err = resolve(&quiet(), input, false).unwrap_err();
        match err {
            PsychroError::MissingInput { supplied } => {
                assert_eq!(supplied, input.supplied());
                assert!(supplied.len() < 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn alternative_magnus_constants_shift_dewpoint() {
    let constants = PhysicalConstants {
        magnus: MagnusConstants::ALDUCHOV_ESKRIDGE_1996,
        ..PhysicalConstants::default()
    };
    let alt = Psychrometer::with_diagnostics(constants, Silent);
    let td_alt = alt.dewpoint(25.0, 50.0).unwrap();
    let td = quiet().dewpoint(25.0, 50.0).unwrap();
    assert_close("Td", td_alt, td, 0.05);
    assert!((td_alt - td).abs() > 1e-6);
}
