use crate::air::constants::{BoltonConstants, MagnusConstants};
use crate::air::diagnostics::Diagnostics;
use crate::air::error::DomainWarning;
use crate::quantity::QuantityKind;
use crate::units::{kelvin_to_celsius, ZERO_CELSIUS_K};

/// Magnus 계수가 검증된 온도 범위 [°C].
pub const MAGNUS_VALID_RANGE_C: (f64, f64) = (-45.0, 60.0);

/// Magnus 식으로 포화수증기압(hPa)을 구한다: `es = α·exp(β·T/(λ+T))`.
///
/// 범위 검사는 하지 않는다. 범위 밖이면 호출 측에서 [`check_magnus_domain`]으로 경고한다.
pub fn saturation_vapor_pressure_hpa(magnus: &MagnusConstants, temperature_c: f64) -> f64 {
    magnus.alpha_hpa * (magnus.beta * temperature_c / (magnus.lambda_c + temperature_c)).exp()
}

/// Magnus 식 검증 범위를 벗어나면 경고를 돌려준다.
pub fn check_magnus_domain(quantity: QuantityKind, temperature_c: f64) -> Option<DomainWarning> {
    let (lo, hi) = MAGNUS_VALID_RANGE_C;
    if temperature_c < lo || temperature_c > hi {
        Some(DomainWarning::TemperatureOutsideMagnusRange {
            quantity,
            value_c: temperature_c,
        })
    } else {
        None
    }
}

/// 범위 검사 후 경고가 있으면 관찰자에게 전달한다.
pub(crate) fn report_magnus_domain(
    diagnostics: &dyn Diagnostics,
    quantity: QuantityKind,
    temperature_c: f64,
) {
    if let Some(w) = check_magnus_domain(quantity, temperature_c) {
        diagnostics.domain_warning(&w);
    }
}

/// Bolton 포화수증기압(hPa). 0 °C 초과는 수면, 이하는 빙면 근사를 쓴다.
///
/// - `T > 273.15 K`: Bolton(1980) 식 10, `es0·exp(a·(T−273.15)/(T−29.65))`
/// - `T ≤ 273.15 K`: 빙면 근사, `es0·exp(22.514 − 6150/T)`
pub fn bolton_saturation_vapor_pressure_hpa(bolton: &BoltonConstants, temperature_k: f64) -> f64 {
    if temperature_k > ZERO_CELSIUS_K {
        bolton.es0_hpa
            * (bolton.a * (temperature_k - ZERO_CELSIUS_K) / (temperature_k - bolton.kelvin_offset))
                .exp()
    } else {
        bolton.es0_hpa * (22.514 - 6.15e3 / temperature_k).exp()
    }
}

/// 이슬점과 건구 온도의 Bolton 포화수증기압 비 `U = es(Td)/es(T)` (수면 식).
pub fn bolton_vapor_pressure_ratio(
    bolton: &BoltonConstants,
    dewpoint_c: f64,
    temperature_c: f64,
) -> f64 {
    (bolton.a * dewpoint_c / (bolton.b_c + dewpoint_c)).exp()
        / (bolton.a * temperature_c / (temperature_c + bolton.b_c)).exp()
}

/// `d ln es / dT = a·b / (T − 273.15 + b)²` [1/K]. Davies-Jones(2008) 식 3.7 아래.
pub fn bolton_log_slope(bolton: &BoltonConstants, temperature_k: f64) -> f64 {
    let denom = kelvin_to_celsius(temperature_k) + bolton.b_c;
    bolton.a * bolton.b_c / denom.powi(2)
}
