//! Magnus 식 기반 이슬점·상대습도·온도 역산.
//!
//! 세 값 중 두 값을 알면 나머지 하나를 구한다. 이슬점은 서로 독립적인 세 가지
//! 유도식으로 계산한 뒤 교차검증한다.

use crate::air::constants::MagnusConstants;
use crate::air::diagnostics::Diagnostics;
use crate::air::error::{check_relative_humidity, check_temperature, DomainWarning, PsychroError};
use crate::air::saturation::{report_magnus_domain, saturation_vapor_pressure_hpa};
use crate::quantity::QuantityKind;

/// 세 이슬점 유도식이 서로 허용하는 최대 차이 [°C].
pub const DEWPOINT_TOLERANCE_C: f64 = 0.001;

/// 1/ln(10) 의 4자리 근사. 상용로그 유도식에서 쓴다.
const LOG10_E_APPROX: f64 = 0.4343;

/// 세 가지 방법으로 구한 이슬점 [°C].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewpointDerivations {
    /// 수증기 분압 역산: `x = e/α`, `Td = λ·ln x / (β − ln x)`
    pub vapor_pressure_inversion_c: f64,
    /// 로그 직접식: `z = ln(RH/100) + βT/(λ+T)`
    pub log_form_c: f64,
    /// 상용로그 근사: `H = (log10 RH − 2)/0.4343 + βT/(λ+T)`
    pub base10_approximation_c: f64,
}

impl DewpointDerivations {
    /// 세 값 사이의 최대 쌍별 차이. 하나라도 NaN 이면 NaN.
    pub fn max_spread(&self) -> f64 {
        let a = self.vapor_pressure_inversion_c;
        let b = self.log_form_c;
        let c = self.base10_approximation_c;
        let spreads = [(a - b).abs(), (a - c).abs(), (b - c).abs()];
        if spreads.iter().any(|s| s.is_nan()) {
            return f64::NAN;
        }
        spreads.iter().fold(0.0, |acc: f64, s| acc.max(*s))
    }

    /// 허용 오차 내에서 일치하는지 확인하고 기준값(수증기 분압 역산)을 돌려준다.
    pub fn verify(self, tolerance_c: f64) -> Result<f64, PsychroError> {
        // NaN 도 여기서 걸러진다
        if self.max_spread() < tolerance_c {
            Ok(self.vapor_pressure_inversion_c)
        } else {
            Err(PsychroError::Consistency {
                derivations: self,
                tolerance_c,
            })
        }
    }
}

/// 수증기 분압(hPa): `e = RH·es(T)/100`.
pub fn vapor_pressure_hpa(
    magnus: &MagnusConstants,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> f64 {
    relative_humidity_pct * saturation_vapor_pressure_hpa(magnus, temperature_c) / 100.0
}

fn invert_magnus(magnus: &MagnusConstants, z: f64) -> f64 {
    magnus.lambda_c * z / (magnus.beta - z)
}

fn dewpoint_by_vapor_pressure(
    magnus: &MagnusConstants,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> f64 {
    let x = vapor_pressure_hpa(magnus, temperature_c, relative_humidity_pct) / magnus.alpha_hpa;
    invert_magnus(magnus, x.ln())
}

fn dewpoint_by_log_form(
    magnus: &MagnusConstants,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> f64 {
    let z = (relative_humidity_pct / 100.0).ln()
        + magnus.beta * temperature_c / (magnus.lambda_c + temperature_c);
    invert_magnus(magnus, z)
}

fn dewpoint_by_base10(
    magnus: &MagnusConstants,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> f64 {
    let h = (relative_humidity_pct.log10() - 2.0) / LOG10_E_APPROX
        + magnus.beta * temperature_c / (magnus.lambda_c + temperature_c);
    invert_magnus(magnus, h)
}

/// 입력을 검사하고 세 가지 이슬점 유도값을 모두 계산한다. 교차검증은 하지 않는다.
pub fn dewpoint_derivations(
    magnus: &MagnusConstants,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> Result<DewpointDerivations, PsychroError> {
    check_temperature(QuantityKind::Temperature, temperature_c)?;
    check_relative_humidity(relative_humidity_pct)?;
    Ok(DewpointDerivations {
        vapor_pressure_inversion_c: dewpoint_by_vapor_pressure(
            magnus,
            temperature_c,
            relative_humidity_pct,
        ),
        log_form_c: dewpoint_by_log_form(magnus, temperature_c, relative_humidity_pct),
        base10_approximation_c: dewpoint_by_base10(magnus, temperature_c, relative_humidity_pct),
    })
}

fn report_supersaturation(diagnostics: &dyn Diagnostics, relative_humidity_pct: f64) {
    if relative_humidity_pct > 100.0 {
        diagnostics.domain_warning(&DomainWarning::Supersaturated {
            relative_humidity_pct,
        });
    }
}

/// 건구 온도와 상대습도로 이슬점(°C)을 구한다.
///
/// 세 유도식이 [`DEWPOINT_TOLERANCE_C`] 안에서 일치하지 않으면
/// [`PsychroError::Consistency`] 를 돌려준다.
pub fn dewpoint_c(
    magnus: &MagnusConstants,
    diagnostics: &dyn Diagnostics,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> Result<f64, PsychroError> {
    let derivations = dewpoint_derivations(magnus, temperature_c, relative_humidity_pct)?;
    report_magnus_domain(diagnostics, QuantityKind::Temperature, temperature_c);
    report_supersaturation(diagnostics, relative_humidity_pct);
    diagnostics.intermediate(
        "vapor_pressure_hpa",
        vapor_pressure_hpa(magnus, temperature_c, relative_humidity_pct),
    );
    diagnostics.intermediate("dewpoint_log_form_c", derivations.log_form_c);
    diagnostics.intermediate("dewpoint_base10_c", derivations.base10_approximation_c);
    let dewpoint = derivations.verify(DEWPOINT_TOLERANCE_C)?;
    diagnostics.intermediate("dewpoint_c", dewpoint);
    Ok(dewpoint)
}

/// 건구 온도와 이슬점으로 상대습도를 비율(0~1)로 구한다: `es(Td)/es(T)`.
pub fn relative_humidity_fraction(
    magnus: &MagnusConstants,
    diagnostics: &dyn Diagnostics,
    temperature_c: f64,
    dewpoint_c: f64,
) -> Result<f64, PsychroError> {
    check_temperature(QuantityKind::Temperature, temperature_c)?;
    check_temperature(QuantityKind::Dewpoint, dewpoint_c)?;
    report_magnus_domain(diagnostics, QuantityKind::Temperature, temperature_c);
    report_magnus_domain(diagnostics, QuantityKind::Dewpoint, dewpoint_c);
    let fraction = saturation_vapor_pressure_hpa(magnus, dewpoint_c)
        / saturation_vapor_pressure_hpa(magnus, temperature_c);
    if !fraction.is_finite() {
        return Err(PsychroError::InvalidInput {
            quantity: QuantityKind::Temperature,
            value: temperature_c,
            reason: "포화수증기압 비가 유한하지 않습니다",
        });
    }
    diagnostics.intermediate("relative_humidity_fraction", fraction);
    report_supersaturation(diagnostics, fraction * 100.0);
    Ok(fraction)
}

/// 이슬점과 상대습도로 건구 온도(°C)를 역산한다.
///
/// `p = es(Td)/(RH/100)`, `T = λ·ln(p/α) / (β − ln(p/α))`.
pub fn temperature_c(
    magnus: &MagnusConstants,
    diagnostics: &dyn Diagnostics,
    dewpoint_c: f64,
    relative_humidity_pct: f64,
) -> Result<f64, PsychroError> {
    check_temperature(QuantityKind::Dewpoint, dewpoint_c)?;
    check_relative_humidity(relative_humidity_pct)?;
    report_magnus_domain(diagnostics, QuantityKind::Dewpoint, dewpoint_c);
    report_supersaturation(diagnostics, relative_humidity_pct);
    let saturation =
        saturation_vapor_pressure_hpa(magnus, dewpoint_c) / (relative_humidity_pct / 100.0);
    diagnostics.intermediate("saturation_vapor_pressure_hpa", saturation);
    let t = invert_magnus(magnus, (saturation / magnus.alpha_hpa).ln());
    if !t.is_finite() {
        return Err(PsychroError::InvalidInput {
            quantity: QuantityKind::Dewpoint,
            value: dewpoint_c,
            reason: "역산한 온도가 유한하지 않습니다",
        });
    }
    report_magnus_domain(diagnostics, QuantityKind::Temperature, t);
    Ok(t)
}
