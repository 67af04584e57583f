//! Davies-Jones(2008) 폐형식 습구 온도 계산.
//!
//! Davies-Jones, R. (2008). "An Efficient and Accurate Method for Computing the
//! Wet-Bulb Temperature along Pseudoadiabats." Monthly Weather Review, 136(7), 2764-2785.
//!
//! 내부 계산은 켈빈, 입출력은 섭씨. 반복 수렴 없이 상당온위에서 바로 습구 온도를 구한다.

use crate::air::constants::PhysicalConstants;
use crate::air::diagnostics::Diagnostics;
use crate::air::error::{check_relative_humidity, check_temperature, PsychroError};
use crate::air::saturation::{
    bolton_log_slope, bolton_saturation_vapor_pressure_hpa, bolton_vapor_pressure_ratio,
};
use crate::quantity::QuantityKind;
use crate::units::{celsius_to_kelvin, kelvin_to_celsius, ZERO_CELSIUS_K};

/// 기본 지표 기압 [hPa]
pub const DEFAULT_SURFACE_PRESSURE_HPA: f64 = 1013.0;

/// 기준 기압 p0 [hPa]
const REFERENCE_PRESSURE_HPA: f64 = 1000.0;
/// 수증기/건조공기 분자량 비 ε
const EPSILON: f64 = 0.622;
/// 식 4.8 의 A [K]
const BIG_A_K: f64 = 2675.0;
/// 수증기 기체상수 [J/(kg·K)]
const GAS_CONSTANT_VAPOR: f64 = 461.5;
/// cal → J 환산을 포함한 비열 기준 [J/(kg·K)]
const CAL_TO_J_PER_KG: f64 = 4186.0;

/// 습구 온도 폐형식이 선택한 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WetBulbRegime {
    /// `cote > D(π)`: 포화혼합비 기울기를 쓰는 식 4.8
    SaturationSlope,
    /// `1 ≤ cote ≤ D(π)`: 식 4.9
    Linear,
    /// `0.4 ≤ cote < 1`: 식 4.10
    ShiftedLinear,
    /// `cote < 0.4`: 식 4.11
    Reciprocal,
}

/// 습구 온도와 중간 계산값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbSolution {
    /// 습구 온도 [°C]
    pub wet_bulb_c: f64,
    pub regime: WetBulbRegime,
    /// 잠열 기반 이슬점 [K]
    pub dewpoint_k: f64,
    /// 수증기 분압 [hPa]
    pub vapor_pressure_hpa: f64,
    /// 상승응결고도 온도 [K]
    pub lcl_temperature_k: f64,
    /// 혼합비 [kg/kg]
    pub mixing_ratio: f64,
    /// 상승응결고도 온위 [K]
    pub lcl_potential_temperature_k: f64,
    /// 상당온위 θE [K]
    pub equivalent_potential_temperature_k: f64,
    /// 무차원 기압 π
    pub nondimensional_pressure: f64,
    /// 상당온도 T_E = θE·π [K]
    pub equivalent_temperature_k: f64,
    /// T_E 에서의 포화혼합비 [kg/kg]. `SaturationSlope` 구간에서만 계산한다.
    pub saturation_mixing_ratio: Option<f64>,
    /// 구간 판정값 `(273.15/T_E)^(1/κ)`
    pub cote: f64,
    /// 구간 경계 D(π)
    pub regime_threshold: f64,
}

/// 선형화한 증발잠열로 이슬점(K)을 구한다.
///
/// `LHV = (597.3 − 0.57·(T−273)) / (461.5/4186)`, `Td = T·LHV / (LHV − T·ln(RH/100))`.
/// Magnus 이슬점과 정확히 일치하지 않는다.
pub fn latent_heat_dewpoint_k(temperature_k: f64, relative_humidity_pct: f64) -> f64 {
    let gcx = GAS_CONSTANT_VAPOR / CAL_TO_J_PER_KG;
    let lhv = (597.3 - 0.57 * (temperature_k - 273.0)) / gcx;
    temperature_k * lhv / (lhv - temperature_k * (relative_humidity_pct * 0.01).ln())
}

/// Bolton(1980) 식 15 의 상승응결고도 온도(K).
pub fn lcl_temperature_k(temperature_k: f64, dewpoint_k: f64) -> f64 {
    1.0 / (1.0 / (dewpoint_k - 56.0) + (temperature_k / dewpoint_k).ln() / 800.0) + 56.0
}

/// 식 4.3
fn k1(pi: f64) -> f64 {
    -38.5 * pi.powi(2) + 137.81 * pi - 53.737
}

/// 식 4.4
fn k2(pi: f64) -> f64 {
    -4.392 * pi.powi(2) + 56.831 * pi - 0.384
}

/// 식 4.7
fn regime_threshold(pi: f64) -> f64 {
    1.0 / (0.1859 * pi / REFERENCE_PRESSURE_HPA + 0.6512)
}

/// `cote` 와 `D(π)` 로 구간을 고른다. 위에서부터 처음 맞는 구간이 선택된다.
pub fn select_regime(cote: f64, threshold: f64) -> WetBulbRegime {
    if cote > threshold {
        WetBulbRegime::SaturationSlope
    } else if cote >= 1.0 {
        WetBulbRegime::Linear
    } else if cote >= 0.4 {
        WetBulbRegime::ShiftedLinear
    } else {
        WetBulbRegime::Reciprocal
    }
}

fn mixing_ratio(vapor_pressure_hpa: f64, pressure_hpa: f64) -> f64 {
    EPSILON * vapor_pressure_hpa / (pressure_hpa - vapor_pressure_hpa)
}

fn check_below_ambient(
    vapor_pressure_hpa: f64,
    pressure_hpa: f64,
    reason: &'static str,
) -> Result<(), PsychroError> {
    if vapor_pressure_hpa.is_finite() && vapor_pressure_hpa < pressure_hpa {
        Ok(())
    } else {
        Err(PsychroError::InvalidInput {
            quantity: QuantityKind::VaporPressure,
            value: vapor_pressure_hpa,
            reason,
        })
    }
}

/// 건구 온도(°C), 상대습도(%), 기압(hPa)으로 습구 온도를 계산한다.
pub fn solve(
    constants: &PhysicalConstants,
    diagnostics: &dyn Diagnostics,
    temperature_c: f64,
    relative_humidity_pct: f64,
    pressure_hpa: f64,
) -> Result<WetBulbSolution, PsychroError> {
    check_temperature(QuantityKind::Temperature, temperature_c)?;
    check_relative_humidity(relative_humidity_pct)?;
    if !pressure_hpa.is_finite() || pressure_hpa <= 0.0 {
        return Err(PsychroError::InvalidInput {
            quantity: QuantityKind::Pressure,
            value: pressure_hpa,
            reason: "기압은 0보다 커야 합니다",
        });
    }

    let bolton = &constants.bolton;
    let kappa = constants.poisson_dry_air;
    let temperature_k = celsius_to_kelvin(temperature_c);

    let dewpoint_k = latent_heat_dewpoint_k(temperature_k, relative_humidity_pct);
    diagnostics.intermediate("latent_heat_dewpoint_k", dewpoint_k);

    let ratio = bolton_vapor_pressure_ratio(bolton, kelvin_to_celsius(dewpoint_k), temperature_c);
    let es = bolton_saturation_vapor_pressure_hpa(bolton, temperature_k);
    let e = ratio * es;
    diagnostics.intermediate("vapor_pressure_hpa", e);
    check_below_ambient(
        e,
        pressure_hpa,
        "수증기압이 대기압 이상이라 혼합비를 정의할 수 없습니다",
    )?;

    let t_lcl = lcl_temperature_k(temperature_k, dewpoint_k);
    diagnostics.intermediate("lcl_temperature_k", t_lcl);

    let r = mixing_ratio(e, pressure_hpa);
    let theta_lcl = temperature_k
        * (REFERENCE_PRESSURE_HPA / (pressure_hpa - e)).powf(kappa)
        * (temperature_k / t_lcl).powf(0.28 * r);
    let theta_e = theta_lcl * ((3036.0 / t_lcl - 1.78) * r * (1.0 + 0.448 * r)).exp();
    diagnostics.intermediate("equivalent_potential_temperature_k", theta_e);

    // π = (p/p0)^(1/λ), λ = 1/κ
    let pi = (pressure_hpa / REFERENCE_PRESSURE_HPA).powf(kappa);
    let t_e = theta_e * pi;
    diagnostics.intermediate("equivalent_temperature_k", t_e);

    let cote = (ZERO_CELSIUS_K / t_e).powf(1.0 / kappa);
    let threshold = regime_threshold(pi);
    let regime = select_regime(cote, threshold);
    diagnostics.intermediate("cote", cote);

    let (k1_pi, k2_pi) = (k1(pi), k2(pi));
    let (wet_bulb_c, saturation_mixing_ratio) = match regime {
        WetBulbRegime::SaturationSlope => {
            let es_te = bolton_saturation_vapor_pressure_hpa(bolton, t_e);
            check_below_ambient(
                es_te,
                pressure_hpa,
                "상당온도의 포화수증기압이 대기압 이상이라 포화혼합비를 정의할 수 없습니다",
            )?;
            let rs_te = mixing_ratio(es_te, pressure_hpa);
            diagnostics.intermediate("saturation_mixing_ratio", rs_te);
            let slope = bolton_log_slope(bolton, t_e);
            let tw = t_e - ZERO_CELSIUS_K - BIG_A_K * rs_te / (1.0 + BIG_A_K * rs_te * slope);
            (tw, Some(rs_te))
        }
        WetBulbRegime::Linear => (k1_pi - k2_pi * cote, None),
        WetBulbRegime::ShiftedLinear => ((k1_pi - 1.21) - (k2_pi - 1.21) * cote, None),
        WetBulbRegime::Reciprocal => {
            ((k1_pi - 2.66) - (k2_pi - 1.21) * cote + 0.58 / cote, None)
        }
    };
    diagnostics.intermediate("wet_bulb_c", wet_bulb_c);

    Ok(WetBulbSolution {
        wet_bulb_c,
        regime,
        dewpoint_k,
        vapor_pressure_hpa: e,
        lcl_temperature_k: t_lcl,
        mixing_ratio: r,
        lcl_potential_temperature_k: theta_lcl,
        equivalent_potential_temperature_k: theta_e,
        nondimensional_pressure: pi,
        equivalent_temperature_k: t_e,
        saturation_mixing_ratio,
        cote,
        regime_threshold: threshold,
    })
}
