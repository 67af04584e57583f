use crate::air::magnus::DewpointDerivations;
use crate::quantity::QuantityKind;

/// 습공기 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// 계산식이 정의되지 않는 입력 (RH ≤ 0, 절대영도 이하 등)
    InvalidInput {
        quantity: QuantityKind,
        value: f64,
        reason: &'static str,
    },
    /// 세 가지 이슬점 유도식이 허용 오차를 넘어 어긋남
    Consistency {
        derivations: DewpointDerivations,
        tolerance_c: f64,
    },
    /// 온도·상대습도·이슬점 중 두 개 미만이 주어짐
    MissingInput { supplied: Vec<QuantityKind> },
}

impl std::fmt::Display for PsychroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PsychroError::InvalidInput {
                quantity,
                value,
                reason,
            } => write!(f, "입력 오류: {quantity} = {value} ({reason})"),
            PsychroError::Consistency {
                derivations,
                tolerance_c,
            } => write!(
                f,
                "이슬점 교차검증 실패: {:.6} / {:.6} / {:.6} °C (허용 오차 {tolerance_c} °C)",
                derivations.vapor_pressure_inversion_c,
                derivations.log_form_c,
                derivations.base10_approximation_c,
            ),
            PsychroError::MissingInput { supplied } => {
                write!(
                    f,
                    "온도, 상대습도, 이슬점 중 두 값이 필요합니다 (입력된 값 {}개)",
                    supplied.len()
                )
            }
        }
    }
}

impl std::error::Error for PsychroError {}

/// 결과는 계속 계산하되 정확도가 보장되지 않음을 알리는 경고.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainWarning {
    /// Magnus 계수 검증 범위(-45~60 °C) 밖의 온도
    TemperatureOutsideMagnusRange { quantity: QuantityKind, value_c: f64 },
    /// 상대습도 100% 초과(과포화)
    Supersaturated { relative_humidity_pct: f64 },
}

impl std::fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainWarning::TemperatureOutsideMagnusRange { quantity, value_c } => write!(
                f,
                "{quantity} {value_c} °C 는 Magnus 식 검증 범위(-45~60 °C)를 벗어나 정확도가 떨어질 수 있습니다."
            ),
            DomainWarning::Supersaturated {
                relative_humidity_pct,
            } => write!(
                f,
                "상대습도 {relative_humidity_pct}% 는 100%를 넘는 과포화 상태입니다."
            ),
        }
    }
}

/// 온도 입력을 검사한다. 유한하고 절대영도보다 높아야 한다.
pub(crate) fn check_temperature(quantity: QuantityKind, value_c: f64) -> Result<(), PsychroError> {
    if !value_c.is_finite() {
        return Err(PsychroError::InvalidInput {
            quantity,
            value: value_c,
            reason: "유한한 값이어야 합니다",
        });
    }
    if value_c <= crate::units::ABSOLUTE_ZERO_C {
        return Err(PsychroError::InvalidInput {
            quantity,
            value: value_c,
            reason: "절대영도보다 높아야 합니다",
        });
    }
    Ok(())
}

/// 상대습도 입력을 검사한다. 로그가 정의되도록 0보다 커야 한다.
pub(crate) fn check_relative_humidity(relative_humidity_pct: f64) -> Result<(), PsychroError> {
    if !relative_humidity_pct.is_finite() || relative_humidity_pct <= 0.0 {
        return Err(PsychroError::InvalidInput {
            quantity: QuantityKind::RelativeHumidity,
            value: relative_humidity_pct,
            reason: "0보다 큰 유한한 값이어야 합니다",
        });
    }
    Ok(())
}
