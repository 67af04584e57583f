use log::warn;

use crate::air::diagnostics::Diagnostics;
use crate::air::error::PsychroError;
use crate::air::psychrometer::Psychrometer;
use crate::quantity::QuantityKind;

/// 세 값이 모두 주어졌을 때 입력 이슬점과 계산 이슬점이 허용하는 차이 [°C].
const SUPPLIED_DEWPOINT_TOLERANCE_C: f64 = 0.2;

/// 온도, 상대습도, 이슬점 중 알고 있는 값들. 두 개 이상이어야 한다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HumidAirInput {
    /// 건구 온도(°C)
    pub temperature_c: Option<f64>,
    /// 상대습도(%)
    pub relative_humidity_pct: Option<f64>,
    /// 이슬점(°C)
    pub dewpoint_c: Option<f64>,
}

impl HumidAirInput {
    /// 입력된 물리량 목록.
    pub fn supplied(&self) -> Vec<QuantityKind> {
        [
            (QuantityKind::Temperature, self.temperature_c),
            (QuantityKind::RelativeHumidity, self.relative_humidity_pct),
            (QuantityKind::Dewpoint, self.dewpoint_c),
        ]
        .into_iter()
        .filter_map(|(kind, v)| v.map(|_| kind))
        .collect()
    }
}

/// 세 값이 모두 채워진 습공기 상태.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidAirState {
    /// 건구 온도(°C)
    pub temperature_c: f64,
    /// 상대습도(%)
    pub relative_humidity_pct: f64,
    /// 이슬점(°C)
    pub dewpoint_c: f64,
    /// 수증기 분압(hPa)
    pub vapor_pressure_hpa: f64,
    /// 습구 온도(°C) - 요청 시
    pub wet_bulb_c: Option<f64>,
    /// 입력에 없어 계산으로 구한 물리량
    pub derived: QuantityKind,
}

/// 두 값으로 나머지 하나를 구하고, 필요하면 습구 온도까지 계산한다.
///
/// 세 값이 모두 주어지면 온도와 상대습도를 기준으로 이슬점을 다시 계산한다.
pub fn resolve<D: Diagnostics>(
    psychrometer: &Psychrometer<D>,
    input: HumidAirInput,
    include_wet_bulb: bool,
) -> Result<HumidAirState, PsychroError> {
    let (temperature_c, relative_humidity_pct, dewpoint_c, derived) = match (
        input.temperature_c,
        input.relative_humidity_pct,
        input.dewpoint_c,
    ) {
        (Some(t), Some(rh), supplied_td) => {
            let td = psychrometer.dewpoint(t, rh)?;
            if let Some(given) = supplied_td {
                if (given - td).abs() > SUPPLIED_DEWPOINT_TOLERANCE_C {
                    warn!(
                        "입력 이슬점 {given:.2} °C 가 계산값 {td:.2} °C 와 다릅니다. 계산값을 사용합니다."
                    );
                }
            }
            (t, rh, td, QuantityKind::Dewpoint)
        }
        (Some(t), None, Some(td)) => {
            let rh = psychrometer.relative_humidity_pct(t, td)?;
            (t, rh, td, QuantityKind::RelativeHumidity)
        }
        (None, Some(rh), Some(td)) => {
            let t = psychrometer.temperature(td, rh)?;
            (t, rh, td, QuantityKind::Temperature)
        }
        _ => {
            return Err(PsychroError::MissingInput {
                supplied: input.supplied(),
            })
        }
    };

    let wet_bulb_c = if include_wet_bulb {
        Some(psychrometer.wet_bulb(temperature_c, relative_humidity_pct)?)
    } else {
        None
    };

    Ok(HumidAirState {
        temperature_c,
        relative_humidity_pct,
        dewpoint_c,
        vapor_pressure_hpa: psychrometer.vapor_pressure(temperature_c, relative_humidity_pct),
        wet_bulb_c,
        derived,
    })
}
