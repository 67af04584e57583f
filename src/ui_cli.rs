use std::path::PathBuf;

use clap::Parser;

use crate::air::{HumidAirInput, HumidAirState};
use crate::config::HumidityOutput;
use crate::quantity::QuantityKind;
use crate::units::{convert_temperature, TemperatureUnit};

/// 온도, 상대습도, 이슬점 중 두 값으로 나머지를 계산한다.
#[derive(Debug, Clone, Parser)]
#[command(name = "humid_air_toolbox", version, about)]
pub struct Cli {
    /// 건구 온도
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// 상대습도 [%]
    #[arg(short, long)]
    pub relative_humidity: Option<f64>,

    /// 이슬점 온도
    #[arg(short, long, allow_negative_numbers = true)]
    pub dewpoint: Option<f64>,

    /// 습구 온도도 계산한다
    #[arg(short, long)]
    pub wet_bulb: bool,

    /// 습구 온도 계산 기압 [hPa]
    #[arg(short, long)]
    pub pressure: Option<f64>,

    /// 입력/출력 온도 단위
    #[arg(short, long, value_enum)]
    pub unit: Option<TemperatureUnit>,

    /// 상대습도를 0~1 비율로 출력한다
    #[arg(long)]
    pub fraction: bool,

    /// 로그 레벨 (error, warn, info, debug, trace, off)
    #[arg(long)]
    pub loglevel: Option<String>,

    /// 설정 파일 경로 (기본: humid_air.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// 입력 온도를 섭씨로 바꿔 계산 입력을 만든다.
    pub fn humid_air_input(&self, unit: TemperatureUnit) -> HumidAirInput {
        let to_c = |v: f64| convert_temperature(v, unit, TemperatureUnit::Celsius);
        HumidAirInput {
            temperature_c: self.temperature.map(to_c),
            relative_humidity_pct: self.relative_humidity,
            dewpoint_c: self.dewpoint.map(to_c),
        }
    }
}

fn format_temperature(value_c: f64, unit: TemperatureUnit) -> String {
    let v = convert_temperature(value_c, TemperatureUnit::Celsius, unit);
    format!("{v:.2}{}", unit.symbol())
}

fn format_humidity(value_pct: f64, output: HumidityOutput) -> String {
    match output {
        HumidityOutput::Percent => format!("{value_pct:.2}%"),
        HumidityOutput::Fraction => format!("{:.4}", value_pct / 100.0),
    }
}

/// 계산 결과를 출력용 문장으로 만든다.
pub fn format_report(
    state: &HumidAirState,
    unit: TemperatureUnit,
    output: HumidityOutput,
) -> Vec<String> {
    let t = format_temperature(state.temperature_c, unit);
    let rh = format_humidity(state.relative_humidity_pct, output);
    let td = format_temperature(state.dewpoint_c, unit);
    let mut lines = vec![match state.derived {
        QuantityKind::RelativeHumidity => {
            format!("온도 {t}, 이슬점 {td} 에서 상대습도는 {rh} 입니다.")
        }
        QuantityKind::Temperature => {
            format!("이슬점 {td}, 상대습도 {rh} 에서 온도는 {t} 입니다.")
        }
        _ => format!("온도 {t}, 상대습도 {rh} 에서 이슬점은 {td} 입니다."),
    }];
    lines.push(format!("수증기 분압: {:.2} hPa", state.vapor_pressure_hpa));
    if let Some(tw) = state.wet_bulb_c {
        lines.push(format!("습구 온도: {}", format_temperature(tw, unit)));
    }
    lines
}
