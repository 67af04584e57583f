use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 0 °C 를 켈빈으로 나타낸 값.
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// 절대영도(°C).
pub const ABSOLUTE_ZERO_C: f64 = -ZERO_CELSIUS_K;

/// 온도 단위를 정의한다. 습공기 계산은 섭씨/켈빈만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

impl TemperatureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

/// 섭씨를 켈빈으로 변환한다.
pub fn celsius_to_kelvin(value_c: f64) -> f64 {
    value_c + ZERO_CELSIUS_K
}

/// 켈빈을 섭씨로 변환한다.
pub fn kelvin_to_celsius(value_k: f64) -> f64 {
    value_k - ZERO_CELSIUS_K
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => celsius_to_kelvin(value),
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => kelvin_to_celsius(value_k),
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let k = to_kelvin(value, from);
    from_kelvin(k, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_kelvin_offsets() {
        assert!((celsius_to_kelvin(0.0) - 273.15).abs() < 1e-12);
        assert!((kelvin_to_celsius(0.0) - ABSOLUTE_ZERO_C).abs() < 1e-12);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        let v = convert_temperature(-12.5, TemperatureUnit::Celsius, TemperatureUnit::Celsius);
        assert_eq!(v, -12.5);
    }

    #[test]
    fn convert_kelvin_to_celsius() {
        let v = convert_temperature(298.15, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
        assert!((v - 25.0).abs() < 1e-9);
    }
}
