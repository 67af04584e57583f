//! 단위 정의 및 변환 모듈 모음.

pub mod temperature;

pub use temperature::{
    celsius_to_kelvin, convert_temperature, kelvin_to_celsius, TemperatureUnit, ABSOLUTE_ZERO_C,
    ZERO_CELSIUS_K,
};
