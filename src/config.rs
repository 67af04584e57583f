use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::air::wet_bulb::DEFAULT_SURFACE_PRESSURE_HPA;
use crate::air::PhysicalConstants;
use crate::units::TemperatureUnit;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "humid_air.toml";

/// 상대습도 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityOutput {
    /// 백분율(%)
    Percent,
    /// 비율(0~1)
    Fraction,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 기본 로그 레벨 (error, warn, info, debug, trace, off)
    pub log_level: String,
    /// 입력/출력 온도 단위
    pub temperature_unit: TemperatureUnit,
    /// 상대습도 출력 형식
    pub humidity_output: HumidityOutput,
    /// 습구 온도 계산 기압 [hPa]
    pub surface_pressure_hpa: f64,
    /// 경험식 상수
    pub constants: PhysicalConstants,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            temperature_unit: TemperatureUnit::Celsius,
            humidity_output: HumidityOutput::Percent,
            surface_pressure_hpa: DEFAULT_SURFACE_PRESSURE_HPA,
            constants: PhysicalConstants::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// 값이 허용 범위를 벗어남
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Invalid(msg) => write!(f, "설정 값 오류: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl Config {
    /// TOML 문자열을 읽어 검증한다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 값의 범위를 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.surface_pressure_hpa.is_finite() || self.surface_pressure_hpa <= 0.0 {
            return Err(ConfigError::Invalid("surface_pressure_hpa 는 0보다 커야 합니다."));
        }
        if !self.constants.is_valid() {
            return Err(ConfigError::Invalid("constants 는 모두 유한한 양수여야 합니다."));
        }
        Ok(())
    }
}

/// 설정 파일을 로드한다.
///
/// 경로를 지정하면 그 파일을 반드시 읽고, 지정하지 않으면 `humid_air.toml` 이
/// 있을 때만 읽는다. 파일이 없으면 기본 설정을 쓴다. 파일을 새로 만들지는 않는다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };
    if !required && !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}
