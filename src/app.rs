use log::{debug, error, log_enabled, Level, LevelFilter};

use crate::air::{self, Psychrometer, PsychroError};
use crate::config::{self, Config, ConfigError, HumidityOutput};
use crate::ui_cli::{self, Cli};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 로드 오류
    Config(ConfigError),
    /// 습공기 계산 오류
    Psychro(PsychroError),
    /// 알 수 없는 로그 레벨
    InvalidLogLevel(String),
    /// 로거 초기화 실패
    Logger(log::SetLoggerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Psychro(e) => write!(f, "계산 오류: {e}"),
            AppError::InvalidLogLevel(level) => write!(f, "잘못된 로그 레벨: {level}"),
            AppError::Logger(e) => write!(f, "로거 초기화 실패: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<PsychroError> for AppError {
    fn from(value: PsychroError) -> Self {
        AppError::Psychro(value)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(value: log::SetLoggerError) -> Self {
        AppError::Logger(value)
    }
}

/// 치명적 오류가 어디로 보고되었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReport {
    /// 초기화된 로거의 `error!`
    Logged,
    /// 로거가 없거나 꺼져 있어 표준 오류로 직접 출력
    Stderr,
}

/// 치명적 오류를 한 번만 보고한다. 로거가 error 레벨을 받으면 `error!`, 아니면 `eprintln!`.
pub fn report_failure(err: &AppError) -> FailureReport {
    if log_enabled!(Level::Error) {
        error!("{err}");
        FailureReport::Logged
    } else {
        eprintln!("오류: {err}");
        FailureReport::Stderr
    }
}

/// 로그 레벨 문자열을 해석한다. 대소문자는 구분하지 않는다.
pub fn parse_log_level(level: &str) -> Result<LevelFilter, AppError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| AppError::InvalidLogLevel(level.to_string()))
}

/// env_logger 를 초기화한다. `RUST_LOG` 가 있으면 그 값이 우선한다.
pub fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

/// CLI 인자가 설정 파일 값을 덮어쓴 최종 설정을 만든다.
pub fn effective_config(cli: &Cli, mut cfg: Config) -> Result<Config, ConfigError> {
    if let Some(level) = &cli.loglevel {
        cfg.log_level = level.clone();
    }
    if let Some(unit) = cli.unit {
        cfg.temperature_unit = unit;
    }
    if cli.fraction {
        cfg.humidity_output = HumidityOutput::Fraction;
    }
    if let Some(p) = cli.pressure {
        cfg.surface_pressure_hpa = p;
    }
    cfg.validate()?;
    Ok(cfg)
}

/// 한 번의 계산을 수행하고 출력할 문장을 돌려준다.
pub fn evaluate(cli: &Cli, cfg: &Config) -> Result<Vec<String>, AppError> {
    let psychrometer =
        Psychrometer::new(cfg.constants).with_surface_pressure(cfg.surface_pressure_hpa);
    let input = cli.humid_air_input(cfg.temperature_unit);
    debug!("입력: {input:?}");
    let state = air::resolve(&psychrometer, input, cli.wet_bulb)?;
    Ok(ui_cli::format_report(
        &state,
        cfg.temperature_unit,
        cfg.humidity_output,
    ))
}

/// CLI 애플리케이션을 실행한다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(cli.config.as_deref())?;
    let cfg = effective_config(cli, cfg)?;
    init_logging(parse_log_level(&cfg.log_level)?)?;
    debug!("설정: {cfg:?}");
    for line in evaluate(cli, &cfg)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["humid_air_toolbox"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse_log_level("WARNING").ok(), None);
        assert_eq!(parse_log_level("Warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn cli_overrides_config() {
        let cfg = effective_config(
            &cli(&["--loglevel", "info", "--fraction", "-p", "950"]),
            Config::default(),
        )
        .unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.humidity_output, HumidityOutput::Fraction);
        assert_eq!(cfg.surface_pressure_hpa, 950.0);
    }

    #[test]
    fn cli_pressure_is_validated() {
        let err = effective_config(&cli(&["-p", "0"]), Config::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn failure_goes_to_stderr_without_logger() {
        let err = AppError::InvalidLogLevel("WARNING".to_string());
        assert_eq!(report_failure(&err), FailureReport::Stderr);
    }

    #[test]
    fn single_input_is_missing_input_error() {
        let err = evaluate(&cli(&["-t", "20"]), &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Psychro(PsychroError::MissingInput { .. })
        ));
    }

    #[test]
    fn dewpoint_sentence_for_temperature_and_humidity() {
        let lines = evaluate(&cli(&["-t", "25", "-r", "50", "-w"]), &Config::default()).unwrap();
        assert!(lines[0].contains("이슬점은 13.85°C"), "{}", lines[0]);
        assert_eq!(lines.len(), 3);
    }
}
