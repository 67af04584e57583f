//! 습공기 계산 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 재사용할 수 있게 한다.

pub mod air;
pub mod app;
pub mod config;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use air::{
    compute_dewpoint, compute_relative_humidity, compute_temperature, compute_wet_bulb,
    PsychroError, Psychrometer,
};
