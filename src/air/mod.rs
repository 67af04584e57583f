//! 습공기(건구 온도, 상대습도, 이슬점, 습구 온도) 계산 모듈 모음.
//! Magnus 식 역산과 Davies-Jones 폐형식 습구 온도로 구성한다.

pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod humid_air;
pub mod magnus;
pub mod psychrometer;
pub mod saturation;
pub mod wet_bulb;

pub use constants::{BoltonConstants, MagnusConstants, PhysicalConstants};
pub use diagnostics::{Diagnostics, LogDiagnostics, Silent};
pub use error::{DomainWarning, PsychroError};
pub use humid_air::{resolve, HumidAirInput, HumidAirState};
pub use psychrometer::{
    compute_dewpoint, compute_relative_humidity, compute_temperature, compute_wet_bulb,
    Psychrometer,
};
pub use wet_bulb::{WetBulbRegime, WetBulbSolution};
