use crate::air::constants::PhysicalConstants;
use crate::air::diagnostics::{Diagnostics, LogDiagnostics};
use crate::air::error::PsychroError;
use crate::air::magnus::{self, DewpointDerivations};
use crate::air::saturation;
use crate::air::wet_bulb::{self, WetBulbSolution, DEFAULT_SURFACE_PRESSURE_HPA};

/// 상수 표, 지표 기압, 관찰자를 묶은 습공기 계산기.
///
/// 내부 상태는 생성 후 바뀌지 않으므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct Psychrometer<D = LogDiagnostics> {
    constants: PhysicalConstants,
    surface_pressure_hpa: f64,
    diagnostics: D,
}

impl Default for Psychrometer<LogDiagnostics> {
    fn default() -> Self {
        Self::new(PhysicalConstants::default())
    }
}

impl Psychrometer<LogDiagnostics> {
    /// 로그 관찰자를 쓰는 계산기를 만든다.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self::with_diagnostics(constants, LogDiagnostics)
    }
}

impl<D: Diagnostics> Psychrometer<D> {
    pub fn with_diagnostics(constants: PhysicalConstants, diagnostics: D) -> Self {
        Self {
            constants,
            surface_pressure_hpa: DEFAULT_SURFACE_PRESSURE_HPA,
            diagnostics,
        }
    }

    /// 습구 온도 계산에 쓸 기압(hPa)을 지정한다.
    pub fn with_surface_pressure(mut self, pressure_hpa: f64) -> Self {
        self.surface_pressure_hpa = pressure_hpa;
        self
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn surface_pressure_hpa(&self) -> f64 {
        self.surface_pressure_hpa
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Magnus 포화수증기압 [hPa]
    pub fn saturation_vapor_pressure(&self, temperature_c: f64) -> f64 {
        saturation::saturation_vapor_pressure_hpa(&self.constants.magnus, temperature_c)
    }

    /// 수증기 분압 [hPa]
    pub fn vapor_pressure(&self, temperature_c: f64, relative_humidity_pct: f64) -> f64 {
        magnus::vapor_pressure_hpa(&self.constants.magnus, temperature_c, relative_humidity_pct)
    }

    /// 이슬점 [°C]. 교차검증 실패 시 오류.
    pub fn dewpoint(
        &self,
        temperature_c: f64,
        relative_humidity_pct: f64,
    ) -> Result<f64, PsychroError> {
        magnus::dewpoint_c(
            &self.constants.magnus,
            &self.diagnostics,
            temperature_c,
            relative_humidity_pct,
        )
    }

    /// 세 이슬점 유도값 (교차검증 전)
    pub fn dewpoint_derivations(
        &self,
        temperature_c: f64,
        relative_humidity_pct: f64,
    ) -> Result<DewpointDerivations, PsychroError> {
        magnus::dewpoint_derivations(&self.constants.magnus, temperature_c, relative_humidity_pct)
    }

    /// 상대습도 비율(0~1)
    pub fn relative_humidity(&self, temperature_c: f64, dewpoint_c: f64) -> Result<f64, PsychroError> {
        magnus::relative_humidity_fraction(
            &self.constants.magnus,
            &self.diagnostics,
            temperature_c,
            dewpoint_c,
        )
    }

    /// 상대습도 [%]
    pub fn relative_humidity_pct(
        &self,
        temperature_c: f64,
        dewpoint_c: f64,
    ) -> Result<f64, PsychroError> {
        Ok(self.relative_humidity(temperature_c, dewpoint_c)? * 100.0)
    }

    /// 이슬점과 상대습도로 구한 건구 온도 [°C]
    pub fn temperature(&self, dewpoint_c: f64, relative_humidity_pct: f64) -> Result<f64, PsychroError> {
        magnus::temperature_c(
            &self.constants.magnus,
            &self.diagnostics,
            dewpoint_c,
            relative_humidity_pct,
        )
    }

    /// 지정한 기압에서의 습구 온도 풀이 전체
    pub fn wet_bulb_solution_at_pressure(
        &self,
        temperature_c: f64,
        relative_humidity_pct: f64,
        pressure_hpa: f64,
    ) -> Result<WetBulbSolution, PsychroError> {
        wet_bulb::solve(
            &self.constants,
            &self.diagnostics,
            temperature_c,
            relative_humidity_pct,
            pressure_hpa,
        )
    }

    /// 지표 기압에서의 습구 온도 풀이 전체
    pub fn wet_bulb_solution(
        &self,
        temperature_c: f64,
        relative_humidity_pct: f64,
    ) -> Result<WetBulbSolution, PsychroError> {
        self.wet_bulb_solution_at_pressure(
            temperature_c,
            relative_humidity_pct,
            self.surface_pressure_hpa,
        )
    }

    /// 지정한 기압에서의 습구 온도 [°C]
    pub fn wet_bulb_at_pressure(
        &self,
        temperature_c: f64,
        relative_humidity_pct: f64,
        pressure_hpa: f64,
    ) -> Result<f64, PsychroError> {
        self.wet_bulb_solution_at_pressure(temperature_c, relative_humidity_pct, pressure_hpa)
            .map(|s| s.wet_bulb_c)
    }

    /// 지표 기압에서의 습구 온도 [°C]
    pub fn wet_bulb(&self, temperature_c: f64, relative_humidity_pct: f64) -> Result<f64, PsychroError> {
        self.wet_bulb_at_pressure(temperature_c, relative_humidity_pct, self.surface_pressure_hpa)
    }
}

/// 기본 상수로 이슬점(°C)을 구한다.
pub fn compute_dewpoint(temperature_c: f64, relative_humidity_pct: f64) -> Result<f64, PsychroError> {
    Psychrometer::default().dewpoint(temperature_c, relative_humidity_pct)
}

/// 기본 상수로 상대습도를 비율(0~1)로 구한다.
pub fn compute_relative_humidity(temperature_c: f64, dewpoint_c: f64) -> Result<f64, PsychroError> {
    Psychrometer::default().relative_humidity(temperature_c, dewpoint_c)
}

/// 기본 상수로 건구 온도(°C)를 구한다.
pub fn compute_temperature(dewpoint_c: f64, relative_humidity_pct: f64) -> Result<f64, PsychroError> {
    Psychrometer::default().temperature(dewpoint_c, relative_humidity_pct)
}

/// 기본 상수와 1013 hPa 로 습구 온도(°C)를 구한다.
pub fn compute_wet_bulb(temperature_c: f64, relative_humidity_pct: f64) -> Result<f64, PsychroError> {
    Psychrometer::default().wet_bulb(temperature_c, relative_humidity_pct)
}
