//! 습공기 계산에 쓰이는 경험식 상수 표.
//!
//! 프로세스 전체에서 읽기 전용으로 사용하며, 기본값 또는 설정 파일에서 한 번 만들어
//! [`crate::air::Psychrometer`]에 넘긴다.

use serde::{Deserialize, Serialize};

/// Magnus 식 `es = α·exp(β·T/(λ+T))` 의 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnusConstants {
    /// α [hPa]
    pub alpha_hpa: f64,
    /// β [-]
    pub beta: f64,
    /// λ [°C]
    pub lambda_c: f64,
}

impl MagnusConstants {
    /// Sonntag(1990) 계수. -45~60 °C 수면 기준.
    pub const SONNTAG_1990: Self = Self {
        alpha_hpa: 6.112,
        beta: 17.62,
        lambda_c: 243.12,
    };

    /// Alduchov & Eskridge(1996) 계수.
    pub const ALDUCHOV_ESKRIDGE_1996: Self = Self {
        alpha_hpa: 6.1094,
        beta: 17.625,
        lambda_c: 243.04,
    };

    fn is_valid(&self) -> bool {
        self.alpha_hpa.is_finite()
            && self.alpha_hpa > 0.0
            && self.beta.is_finite()
            && self.beta > 0.0
            && self.lambda_c.is_finite()
            && self.lambda_c > 0.0
    }
}

impl Default for MagnusConstants {
    fn default() -> Self {
        Self::SONNTAG_1990
    }
}

/// Bolton(1980) 포화수증기압 계수.
///
/// 물 위: `es = es0·exp(a·Tc/(Tc+b))`, 켈빈 표기로는 `es0·exp(a·(T−273.15)/(T−kelvin_offset))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoltonConstants {
    /// es(0 °C) [hPa]
    pub es0_hpa: f64,
    /// a [-]
    pub a: f64,
    /// 켈빈 표기 분모 오프셋 [K] (= 273.15 − b)
    pub kelvin_offset: f64,
    /// b [°C]
    pub b_c: f64,
}

impl Default for BoltonConstants {
    fn default() -> Self {
        Self {
            es0_hpa: 6.112,
            a: 17.67,
            kelvin_offset: 29.65,
            b_c: 243.5,
        }
    }
}

impl BoltonConstants {
    fn is_valid(&self) -> bool {
        [self.es0_hpa, self.a, self.kelvin_offset, self.b_c]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// 건조공기 Poisson 상수 κ = R_d / c_pd.
pub const POISSON_DRY_AIR: f64 = 0.2854;

/// 계산 전체에서 공유하는 상수 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub magnus: MagnusConstants,
    pub bolton: BoltonConstants,
    /// κ [-]
    pub poisson_dry_air: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            magnus: MagnusConstants::default(),
            bolton: BoltonConstants::default(),
            poisson_dry_air: POISSON_DRY_AIR,
        }
    }
}

impl PhysicalConstants {
    /// 모든 계수가 유한한 양수인지 확인한다.
    pub fn is_valid(&self) -> bool {
        self.magnus.is_valid()
            && self.bolton.is_valid()
            && self.poisson_dry_air.is_finite()
            && self.poisson_dry_air > 0.0
    }
}
