//! 중간 계산값과 도메인 경고를 받아보는 관찰자.
//!
//! 계산 결과에는 영향을 주지 않는다. 기본 구현은 `log` 매크로로 내보낸다.

use log::{debug, warn};

use crate::air::error::DomainWarning;

/// 계산 과정을 관찰하는 훅. 모든 메서드는 기본적으로 아무것도 하지 않는다.
pub trait Diagnostics {
    /// 이름 붙은 중간값 (예: `vapor_pressure_hpa`, `lcl_temperature_k`)
    fn intermediate(&self, _name: &'static str, _value: f64) {}

    /// 계산은 계속되지만 정확도가 보장되지 않는 입력
    fn domain_warning(&self, _warning: &DomainWarning) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn intermediate(&self, name: &'static str, value: f64) {
        (**self).intermediate(name, value)
    }

    fn domain_warning(&self, warning: &DomainWarning) {
        (**self).domain_warning(warning)
    }
}

/// 중간값은 debug, 경고는 warn 레벨로 기록한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn intermediate(&self, name: &'static str, value: f64) {
        debug!("{name} = {value:.4}");
    }

    fn domain_warning(&self, warning: &DomainWarning) {
        warn!("{warning}");
    }
}

/// 아무것도 기록하지 않는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {}
