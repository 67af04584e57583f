/// 다루는 습공기 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 건구 온도
    Temperature,
    /// 상대습도
    RelativeHumidity,
    /// 이슬점 온도
    Dewpoint,
    /// 습구 온도
    WetBulb,
    /// 수증기 분압
    VaporPressure,
    /// 대기압
    Pressure,
}

impl QuantityKind {
    /// 사용자에게 보여줄 이름.
    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "건구 온도",
            QuantityKind::RelativeHumidity => "상대습도",
            QuantityKind::Dewpoint => "이슬점",
            QuantityKind::WetBulb => "습구 온도",
            QuantityKind::VaporPressure => "수증기 분압",
            QuantityKind::Pressure => "기압",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
