use serde::{Deserialize, Serialize};

/// 단위가 속하는 측정 종류를 나타낸다.
///
/// 부피와 무게는 각각 기준 단위(ml, g)로 선형 환산되고, 두 종류 사이는
/// 재료 밀도로 연결된다. 온도와 개수 단위는 선형 계수를 갖지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasurementType {
    Volume,
    Weight,
    Temperature,
    Quantity,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 4] = [
        MeasurementType::Volume,
        MeasurementType::Weight,
        MeasurementType::Temperature,
        MeasurementType::Quantity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MeasurementType::Volume => "volume",
            MeasurementType::Weight => "weight",
            MeasurementType::Temperature => "temperature",
            MeasurementType::Quantity => "quantity",
        }
    }

    /// 선형 계수 테이블로 환산 가능한 종류인지 여부.
    pub fn is_linear(&self) -> bool {
        matches!(self, MeasurementType::Volume | MeasurementType::Weight)
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 단위 체계 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeasurementSystem {
    /// 미터법 (ml, l, g, kg, °C)
    Metric,
    /// 미국식 계량 (tsp, tbsp, cup, oz, lb, °F)
    Imperial,
    /// 체계와 무관한 개수 단위
    Universal,
}

impl MeasurementSystem {
    pub const ALL: [MeasurementSystem; 3] = [
        MeasurementSystem::Metric,
        MeasurementSystem::Imperial,
        MeasurementSystem::Universal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::Universal => "universal",
        }
    }
}

impl std::fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
