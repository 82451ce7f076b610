//! Core types shared across yard-planner crates

use serde::{Deserialize, Serialize};

/// ISO container size/type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerType {
    /// 20ft general purpose
    #[serde(rename = "20GP")]
    Gp20,
    /// 40ft general purpose
    #[serde(rename = "40GP")]
    Gp40,
    /// 40ft high cube
    #[serde(rename = "40HC")]
    Hc40,
}

impl ContainerType {
    pub const ALL: [ContainerType; 3] = [ContainerType::Gp20, ContainerType::Gp40, ContainerType::Hc40];

    /// Type code as printed on the container
    pub fn code(&self) -> &'static str {
        match self {
            ContainerType::Gp20 => "20GP",
            ContainerType::Gp40 => "40GP",
            ContainerType::Hc40 => "40HC",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for ContainerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Occupancy level band used for colour-coded tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    /// 0-60%
    Low,
    /// 61-80%
    Medium,
    /// Over 80%
    High,
}

impl OccupancyLevel {
    pub fn from_rate(rate_percent: u32) -> Self {
        match rate_percent {
            r if r > 80 => OccupancyLevel::High,
            r if r > 60 => OccupancyLevel::Medium,
            _ => OccupancyLevel::Low,
        }
    }

    /// Display label in Chinese
    pub fn label(&self) -> &'static str {
        match self {
            OccupancyLevel::Low => "宽松",
            OccupancyLevel::Medium => "偏紧",
            OccupancyLevel::High => "紧张",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            OccupancyLevel::Low => "low",
            OccupancyLevel::Medium => "medium",
            OccupancyLevel::High => "high",
        }
    }
}
