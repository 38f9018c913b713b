//! Business stages used to pick which tools the dashboard offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the owner's restaurant business currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStage {
    #[default]
    Ideation,
    Planning,
    Established,
    Social,
}

impl BusinessStage {
    pub const ALL: [BusinessStage; 4] = [
        BusinessStage::Ideation,
        BusinessStage::Planning,
        BusinessStage::Established,
        BusinessStage::Social,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessStage::Ideation => "ideation",
            BusinessStage::Planning => "planning",
            BusinessStage::Established => "established",
            BusinessStage::Social => "social",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BusinessStage::Ideation => "Ideation Stage",
            BusinessStage::Planning => "Planning Stage",
            BusinessStage::Established => "Established Business",
            BusinessStage::Social => "Social Food Business",
        }
    }

    /// Dashboard headline for the stage.
    pub fn description(self) -> &'static str {
        match self {
            BusinessStage::Ideation => "Explore and validate your restaurant concept",
            BusinessStage::Planning => "Transform your idea into a solid business plan",
            BusinessStage::Established => "Optimize and grow your restaurant",
            BusinessStage::Social => "Build your food brand on social media",
        }
    }

    /// Short profile label shown when picking a stage.
    pub fn summary(self) -> &'static str {
        match self {
            BusinessStage::Ideation => "Exploring restaurant business ideas",
            BusinessStage::Planning => "Planning to open a restaurant",
            BusinessStage::Established => "Currently running a restaurant",
            BusinessStage::Social => "Running a food business on social media",
        }
    }

    pub fn milestones(self) -> &'static [&'static str] {
        match self {
            BusinessStage::Ideation => &[
                "Define concept",
                "Market research",
                "Financial planning",
                "Location analysis",
            ],
            BusinessStage::Planning => &[
                "Business plan",
                "Funding secured",
                "Location selected",
                "Permits & licenses",
            ],
            BusinessStage::Established => &[
                "Operations stable",
                "Team trained",
                "Marketing active",
                "Growth planning",
            ],
            BusinessStage::Social => &[
                "Brand identity",
                "Content strategy",
                "Community growth",
                "Monetization",
            ],
        }
    }
}

impl fmt::Display for BusinessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stage label is not one of the four known stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown business stage `{}`", self.0)
    }
}

impl std::error::Error for UnknownStage {}

impl FromStr for BusinessStage {
    type Err = UnknownStage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        BusinessStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| UnknownStage(value.to_string()))
    }
}
