//! Technology age (era) enumeration

use serde::{Deserialize, Serialize};

/// Historical age a great person belongs to, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechAge {
    BronzeAge,
    IronAge,
    ClassicalAge,
    MiddleAge,
    RenaissanceAge,
    IndustrialAge,
}

impl TechAge {
    /// All ages, oldest first
    pub const ALL: [TechAge; 6] = [
        TechAge::BronzeAge,
        TechAge::IronAge,
        TechAge::ClassicalAge,
        TechAge::MiddleAge,
        TechAge::RenaissanceAge,
        TechAge::IndustrialAge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechAge::BronzeAge => "BronzeAge",
            TechAge::IronAge => "IronAge",
            TechAge::ClassicalAge => "ClassicalAge",
            TechAge::MiddleAge => "MiddleAge",
            TechAge::RenaissanceAge => "RenaissanceAge",
            TechAge::IndustrialAge => "IndustrialAge",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|age| age.as_str() == s)
    }
}
