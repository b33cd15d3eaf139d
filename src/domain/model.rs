use serde::{Deserialize, Serialize};

/// CCF quality tier. Rows with any other rank text are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    A,
    B,
    C,
}

impl Rank {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "A" => Some(Rank::A),
            "B" => Some(Rank::B),
            "C" => Some(Rank::C),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }
}

/// One venue row kept from the ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub abbr: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub rank: Rank,
    pub category: String,
}

/// The two classified lists produced by the transform phase.
#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub conferences: Vec<RankedEntry>,
    pub journals: Vec<RankedEntry>,
}

/// The complete output document of one run. Fully replaces any prior file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    #[serde(rename = "updateDate")]
    pub update_date: String,
    pub conferences: Vec<RankedEntry>,
    pub journals: Vec<RankedEntry>,
}
