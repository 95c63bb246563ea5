use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of law a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawCategory {
    TenantRights,
    Traffic,
    Employment,
    Taxes,
    Consumer,
}

impl LawCategory {
    /// All categories in canonical comparison order
    pub const ALL: [LawCategory; 5] = [
        LawCategory::TenantRights,
        LawCategory::Traffic,
        LawCategory::Employment,
        LawCategory::Taxes,
        LawCategory::Consumer,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LawCategory::TenantRights => "Tenant Rights",
            LawCategory::Traffic => "Traffic Laws",
            LawCategory::Employment => "Employment",
            LawCategory::Taxes => "Taxes",
            LawCategory::Consumer => "Consumer Protection",
        }
    }
}

impl fmt::Display for LawCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordinal severity used for ranking differences
///
/// Variants are declared in ascending order so the derived `Ord`
/// matches the numeric rank (Low=1 .. Critical=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Importance {
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// High and Critical are the levels surfaced in notifications
    pub fn is_high_or_critical(&self) -> bool {
        *self >= Importance::High
    }
}

/// One rule or fact about a jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawRecord {
    pub category: LawCategory,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "30 days" or "$15/hour"
    pub value: String,
    pub importance: Importance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl LawRecord {
    /// Cross-jurisdiction identity of a record
    pub fn identity(&self) -> (LawCategory, &str) {
        (self.category, self.title.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub law_records: Vec<LawRecord>,
}

/// A matched law whose value differs between two jurisdictions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawDifference {
    pub category: LawCategory,
    pub law_title: String,
    pub from_jurisdiction: String,
    pub from_value: String,
    pub to_jurisdiction: String,
    pub to_value: String,
    pub description: String,
    /// max(from importance, to importance)
    pub importance: Importance,
}

impl LawDifference {
    pub fn summary_text(&self) -> String {
        format!(
            "{}: {}: {} → {}: {}",
            self.law_title,
            self.from_jurisdiction,
            self.from_value,
            self.to_jurisdiction,
            self.to_value
        )
    }
}
