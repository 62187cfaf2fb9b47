use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::BdError;

/// The fixed category taxonomy used by the backend.
///
/// The wire value is the human-readable name (e.g. `"Clinical Trials"`); the
/// set is closed, so an unknown value from the backend is a data error rather
/// than a silent passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Academic Research")]
    AcademicResearch,
    #[serde(rename = "Industry Updates")]
    IndustryUpdates,
    #[serde(rename = "Early Discovery")]
    EarlyDiscovery,
    #[serde(rename = "Clinical Trials")]
    ClinicalTrials,
    #[serde(rename = "Drug Modalities")]
    DrugModalities,
    #[serde(rename = "Healthcare & Policy")]
    HealthcarePolicy,
}

impl Category {
    /// All categories, in the order the backend lists them.
    pub const ALL: [Self; 6] = [
        Self::AcademicResearch,
        Self::IndustryUpdates,
        Self::EarlyDiscovery,
        Self::ClinicalTrials,
        Self::DrugModalities,
        Self::HealthcarePolicy,
    ];

    /// The backend's name for this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AcademicResearch => "Academic Research",
            Self::IndustryUpdates => "Industry Updates",
            Self::EarlyDiscovery => "Early Discovery",
            Self::ClinicalTrials => "Clinical Trials",
            Self::DrugModalities => "Drug Modalities",
            Self::HealthcarePolicy => "Healthcare & Policy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BdError::Data(format!("unknown category: {s:?}")))
    }
}

/// A single aggregated news article.
///
/// Articles are immutable once fetched; each fetch replaces the previous list
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Backend-assigned unique identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short model-generated summary of the content.
    pub summary: String,
    /// Full article text.
    pub content: String,
    pub category: Category,
    /// Publisher, e.g. `"PubMed"` or `"BioPharma Journal"`.
    pub source: String,
    /// Link to the original article.
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Ordered keyword list attached by the aggregator.
    pub keywords: Vec<String>,
}
