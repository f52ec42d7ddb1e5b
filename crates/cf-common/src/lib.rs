pub mod api;
pub mod logging;
pub mod matching;
pub mod store;
pub mod tag_normalizer;
pub mod timezone;

use serde::{Deserialize, Serialize};

// Commonly used data model for the matching functions.
//
// A profile is what the GUI submits and what the store persists. Every field
// is optional or defaultable: co-founder profiles are filled out gradually,
// and scoring must degrade to neutral defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text skill tags, no canonical taxonomy on the wire.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text value tags ("Innovation", "Transparency", ...).
    #[serde(default)]
    pub values: Vec<String>,
    /// beginner | intermediate | expert (anything else reads as intermediate).
    #[serde(default)]
    pub experience: Option<String>,
    /// Free-text city/country/region, possibly containing "remote".
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text, may contain a parseable `UTC±N` offset.
    #[serde(default)]
    pub timezone: Option<String>,
    /// full-time | part-time | weekends.
    #[serde(default)]
    pub availability: Option<String>,
    /// high | medium | low.
    #[serde(default)]
    pub commitment: Option<String>,
    /// Free-text industry tags.
    #[serde(default)]
    pub industry: Vec<String>,
}

impl Profile {
    /// Trimmed id, treating whitespace-only ids as absent.
    pub fn trimmed_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}
