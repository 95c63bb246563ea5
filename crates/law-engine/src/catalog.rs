//! Static law reference data keyed by jurisdiction code
//!
//! The catalog ships as a versioned JSON document embedded at compile time
//! (`data/law_catalog.json`). A newer file can be loaded at runtime with
//! [`LawCatalog::from_file`] without rebuilding.
//!
//! Lookups are exact on the code: "TX" matches, "tx" and "Texas" do not.
//! Unknown codes yield an empty record set rather than an error.

use crate::error::CatalogError;
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use shared_types::{Jurisdiction, LawCategory, LawRecord};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Catalog bundled with the crate
const EMBEDDED_CATALOG: &str = include_str!("../data/law_catalog.json");

static EMBEDDED: Lazy<LawCatalog> = Lazy::new(|| {
    LawCatalog::from_json_str(EMBEDDED_CATALOG).expect("embedded law catalog must parse")
});

/// On-disk shape of a catalog file
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    jurisdictions: Vec<Jurisdiction>,
}

/// Read-only collection of jurisdictions and their law records
#[derive(Debug, Clone)]
pub struct LawCatalog {
    version: String,
    jurisdictions: Vec<Jurisdiction>,
    index: HashMap<String, usize>,
}

/// Filter for [`LawCatalog::search`]
#[derive(Debug, Clone, Default)]
pub struct LawQuery {
    /// Case-insensitive substring matched against title, description and value
    pub text: String,
    /// Restrict to one jurisdiction code
    pub jurisdiction: Option<String>,
    /// Restrict to one category
    pub category: Option<LawCategory>,
}

/// A search hit
#[derive(Debug, Clone, PartialEq)]
pub struct LawMatch<'a> {
    pub jurisdiction_code: &'a str,
    pub record: &'a LawRecord,
}

impl LawCatalog {
    /// The catalog bundled with this crate, parsed once per process
    pub fn embedded() -> &'static LawCatalog {
        &EMBEDDED
    }

    /// Build a catalog from already-parsed jurisdictions
    pub fn new(
        version: impl Into<String>,
        jurisdictions: Vec<Jurisdiction>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(jurisdictions.len());
        let mut cleaned = Vec::with_capacity(jurisdictions.len());

        for (position, mut jurisdiction) in jurisdictions.into_iter().enumerate() {
            if jurisdiction.code.is_empty() {
                return Err(CatalogError::EmptyCode(position));
            }
            if index.contains_key(&jurisdiction.code) {
                return Err(CatalogError::DuplicateJurisdiction(jurisdiction.code));
            }

            dedupe_identities(&mut jurisdiction);
            index.insert(jurisdiction.code.clone(), cleaned.len());
            cleaned.push(jurisdiction);
        }

        let catalog = Self {
            version: version.into(),
            jurisdictions: cleaned,
            index,
        };

        tracing::debug!(
            version = %catalog.version,
            jurisdictions = catalog.jurisdictions.len(),
            records = catalog.record_count(),
            "Law catalog loaded"
        );

        Ok(catalog)
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.version, file.jurisdictions)
    }

    /// Load a catalog JSON file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read law catalog: {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Invalid law catalog: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            version = %catalog.version,
            "Loaded external law catalog"
        );
        Ok(catalog)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Law records for a jurisdiction; empty for unknown codes
    pub fn records(&self, code: &str) -> &[LawRecord] {
        self.jurisdiction(code)
            .map(|j| j.law_records.as_slice())
            .unwrap_or(&[])
    }

    pub fn jurisdiction(&self, code: &str) -> Option<&Jurisdiction> {
        self.index.get(code).map(|&i| &self.jurisdictions[i])
    }

    /// Display name for a code, or the code itself when unknown
    pub fn name_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.jurisdiction(code)
            .map(|j| j.name.as_str())
            .unwrap_or(code)
    }

    /// Jurisdiction codes in catalog order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.jurisdictions.iter().map(|j| j.code.as_str())
    }

    pub fn jurisdictions(&self) -> &[Jurisdiction] {
        &self.jurisdictions
    }

    pub fn record_count(&self) -> usize {
        self.jurisdictions.iter().map(|j| j.law_records.len()).sum()
    }

    /// Single fact lookup by (category, title)
    pub fn lookup(&self, code: &str, category: LawCategory, title: &str) -> Option<&LawRecord> {
        self.records(code)
            .iter()
            .find(|r| r.category == category && r.title == title)
    }

    /// Case-insensitive text search, results in catalog order
    pub fn search(&self, query: &LawQuery) -> Vec<LawMatch<'_>> {
        let needle = query.text.trim().to_lowercase();

        self.jurisdictions
            .iter()
            .filter(|j| {
                query
                    .jurisdiction
                    .as_deref()
                    .map_or(true, |code| j.code == code)
            })
            .flat_map(|j| {
                j.law_records.iter().map(move |record| LawMatch {
                    jurisdiction_code: j.code.as_str(),
                    record,
                })
            })
            .filter(|m| query.category.map_or(true, |c| m.record.category == c))
            .filter(|m| needle.is_empty() || record_matches(m.record, &needle))
            .collect()
    }
}

fn record_matches(record: &LawRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.value.to_lowercase().contains(needle)
}

/// Drop records whose (category, title) repeats an earlier one
fn dedupe_identities(jurisdiction: &mut Jurisdiction) {
    let mut seen: HashSet<(LawCategory, String)> = HashSet::new();
    let code = jurisdiction.code.clone();

    jurisdiction.law_records.retain(|record| {
        let fresh = seen.insert((record.category, record.title.clone()));
        if !fresh {
            tracing::warn!(
                jurisdiction = %code,
                category = ?record.category,
                title = %record.title,
                "Duplicate law identity ignored"
            );
        }
        fresh
    });
}
