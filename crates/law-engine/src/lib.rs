//! Jurisdiction law comparison engine
//!
//! - [`catalog`]: static law reference data per jurisdiction code
//! - [`diff`]: ranked differences between two jurisdictions
//! - [`notification`]: short text for a jurisdiction-change notification
//! - [`jurisdiction`]: state code/name reference table for callers
//!
//! All lookups are pure and total. Unknown codes produce empty results,
//! never errors; only loading external data can fail.

pub mod catalog;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod jurisdiction;
pub mod notification;

pub use catalog::{LawCatalog, LawMatch, LawQuery};
pub use compare::{ExactMatch, ValueComparator};
pub use config::EngineConfig;
pub use diff::{DiffEngine, Side, UnmatchedLaw, DEFAULT_CRITICAL_LIMIT};
pub use error::CatalogError;
pub use notification::NotificationTextBuilder;

use shared_types::{LawCategory, LawDifference, LawRecord};
use std::borrow::Cow;

/// LawEngine entry point
pub struct LawEngine {
    catalog: Cow<'static, LawCatalog>,
    config: EngineConfig,
    notifications: NotificationTextBuilder,
}

impl LawEngine {
    /// Engine over the embedded catalog with default settings
    pub fn new() -> Self {
        Self {
            catalog: Cow::Borrowed(LawCatalog::embedded()),
            config: EngineConfig::default(),
            notifications: NotificationTextBuilder::default(),
        }
    }

    /// Engine built from configuration, loading an external catalog if one is named
    pub fn from_config(config: EngineConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Cow::Owned(LawCatalog::from_file(path)?),
            None => Cow::Borrowed(LawCatalog::embedded()),
        };
        let notifications = NotificationTextBuilder::new(config.notification_max_lines);

        Ok(Self {
            catalog,
            config,
            notifications,
        })
    }

    /// Engine over a caller-supplied catalog
    pub fn with_catalog(catalog: LawCatalog) -> Self {
        Self {
            catalog: Cow::Owned(catalog),
            config: EngineConfig::default(),
            notifications: NotificationTextBuilder::default(),
        }
    }

    pub fn catalog(&self) -> &LawCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn records(&self, code: &str) -> &[LawRecord] {
        self.catalog.records(code)
    }

    pub fn diff(
        &self,
        from_code: &str,
        to_code: &str,
        categories: Option<&[LawCategory]>,
    ) -> Vec<LawDifference> {
        DiffEngine::new(&self.catalog).diff(from_code, to_code, categories)
    }

    /// High/Critical differences, capped at the configured limit
    pub fn critical_differences(&self, from_code: &str, to_code: &str) -> Vec<LawDifference> {
        DiffEngine::new(&self.catalog).critical_differences(
            from_code,
            to_code,
            self.config.critical_limit,
        )
    }

    pub fn notification_title(&self, to_code: &str) -> String {
        self.notifications
            .build_title(self.catalog.name_for(to_code))
    }

    /// Notification body for moving from `from_code` to `to_code`
    ///
    /// The builder sees every High/Critical difference so the call-to-action
    /// counts all of them, not just the `critical_limit` shown elsewhere.
    pub fn notification_body(&self, from_code: &str, to_code: &str) -> String {
        let differences: Vec<LawDifference> = self
            .diff(from_code, to_code, None)
            .into_iter()
            .filter(|d| d.importance.is_high_or_critical())
            .collect();
        self.notifications.build_body_with_previous(
            &differences,
            self.catalog.name_for(to_code),
            self.catalog.name_for(from_code),
        )
    }
}

impl Default for LawEngine {
    fn default() -> Self {
        Self::new()
    }
}
