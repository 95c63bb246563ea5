//! Page layout and pagination
//!
//! Positions are abstract layout units measured down from the top of a page.
//! A line is placed at the current offset, then the offset advances. Before a
//! body line is placed, an offset past `page_break_threshold` starts a new page
//! at `top_margin`.
//!
//! ```toml
//! top_margin = 50
//! page_break_threshold = 700
//! ```

use crate::error::DocumentError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub top_margin: u32,
    /// Offset beyond which the next body line goes to a new page
    pub page_break_threshold: u32,
    /// Advance after the title line
    pub title_advance: u32,
    /// Advance after the generation date line
    pub date_advance: u32,
    /// Advance after the jurisdiction line
    pub jurisdiction_advance: u32,
    /// Advance after an empty layout line
    pub blank_advance: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 50,
            page_break_threshold: 700,
            title_advance: 50,
            date_advance: 30,
            jurisdiction_advance: 40,
            blank_advance: 10,
        }
    }
}

impl LayoutConfig {
    /// Load a layout config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout config: {}", path.display()))?;
        Ok(Self::from_str(&content)?)
    }

    /// Parse and validate a layout config from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, DocumentError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.top_margin >= self.page_break_threshold {
            return Err(DocumentError::InvalidLayout(
                "top_margin",
                format!(
                    "{} must be below page_break_threshold {}",
                    self.top_margin, self.page_break_threshold
                ),
            ));
        }
        Ok(())
    }
}

/// Running vertical offset over a sequence of pages (1-based)
#[derive(Debug, Clone)]
pub struct PageCursor<'a> {
    config: &'a LayoutConfig,
    page: u32,
    offset: u32,
}

impl<'a> PageCursor<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            page: 1,
            offset: config.top_margin,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Place a line on the current page without a break check
    pub fn place(&mut self, advance: u32) -> u32 {
        let page = self.page;
        self.offset = self.offset.saturating_add(advance);
        page
    }

    /// Place a body line, breaking to a new page first if the page is full
    pub fn place_body_line(&mut self, advance: u32) -> u32 {
        if self.offset > self.config.page_break_threshold {
            self.page += 1;
            self.offset = self.config.top_margin;
        }
        self.place(advance)
    }
}
