//! Document rendering
//!
//! Every render is total: missing or blank values show the field's
//! placeholder, unknown keys are dropped, and no input produces an error.

use crate::error::DocumentError;
use crate::form::FormInput;
use crate::layout::{LayoutConfig, PageCursor};
use crate::templates::{embedded, template_info, TemplateInfo};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use shared_types::{BlockStyle, RenderedDocument, TemplateKind, TextBlock};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const DISCLAIMER: &str =
    "This document is for informational purposes only. Consult with a legal professional for advice.";

lazy_static! {
    /// `{fieldName}` slot in a layout line
    static ref FIELD_TOKEN: Regex = Regex::new(r"\{([A-Za-z][A-Za-z0-9]*)\}").unwrap();
}

/// Field names referenced by a layout line, in order of appearance
pub fn field_tokens(line: &str) -> impl Iterator<Item = &str> + '_ {
    FIELD_TOKEN
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Long-form date used in the header and footer ("March 1, 2025")
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    layout: LayoutConfig,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer over a custom layout; rejects configs that fail [`LayoutConfig::validate`]
    pub fn with_layout(layout: LayoutConfig) -> Result<Self, DocumentError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Render a template from raw form values
    ///
    /// `created_at` is supplied by the caller and drives both the header
    /// date line and the footer.
    pub fn render(
        &self,
        kind: TemplateKind,
        field_values: &HashMap<String, String>,
        jurisdiction_name: &str,
        created_at: DateTime<Utc>,
    ) -> RenderedDocument {
        let input = FormInput::sanitize(kind, field_values);
        self.render_input(&input, jurisdiction_name, created_at)
    }

    /// Render already-sanitized form input
    pub fn render_input(
        &self,
        input: &FormInput,
        jurisdiction_name: &str,
        created_at: DateTime<Utc>,
    ) -> RenderedDocument {
        let kind = input.kind();
        let info = template_info(kind);
        let date = long_date(&created_at);
        let mut cursor = PageCursor::new(&self.layout);
        let mut blocks = Vec::new();

        let page = cursor.place(self.layout.title_advance);
        blocks.push(block(info.title, BlockStyle::Heading, page));
        let page = cursor.place(self.layout.date_advance);
        blocks.push(block(format!("Date: {}", date), BlockStyle::Normal, page));
        let page = cursor.place(self.layout.jurisdiction_advance);
        blocks.push(block(
            format!("State: {}", jurisdiction_name),
            BlockStyle::Normal,
            page,
        ));

        for (index, line) in embedded::layout_lines(kind).enumerate() {
            let style = if info.is_section_header(line) {
                BlockStyle::Heading
            } else {
                BlockStyle::Normal
            };
            let filled = fill_line(&info, input, line);

            // multi-line values become consecutive blocks
            for text in filled.split('\n').map(|t| t.trim_end_matches('\r')) {
                let advance = match (text.is_empty(), info.lead_advance) {
                    (true, _) => self.layout.blank_advance,
                    (false, Some(lead)) if index == 0 => lead,
                    (false, _) => info.line_advance,
                };
                let page = cursor.place_body_line(advance);
                blocks.push(block(text, style, page));
            }
        }

        // footer stays on the final page
        let page = cursor.page();
        blocks.push(block(
            format!("Generated on {}", date),
            BlockStyle::Normal,
            page,
        ));
        blocks.push(block(DISCLAIMER, BlockStyle::Normal, page));

        debug!(
            template = kind.slug(),
            pages = page,
            blocks = blocks.len(),
            placeholders = input.missing_fields().len(),
            "Rendered document"
        );

        RenderedDocument {
            title: info.title.to_string(),
            template_kind: kind,
            jurisdiction: jurisdiction_name.to_string(),
            created_at,
            blocks,
        }
    }
}

fn block(text: impl Into<String>, style: BlockStyle, page: u32) -> TextBlock {
    TextBlock {
        text: text.into(),
        style,
        page,
    }
}

fn fill_line(info: &TemplateInfo, input: &FormInput, line: &str) -> String {
    FIELD_TOKEN
        .replace_all(line, |caps: &Captures| {
            let name = &caps[1];
            match info.fields.iter().find(|f| f.name == name) {
                Some(spec) => input.resolve(spec).to_string(),
                None => {
                    warn!(template = info.slug, token = name, "Unresolved layout token");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
