pub mod document;
pub mod types;

pub use document::{BlockStyle, RenderedDocument, TemplateGroup, TemplateKind, TextBlock};
pub use types::{Importance, Jurisdiction, LawCategory, LawDifference, LawRecord};
