//! Fill-in legal document templates
//!
//! - [`templates`]: registry of the 18 template kinds, their fields and layouts
//! - [`form`]: form values checked against a template's declared fields
//! - [`render`]: layout substitution and pagination into a [`RenderedDocument`]
//!
//! Rendering never fails. Writing the result to PDF or any other format is
//! left to the caller.

pub mod error;
pub mod form;
pub mod layout;
pub mod render;
pub mod templates;

pub use error::DocumentError;
pub use form::FormInput;
pub use layout::LayoutConfig;
pub use render::{DocumentRenderer, DISCLAIMER};
pub use shared_types::{RenderedDocument, TemplateKind};
pub use templates::{fields_for, list_templates, parse_template_name, FieldSpec, TemplateInfo};
