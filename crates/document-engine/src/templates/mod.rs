//! Template management and embedded layouts

pub mod embedded;
pub mod registry;

pub use registry::{
    fields_for, get_template_source, list_templates, parse_template_name, template_info,
    FieldSpec, TemplateInfo,
};
