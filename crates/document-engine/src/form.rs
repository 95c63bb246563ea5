//! Form input validated against a template's declared fields

use crate::templates::{fields_for, FieldSpec};
use shared_types::TemplateKind;
use std::collections::HashMap;
use tracing::warn;

/// Field values kept for one template kind
///
/// Keys not declared for the kind are dropped. Empty and whitespace-only
/// values are treated as missing so the placeholder shows instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    kind: TemplateKind,
    values: HashMap<&'static str, String>,
    ignored: Vec<String>,
}

impl FormInput {
    /// Keep declared, non-blank values; never fails
    pub fn sanitize(kind: TemplateKind, raw: &HashMap<String, String>) -> Self {
        let fields = fields_for(kind);
        let mut values = HashMap::new();
        let mut ignored = Vec::new();

        for (key, value) in raw {
            match fields.iter().find(|f| f.name == key.as_str()) {
                Some(spec) => {
                    if !value.trim().is_empty() {
                        values.insert(spec.name, value.clone());
                    }
                }
                None => ignored.push(key.clone()),
            }
        }

        ignored.sort();
        if !ignored.is_empty() {
            warn!(
                template = kind.slug(),
                keys = ?ignored,
                "Ignoring form keys not declared by template"
            );
        }

        Self {
            kind,
            values,
            ignored,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Usable value for a field, if one was supplied
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value for the field, or its placeholder text
    pub fn resolve<'a>(&'a self, spec: &'a FieldSpec) -> &'a str {
        self.value(spec.name).unwrap_or(spec.placeholder)
    }

    /// Keys that were dropped, sorted
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    /// Declared fields that will render as placeholders, in field order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fields_for(self.kind)
            .iter()
            .filter(|f| !self.values.contains_key(f.name))
            .map(|f| f.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let input = FormInput::sanitize(
            TemplateKind::RentReceipt,
            &raw(&[
                ("tenantName", "Jane Doe"),
                ("ssn", "123-45-6789"),
                ("favoriteColor", "blue"),
            ]),
        );

        assert_eq!(input.value("tenantName"), Some("Jane Doe"));
        assert_eq!(input.value("ssn"), None);
        assert_eq!(input.ignored_keys(), ["favoriteColor", "ssn"]);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let input = FormInput::sanitize(
            TemplateKind::RentReceipt,
            &raw(&[("tenantName", "   "), ("amount", "")]),
        );

        assert_eq!(input.value("tenantName"), None);
        assert_eq!(input.value("amount"), None);
        assert!(input.ignored_keys().is_empty());
        assert_eq!(input.missing_fields().len(), 7);
    }

    #[test]
    fn test_resolve_falls_back_to_placeholder() {
        let input = FormInput::sanitize(TemplateKind::RentReceipt, &raw(&[("amount", "950")]));
        let fields = fields_for(TemplateKind::RentReceipt);

        let amount = fields.iter().find(|f| f.name == "amount").unwrap();
        let period = fields.iter().find(|f| f.name == "period").unwrap();
        assert_eq!(input.resolve(amount), "950");
        assert_eq!(input.resolve(period), "[Month/Year]");
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let input = FormInput::sanitize(
            TemplateKind::RentReceipt,
            &raw(&[("tenantName", "  Jane Doe ")]),
        );
        assert_eq!(input.value("tenantName"), Some("  Jane Doe "));
    }
}
