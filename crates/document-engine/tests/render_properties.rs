//! Rendering is total and substitutes exactly the supplied fields

use chrono::{DateTime, TimeZone, Utc};
use document_engine::templates::embedded::layout_lines;
use document_engine::{fields_for, DocumentRenderer, TemplateKind, DISCLAIMER};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashMap;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Body lines as they should read when every slot shows its placeholder
fn placeholder_body(kind: TemplateKind) -> Vec<String> {
    layout_lines(kind)
        .map(|line| {
            fields_for(kind).iter().fold(line.to_string(), |acc, f| {
                acc.replace(&format!("{{{}}}", f.name), f.placeholder)
            })
        })
        .collect()
}

fn body_texts(doc: &document_engine::RenderedDocument) -> Vec<String> {
    let n = doc.blocks.len();
    doc.blocks[3..n - 2].iter().map(|b| b.text.clone()).collect()
}

#[test]
fn empty_input_shows_every_placeholder() {
    let renderer = DocumentRenderer::new();
    for kind in TemplateKind::ALL {
        let doc = renderer.render(kind, &HashMap::new(), "Any State", at());

        assert_eq!(body_texts(&doc), placeholder_body(kind), "{}", kind.slug());
        assert_eq!(doc.blocks[2].text, "State: Any State");
        assert_eq!(doc.blocks.last().map(|b| b.text.as_str()), Some(DISCLAIMER));
        assert!(doc.page_count() >= 1);
    }
}

#[test]
fn rent_receipt_substitutes_tenant_name_only() {
    let mut values = HashMap::new();
    values.insert("tenantName".to_string(), "Jane Doe".to_string());

    let doc = DocumentRenderer::new().render(TemplateKind::RentReceipt, &values, "Texas", at());
    let body = body_texts(&doc);

    let received: Vec<&String> = body
        .iter()
        .filter(|t| t.starts_with("Received From:"))
        .collect();
    assert_eq!(received, vec!["Received From: Jane Doe"]);

    let expected: Vec<String> = placeholder_body(TemplateKind::RentReceipt)
        .into_iter()
        .map(|line| {
            if line.starts_with("Received From:") {
                "Received From: Jane Doe".to_string()
            } else {
                line
            }
        })
        .collect();
    assert_eq!(body, expected);
    assert!(body.contains(&"RECEIPT #[Receipt Number]".to_string()));
    assert!(body.contains(&"Property Address: [Property Address]".to_string()));
}

#[test]
fn unknown_keys_never_reach_the_document() {
    let mut values = HashMap::new();
    values.insert("injected".to_string(), "SHOULD NOT APPEAR".to_string());

    let doc = DocumentRenderer::new().render(TemplateKind::PetAddendum, &values, "Ohio", at());
    assert!(!doc.to_plain_text().contains("SHOULD NOT APPEAR"));
}

#[test]
fn plain_text_separates_pages() {
    let doc = DocumentRenderer::new().render(
        TemplateKind::MoveInChecklist,
        &HashMap::new(),
        "Oregon",
        at(),
    );
    let text = doc.to_plain_text();
    let form_feeds = text.matches('\u{000C}').count() as u32;
    assert_eq!(form_feeds, doc.page_count() - 1);
}

fn kind_strategy() -> impl Strategy<Value = TemplateKind> {
    prop::sample::select(TemplateKind::ALL.to_vec())
}

fn form_strategy(kind: TemplateKind) -> impl Strategy<Value = HashMap<String, String>> {
    let names: Vec<String> = fields_for(kind).iter().map(|f| f.name.to_string()).collect();
    let key = prop_oneof![
        prop::sample::select(names),
        "[a-z]{1,10}",
    ];
    prop::collection::hash_map(key, "[ -~]{0,24}", 0..12)
}

proptest! {
    #[test]
    fn render_is_total_and_ordered(
        (kind, values) in kind_strategy().prop_flat_map(|k| (Just(k), form_strategy(k))),
        jurisdiction in "[A-Za-z ]{0,16}",
    ) {
        let doc = DocumentRenderer::new().render(kind, &values, &jurisdiction, at());

        let layout_len = layout_lines(kind).count();
        prop_assert_eq!(doc.blocks.len(), 3 + layout_len + 2);
        prop_assert_eq!(doc.template_kind, kind);

        let pages: Vec<u32> = doc.blocks.iter().map(|b| b.page).collect();
        prop_assert_eq!(pages[0], 1);
        prop_assert!(pages.windows(2).all(|w| w[0] <= w[1] && w[1] - w[0] <= 1));

        let text = doc.to_plain_text();
        for f in fields_for(kind) {
            if let Some(value) = values.get(f.name) {
                if !value.trim().is_empty() {
                    prop_assert!(text.contains(value.as_str()));
                }
            }
        }
    }
}
