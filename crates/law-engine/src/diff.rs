//! Cross-jurisdiction law diffing and ranking
//!
//! Laws are matched by (category, title). A matched pair whose values
//! differ becomes a [`LawDifference`] ranked by the higher of the two
//! importances. Ranking is a stable sort, so equal-importance entries keep
//! encounter order: category order first, then the "from" jurisdiction's
//! record order within each category.
//!
//! Titles present in only one jurisdiction are skipped by [`DiffEngine::diff`].
//! [`DiffEngine::unmatched`] lists them separately for callers that want them.

use crate::catalog::LawCatalog;
use crate::compare::{ExactMatch, ValueComparator};
use serde::{Deserialize, Serialize};
use shared_types::{LawCategory, LawDifference, LawRecord};
use std::cmp::max;

/// Default number of entries returned by [`DiffEngine::critical_differences`]
pub const DEFAULT_CRITICAL_LIMIT: usize = 3;

/// Which side of a comparison an unmatched law belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    OnlyInFrom,
    OnlyInTo,
}

/// A law identity with no counterpart in the other jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedLaw {
    pub category: LawCategory,
    pub title: String,
    pub jurisdiction: String,
    pub value: String,
    pub side: Side,
}

pub struct DiffEngine<'a, C = ExactMatch> {
    catalog: &'a LawCatalog,
    comparator: C,
}

impl<'a> DiffEngine<'a, ExactMatch> {
    pub fn new(catalog: &'a LawCatalog) -> Self {
        Self {
            catalog,
            comparator: ExactMatch,
        }
    }
}

impl<'a, C: ValueComparator> DiffEngine<'a, C> {
    pub fn with_comparator(catalog: &'a LawCatalog, comparator: C) -> Self {
        Self {
            catalog,
            comparator,
        }
    }

    pub fn catalog(&self) -> &'a LawCatalog {
        self.catalog
    }

    /// Ranked differences between two jurisdictions
    ///
    /// `categories` restricts the comparison; `None` compares every
    /// category. Categories are always visited in [`LawCategory::ALL`]
    /// order regardless of the order they are passed in.
    pub fn diff(
        &self,
        from_code: &str,
        to_code: &str,
        categories: Option<&[LawCategory]>,
    ) -> Vec<LawDifference> {
        let from_records = self.catalog.records(from_code);
        let to_records = self.catalog.records(to_code);

        let mut differences = Vec::new();

        for category in selected_categories(categories) {
            let to_in_category: Vec<&LawRecord> = to_records
                .iter()
                .filter(|r| r.category == category)
                .collect();

            for from_law in from_records.iter().filter(|r| r.category == category) {
                let Some(to_law) = to_in_category.iter().find(|r| r.title == from_law.title)
                else {
                    continue;
                };

                if self.comparator.differs(&from_law.value, &to_law.value) {
                    differences.push(LawDifference {
                        category,
                        law_title: from_law.title.clone(),
                        from_jurisdiction: from_code.to_string(),
                        from_value: from_law.value.clone(),
                        to_jurisdiction: to_code.to_string(),
                        to_value: to_law.value.clone(),
                        description: from_law.description.clone(),
                        importance: max(from_law.importance, to_law.importance),
                    });
                }
            }
        }

        // sort_by is stable: ties keep encounter order
        differences.sort_by(|a, b| b.importance.cmp(&a.importance));

        tracing::debug!(
            from = from_code,
            to = to_code,
            count = differences.len(),
            "Computed law differences"
        );

        differences
    }

    /// The first `limit` High/Critical differences in ranked order
    pub fn critical_differences(
        &self,
        from_code: &str,
        to_code: &str,
        limit: usize,
    ) -> Vec<LawDifference> {
        self.diff(from_code, to_code, None)
            .into_iter()
            .filter(|d| d.importance.is_high_or_critical())
            .take(limit)
            .collect()
    }

    /// Law identities present in only one of the two jurisdictions
    ///
    /// "From"-only entries come first, then "to"-only entries; both in
    /// category order and then record order.
    pub fn unmatched(&self, from_code: &str, to_code: &str) -> Vec<UnmatchedLaw> {
        let from_records = self.catalog.records(from_code);
        let to_records = self.catalog.records(to_code);

        let mut unmatched = only_in(from_records, to_records, from_code, Side::OnlyInFrom);
        unmatched.extend(only_in(to_records, from_records, to_code, Side::OnlyInTo));
        unmatched
    }
}

fn selected_categories(categories: Option<&[LawCategory]>) -> Vec<LawCategory> {
    match categories {
        Some(wanted) => LawCategory::ALL
            .iter()
            .copied()
            .filter(|c| wanted.contains(c))
            .collect(),
        None => LawCategory::ALL.to_vec(),
    }
}

fn only_in(
    records: &[LawRecord],
    others: &[LawRecord],
    code: &str,
    side: Side,
) -> Vec<UnmatchedLaw> {
    LawCategory::ALL
        .iter()
        .flat_map(move |&category| {
            records
                .iter()
                .filter(move |r| r.category == category)
                .filter(move |r| !others.iter().any(|o| o.identity() == r.identity()))
                .map(move |r| UnmatchedLaw {
                    category: r.category,
                    title: r.title.clone(),
                    jurisdiction: code.to_string(),
                    value: r.value.clone(),
                    side,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Importance, Jurisdiction};

    fn record(
        category: LawCategory,
        title: &str,
        value: &str,
        importance: Importance,
    ) -> LawRecord {
        LawRecord {
            category,
            title: title.to_string(),
            description: format!("{} description", title),
            value: value.to_string(),
            importance,
            effective_date: None,
        }
    }

    /// Two small jurisdictions exercising matching, ties and one-sided titles
    fn fixture() -> LawCatalog {
        LawCatalog::new(
            "test",
            vec![
                Jurisdiction {
                    code: "AA".to_string(),
                    name: "Alpha".to_string(),
                    law_records: vec![
                        record(LawCategory::Taxes, "Sales Tax", "5%", Importance::Medium),
                        record(LawCategory::TenantRights, "Deposit", "1 month", Importance::High),
                        record(LawCategory::TenantRights, "Late Fee", "5%", Importance::Low),
                        record(LawCategory::TenantRights, "Entry", "24h", Importance::High),
                        record(LawCategory::Employment, "Wage", "$10", Importance::Medium),
                        record(LawCategory::Traffic, "Only Alpha", "x", Importance::Critical),
                    ],
                },
                Jurisdiction {
                    code: "BB".to_string(),
                    name: "Beta".to_string(),
                    law_records: vec![
                        record(LawCategory::TenantRights, "Entry", "12h", Importance::Medium),
                        record(LawCategory::TenantRights, "Deposit", "2 months", Importance::Medium),
                        record(LawCategory::TenantRights, "Late Fee", "5%", Importance::Critical),
                        record(LawCategory::Employment, "Wage", "$12", Importance::Critical),
                        record(LawCategory::Taxes, "Sales Tax", "6%", Importance::Low),
                        record(LawCategory::Consumer, "Only Beta", "y", Importance::Low),
                        // same title as an AA tenant law, different category
                        record(LawCategory::Taxes, "Deposit", "n/a", Importance::Low),
                    ],
                },
            ],
        )
        .unwrap()
    }

    fn titles(diffs: &[LawDifference]) -> Vec<&str> {
        diffs.iter().map(|d| d.law_title.as_str()).collect()
    }

    #[test]
    fn test_diff_ranks_and_breaks_ties_by_encounter_order() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let diffs = engine.diff("AA", "BB", None);

        // Wage is Critical; Deposit and Entry tie at High and keep the
        // "from" record order; Sales Tax is Medium. Late Fee values match.
        assert_eq!(titles(&diffs), vec!["Wage", "Deposit", "Entry", "Sales Tax"]);
        assert_eq!(diffs[0].importance, Importance::Critical);
        assert_eq!(diffs[1].importance, Importance::High);
        assert_eq!(diffs[3].importance, Importance::Medium);
    }

    #[test]
    fn test_diff_uses_max_importance_and_from_description() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let diffs = engine.diff("AA", "BB", Some(&[LawCategory::TenantRights]));

        let deposit = diffs.iter().find(|d| d.law_title == "Deposit").unwrap();
        assert_eq!(deposit.importance, Importance::High);
        assert_eq!(deposit.from_value, "1 month");
        assert_eq!(deposit.to_value, "2 months");
        assert_eq!(deposit.from_jurisdiction, "AA");
        assert_eq!(deposit.to_jurisdiction, "BB");
        assert_eq!(deposit.description, "Deposit description");
        assert_eq!(deposit.category, LawCategory::TenantRights);
    }

    #[test]
    fn test_matching_is_per_category() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let diffs = engine.diff("AA", "BB", None);

        // BB's Taxes/"Deposit" must not pair with AA's TenantRights/"Deposit"
        assert_eq!(diffs.iter().filter(|d| d.law_title == "Deposit").count(), 1);
    }

    #[test]
    fn test_one_sided_titles_are_skipped() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let diffs = engine.diff("AA", "BB", None);
        assert!(!diffs.iter().any(|d| d.law_title.starts_with("Only")));
    }

    #[test]
    fn test_category_filter_order_is_canonical() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let a = engine.diff(
            "AA",
            "BB",
            Some(&[LawCategory::Taxes, LawCategory::TenantRights]),
        );
        let b = engine.diff(
            "AA",
            "BB",
            Some(&[LawCategory::TenantRights, LawCategory::Taxes]),
        );
        assert_eq!(a, b);
        assert_eq!(titles(&a), vec!["Deposit", "Entry", "Sales Tax"]);
    }

    #[test]
    fn test_empty_category_filter_yields_nothing() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        assert!(engine.diff("AA", "BB", Some(&[])).is_empty());
    }

    #[test]
    fn test_self_and_unknown_are_empty() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        assert!(engine.diff("AA", "AA", None).is_empty());
        assert!(engine.diff("AA", "ZZ", None).is_empty());
        assert!(engine.diff("ZZ", "BB", None).is_empty());
    }

    #[test]
    fn test_critical_differences_is_filtered_prefix() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);

        let critical = engine.critical_differences("AA", "BB", DEFAULT_CRITICAL_LIMIT);
        assert_eq!(titles(&critical), vec!["Wage", "Deposit", "Entry"]);

        let one = engine.critical_differences("AA", "BB", 1);
        assert_eq!(titles(&one), vec!["Wage"]);

        assert!(engine.critical_differences("AA", "BB", 0).is_empty());
    }

    #[test]
    fn test_custom_comparator_is_used() {
        struct CaseInsensitive;
        impl ValueComparator for CaseInsensitive {
            fn differs(&self, a: &str, b: &str) -> bool {
                !a.eq_ignore_ascii_case(b)
            }
        }

        let catalog = LawCatalog::new(
            "test",
            vec![
                Jurisdiction {
                    code: "AA".to_string(),
                    name: "Alpha".to_string(),
                    law_records: vec![record(
                        LawCategory::Traffic,
                        "Lane Splitting",
                        "Legal",
                        Importance::Medium,
                    )],
                },
                Jurisdiction {
                    code: "BB".to_string(),
                    name: "Beta".to_string(),
                    law_records: vec![record(
                        LawCategory::Traffic,
                        "Lane Splitting",
                        "legal",
                        Importance::Medium,
                    )],
                },
            ],
        )
        .unwrap();

        assert_eq!(DiffEngine::new(&catalog).diff("AA", "BB", None).len(), 1);
        assert!(DiffEngine::with_comparator(&catalog, CaseInsensitive)
            .diff("AA", "BB", None)
            .is_empty());
    }

    #[test]
    fn test_unmatched_lists_both_sides() {
        let catalog = fixture();
        let engine = DiffEngine::new(&catalog);
        let unmatched = engine.unmatched("AA", "BB");

        let summary: Vec<(&str, Side)> = unmatched
            .iter()
            .map(|u| (u.title.as_str(), u.side))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Only Alpha", Side::OnlyInFrom),
                ("Deposit", Side::OnlyInTo),
                ("Only Beta", Side::OnlyInTo),
            ]
        );
        assert_eq!(unmatched[1].category, LawCategory::Taxes);
        assert_eq!(unmatched[2].jurisdiction, "BB");
    }
}
