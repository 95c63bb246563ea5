//! Short notification text for a jurisdiction change
//!
//! Each difference is turned into one line by the first matching entry of
//! [`NOTIFICATION_RULES`]. Title matching is a case-sensitive substring test
//! against the English titles used in the catalog.

use shared_types::{LawCategory, LawDifference};

/// Lines shown before the call-to-action
pub const DEFAULT_MAX_LINES: usize = 2;

const PREVIOUS_FALLBACK: &str = "your previous state";

/// One formatting rule; `title_contains: None` matches any title in the category
pub struct NotificationRule {
    pub category: LawCategory,
    pub title_contains: Option<&'static str>,
    pub render: fn(&LawDifference) -> String,
}

impl NotificationRule {
    fn matches(&self, diff: &LawDifference) -> bool {
        self.category == diff.category
            && self
                .title_contains
                .map_or(true, |needle| diff.law_title.contains(needle))
    }
}

/// Evaluated top to bottom; specific titles precede their category's generic rule
pub static NOTIFICATION_RULES: &[NotificationRule] = &[
    NotificationRule {
        category: LawCategory::TenantRights,
        title_contains: Some("Security Deposit"),
        render: security_deposit_line,
    },
    NotificationRule {
        category: LawCategory::TenantRights,
        title_contains: Some("Rent Control"),
        render: rent_control_line,
    },
    NotificationRule {
        category: LawCategory::TenantRights,
        title_contains: None,
        render: tenant_line,
    },
    NotificationRule {
        category: LawCategory::Traffic,
        title_contains: Some("Hands-Free"),
        render: phone_use_line,
    },
    NotificationRule {
        category: LawCategory::Traffic,
        title_contains: None,
        render: traffic_line,
    },
    NotificationRule {
        category: LawCategory::Employment,
        title_contains: Some("Minimum Wage"),
        render: minimum_wage_line,
    },
    NotificationRule {
        category: LawCategory::Employment,
        title_contains: None,
        render: employment_line,
    },
    NotificationRule {
        category: LawCategory::Taxes,
        title_contains: Some("Income Tax"),
        render: income_tax_line,
    },
    NotificationRule {
        category: LawCategory::Taxes,
        title_contains: None,
        render: tax_line,
    },
    NotificationRule {
        category: LawCategory::Consumer,
        title_contains: None,
        render: consumer_line,
    },
];

fn security_deposit_line(d: &LawDifference) -> String {
    format!(
        "⚠️ Security deposit limits: {} (was {})",
        d.to_value, d.from_value
    )
}

fn rent_control_line(d: &LawDifference) -> String {
    format!("🏠 Rent control: {}", d.to_value)
}

fn tenant_line(d: &LawDifference) -> String {
    format!("🏠 {}: {}", d.law_title, d.to_value)
}

fn phone_use_line(d: &LawDifference) -> String {
    format!("🚗 Phone use: {}", d.to_value)
}

fn traffic_line(d: &LawDifference) -> String {
    format!("🚗 {}: {}", d.law_title, d.to_value)
}

fn minimum_wage_line(d: &LawDifference) -> String {
    format!("💰 Minimum wage: {} (was {})", d.to_value, d.from_value)
}

fn employment_line(d: &LawDifference) -> String {
    format!("💼 {}: {}", d.law_title, d.to_value)
}

fn income_tax_line(d: &LawDifference) -> String {
    format!("💸 State income tax: {}", d.to_value)
}

fn tax_line(d: &LawDifference) -> String {
    format!("💸 {}: {}", d.law_title, d.to_value)
}

fn consumer_line(d: &LawDifference) -> String {
    format!("🛒 {}: {}", d.law_title, d.to_value)
}

#[derive(Debug, Clone)]
pub struct NotificationTextBuilder {
    max_lines: usize,
}

impl Default for NotificationTextBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

impl NotificationTextBuilder {
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    /// Format a single difference
    pub fn line_for(&self, diff: &LawDifference) -> String {
        NOTIFICATION_RULES
            .iter()
            .find(|rule| rule.matches(diff))
            .map(|rule| (rule.render)(diff))
            // every category has a catch-all rule
            .unwrap_or_else(|| format!("{}: {}", diff.law_title, diff.to_value))
    }

    pub fn build_title(&self, to_jurisdiction_name: &str) -> String {
        format!("Welcome to {}!", to_jurisdiction_name)
    }

    /// Notification body; the fallback refers to "your previous state"
    pub fn build_body(&self, differences: &[LawDifference], to_jurisdiction_name: &str) -> String {
        self.compose(differences, to_jurisdiction_name, PREVIOUS_FALLBACK)
    }

    /// Notification body whose fallback names the previous jurisdiction
    pub fn build_body_with_previous(
        &self,
        differences: &[LawDifference],
        to_jurisdiction_name: &str,
        previous_jurisdiction_name: &str,
    ) -> String {
        self.compose(
            differences,
            to_jurisdiction_name,
            previous_jurisdiction_name,
        )
    }

    fn compose(&self, differences: &[LawDifference], to_name: &str, previous: &str) -> String {
        let notable: Vec<&LawDifference> = differences
            .iter()
            .filter(|d| d.importance.is_high_or_critical())
            .collect();

        if notable.is_empty() {
            return format!(
                "No major law differences between {} and {}.",
                previous, to_name
            );
        }

        let mut lines: Vec<String> = notable
            .iter()
            .take(self.max_lines)
            .map(|d| self.line_for(d))
            .collect();

        let hidden = notable.len() - lines.len();
        if hidden > 0 {
            lines.push(format!(
                "+{} more. Tap to see all differences in {}.",
                hidden, to_name
            ));
        } else {
            lines.push(format!("Tap to see all differences in {}.", to_name));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Importance;

    fn diff(category: LawCategory, title: &str, from: &str, to: &str) -> LawDifference {
        LawDifference {
            category,
            law_title: title.to_string(),
            from_jurisdiction: "CA".to_string(),
            from_value: from.to_string(),
            to_jurisdiction: "TX".to_string(),
            to_value: to.to_string(),
            description: String::new(),
            importance: Importance::Critical,
        }
    }

    #[test]
    fn test_minimum_wage_body() {
        let builder = NotificationTextBuilder::default();
        let body = builder.build_body(
            &[diff(
                LawCategory::Employment,
                "Minimum Wage",
                "$16.00/hour",
                "$7.25/hour",
            )],
            "Texas",
        );
        assert!(body.contains("Minimum wage:"));
        assert!(body.contains("$7.25/hour"));
        assert_eq!(
            body,
            "💰 Minimum wage: $7.25/hour (was $16.00/hour)\nTap to see all differences in Texas."
        );
    }

    #[test]
    fn test_rule_table_per_category() {
        let b = NotificationTextBuilder::default();
        let cases = [
            (
                diff(LawCategory::TenantRights, "Security Deposit Limit", "2 months rent", "No limit"),
                "⚠️ Security deposit limits: No limit (was 2 months rent)",
            ),
            (
                diff(LawCategory::TenantRights, "Rent Control", "Yes", "No rent control"),
                "🏠 Rent control: No rent control",
            ),
            (
                diff(LawCategory::TenantRights, "Eviction Notice Period", "3 days", "14 days"),
                "🏠 Eviction Notice Period: 14 days",
            ),
            (
                diff(LawCategory::Traffic, "Hands-Free Driving", "Hands-free only", "Texting banned"),
                "🚗 Phone use: Texting banned",
            ),
            (
                diff(LawCategory::Traffic, "Lane Splitting", "Legal", "Illegal"),
                "🚗 Lane Splitting: Illegal",
            ),
            (
                diff(LawCategory::Employment, "Paid Sick Leave", "Yes", "No requirement"),
                "💼 Paid Sick Leave: No requirement",
            ),
            (
                diff(LawCategory::Taxes, "State Income Tax", "1% - 13.3%", "No income tax"),
                "💸 State income tax: No income tax",
            ),
            (
                diff(LawCategory::Taxes, "Sales Tax", "7.25%", "6.25%"),
                "💸 Sales Tax: 6.25%",
            ),
            (
                diff(LawCategory::Consumer, "Lemon Law", "Yes", "No"),
                "🛒 Lemon Law: No",
            ),
        ];

        for (d, expected) in cases {
            assert_eq!(b.line_for(&d), expected);
        }
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let b = NotificationTextBuilder::default();
        let d = diff(LawCategory::Employment, "minimum wage", "$1", "$2");
        assert_eq!(b.line_for(&d), "💼 minimum wage: $2");
    }

    #[test]
    fn test_at_most_two_lines_plus_cta() {
        let b = NotificationTextBuilder::default();
        let diffs = vec![
            diff(LawCategory::Employment, "Minimum Wage", "$16.00/hour", "$7.25/hour"),
            diff(LawCategory::Taxes, "State Income Tax", "1% - 13.3%", "No income tax"),
            diff(LawCategory::TenantRights, "Rent Control", "Yes", "No rent control"),
        ];
        let body = b.build_body(&diffs, "Texas");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "+1 more. Tap to see all differences in Texas.");
    }

    #[test]
    fn test_low_importance_only_falls_back() {
        let b = NotificationTextBuilder::default();
        let mut low = diff(LawCategory::Traffic, "Right Turn on Red", "Allowed", "Banned");
        low.importance = Importance::Medium;

        let body = b.build_body_with_previous(&[low], "Texas", "California");
        assert_eq!(body, "No major law differences between California and Texas.");
    }

    #[test]
    fn test_empty_input_falls_back() {
        let b = NotificationTextBuilder::default();
        assert_eq!(
            b.build_body(&[], "Texas"),
            "No major law differences between your previous state and Texas."
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(
            NotificationTextBuilder::default().build_title("Wisconsin"),
            "Welcome to Wisconsin!"
        );
    }

    #[test]
    fn test_every_category_has_catch_all() {
        for category in LawCategory::ALL {
            assert!(NOTIFICATION_RULES
                .iter()
                .any(|r| r.category == category && r.title_contains.is_none()));
        }
    }
}
