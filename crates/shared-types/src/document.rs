//! Rendered document model handed to export collaborators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported document templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    // Tenant documents
    LeaseAgreement,
    RentReceipt,
    MaintenanceRequest,
    NoticeToVacate,
    SecurityDepositClaim,
    RentIncreaseNotice,
    RoommateAgreement,
    PetAddendum,
    SubleaseAgreement,
    MoveInChecklist,
    // Employment documents
    EmploymentVerification,
    IncomeVerification,
    W4Worksheet,
    // Tax documents
    RentalIncomeReport,
    PropertyTaxEstimate,
    // Other legal documents
    PowerOfAttorney,
    LeaseTermination,
    RepairRequest,
}

/// Grouping used when listing templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateGroup {
    Tenant,
    Employment,
    Tax,
    Legal,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 18] = [
        TemplateKind::LeaseAgreement,
        TemplateKind::RentReceipt,
        TemplateKind::MaintenanceRequest,
        TemplateKind::NoticeToVacate,
        TemplateKind::SecurityDepositClaim,
        TemplateKind::RentIncreaseNotice,
        TemplateKind::RoommateAgreement,
        TemplateKind::PetAddendum,
        TemplateKind::SubleaseAgreement,
        TemplateKind::MoveInChecklist,
        TemplateKind::EmploymentVerification,
        TemplateKind::IncomeVerification,
        TemplateKind::W4Worksheet,
        TemplateKind::RentalIncomeReport,
        TemplateKind::PropertyTaxEstimate,
        TemplateKind::PowerOfAttorney,
        TemplateKind::LeaseTermination,
        TemplateKind::RepairRequest,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::LeaseAgreement => "Lease Agreement",
            TemplateKind::RentReceipt => "Rent Receipt",
            TemplateKind::MaintenanceRequest => "Maintenance Request",
            TemplateKind::NoticeToVacate => "Notice to Vacate",
            TemplateKind::SecurityDepositClaim => "Security Deposit Claim",
            TemplateKind::RentIncreaseNotice => "Rent Increase Notice",
            TemplateKind::RoommateAgreement => "Roommate Agreement",
            TemplateKind::PetAddendum => "Pet Addendum",
            TemplateKind::SubleaseAgreement => "Sublease Agreement",
            TemplateKind::MoveInChecklist => "Move-In Checklist",
            TemplateKind::EmploymentVerification => "Employment Verification",
            TemplateKind::IncomeVerification => "Income Verification",
            TemplateKind::W4Worksheet => "W-4 Withholding Worksheet",
            TemplateKind::RentalIncomeReport => "Rental Income Report",
            TemplateKind::PropertyTaxEstimate => "Property Tax Estimate",
            TemplateKind::PowerOfAttorney => "Power of Attorney",
            TemplateKind::LeaseTermination => "Lease Termination",
            TemplateKind::RepairRequest => "Repair Request",
        }
    }

    /// Stable identifier, same spelling as the serde representation
    pub fn slug(&self) -> &'static str {
        match self {
            TemplateKind::LeaseAgreement => "lease_agreement",
            TemplateKind::RentReceipt => "rent_receipt",
            TemplateKind::MaintenanceRequest => "maintenance_request",
            TemplateKind::NoticeToVacate => "notice_to_vacate",
            TemplateKind::SecurityDepositClaim => "security_deposit_claim",
            TemplateKind::RentIncreaseNotice => "rent_increase_notice",
            TemplateKind::RoommateAgreement => "roommate_agreement",
            TemplateKind::PetAddendum => "pet_addendum",
            TemplateKind::SubleaseAgreement => "sublease_agreement",
            TemplateKind::MoveInChecklist => "move_in_checklist",
            TemplateKind::EmploymentVerification => "employment_verification",
            TemplateKind::IncomeVerification => "income_verification",
            TemplateKind::W4Worksheet => "w4_worksheet",
            TemplateKind::RentalIncomeReport => "rental_income_report",
            TemplateKind::PropertyTaxEstimate => "property_tax_estimate",
            TemplateKind::PowerOfAttorney => "power_of_attorney",
            TemplateKind::LeaseTermination => "lease_termination",
            TemplateKind::RepairRequest => "repair_request",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }

    pub fn group(&self) -> TemplateGroup {
        match self {
            TemplateKind::EmploymentVerification
            | TemplateKind::IncomeVerification
            | TemplateKind::W4Worksheet => TemplateGroup::Employment,
            TemplateKind::RentalIncomeReport | TemplateKind::PropertyTaxEstimate => {
                TemplateGroup::Tax
            }
            TemplateKind::PowerOfAttorney
            | TemplateKind::LeaseTermination
            | TemplateKind::RepairRequest => TemplateGroup::Legal,
            _ => TemplateGroup::Tenant,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    Heading,
    Normal,
}

/// One line of rendered output pinned to a page (1-indexed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub style: BlockStyle,
    pub page: u32,
}

impl TextBlock {
    pub fn is_heading(&self) -> bool {
        self.style == BlockStyle::Heading
    }
}

/// Output of a single render call, owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub title: String,
    pub template_kind: TemplateKind,
    pub jurisdiction: String,
    pub created_at: DateTime<Utc>,
    pub blocks: Vec<TextBlock>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> u32 {
        self.blocks.iter().map(|b| b.page).max().unwrap_or(0)
    }

    pub fn blocks_on_page(&self, page: u32) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(move |b| b.page == page)
    }

    /// Plain-text export, pages separated by a form feed
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let mut current_page = self.blocks.first().map(|b| b.page).unwrap_or(1);

        for block in &self.blocks {
            if block.page != current_page {
                out.push('\u{000C}');
                current_page = block.page;
            }
            out.push_str(&block.text);
            out.push('\n');
        }

        out
    }
}
