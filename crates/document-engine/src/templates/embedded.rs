//! Embedded template layouts
//!
//! Layouts live in `templates/*.tmpl` and are compiled into the binary.
//! Each line of a layout becomes one text block; `{fieldName}` marks a slot.

use shared_types::TemplateKind;

const LEASE_AGREEMENT: &str = include_str!("../../templates/lease_agreement.tmpl");
const RENT_RECEIPT: &str = include_str!("../../templates/rent_receipt.tmpl");
const MAINTENANCE_REQUEST: &str = include_str!("../../templates/maintenance_request.tmpl");
const NOTICE_TO_VACATE: &str = include_str!("../../templates/notice_to_vacate.tmpl");
const SECURITY_DEPOSIT_CLAIM: &str = include_str!("../../templates/security_deposit_claim.tmpl");
const RENT_INCREASE_NOTICE: &str = include_str!("../../templates/rent_increase_notice.tmpl");
const ROOMMATE_AGREEMENT: &str = include_str!("../../templates/roommate_agreement.tmpl");
const PET_ADDENDUM: &str = include_str!("../../templates/pet_addendum.tmpl");
const SUBLEASE_AGREEMENT: &str = include_str!("../../templates/sublease_agreement.tmpl");
const MOVE_IN_CHECKLIST: &str = include_str!("../../templates/move_in_checklist.tmpl");

const EMPLOYMENT_VERIFICATION: &str =
    include_str!("../../templates/employment_verification.tmpl");
const INCOME_VERIFICATION: &str = include_str!("../../templates/income_verification.tmpl");
const W4_WORKSHEET: &str = include_str!("../../templates/w4_worksheet.tmpl");

const RENTAL_INCOME_REPORT: &str = include_str!("../../templates/rental_income_report.tmpl");
const PROPERTY_TAX_ESTIMATE: &str = include_str!("../../templates/property_tax_estimate.tmpl");

const POWER_OF_ATTORNEY: &str = include_str!("../../templates/power_of_attorney.tmpl");
const LEASE_TERMINATION: &str = include_str!("../../templates/lease_termination.tmpl");
const REPAIR_REQUEST: &str = include_str!("../../templates/repair_request.tmpl");

/// Raw layout text for a template kind
pub fn layout_source(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::LeaseAgreement => LEASE_AGREEMENT,
        TemplateKind::RentReceipt => RENT_RECEIPT,
        TemplateKind::MaintenanceRequest => MAINTENANCE_REQUEST,
        TemplateKind::NoticeToVacate => NOTICE_TO_VACATE,
        TemplateKind::SecurityDepositClaim => SECURITY_DEPOSIT_CLAIM,
        TemplateKind::RentIncreaseNotice => RENT_INCREASE_NOTICE,
        TemplateKind::RoommateAgreement => ROOMMATE_AGREEMENT,
        TemplateKind::PetAddendum => PET_ADDENDUM,
        TemplateKind::SubleaseAgreement => SUBLEASE_AGREEMENT,
        TemplateKind::MoveInChecklist => MOVE_IN_CHECKLIST,
        TemplateKind::EmploymentVerification => EMPLOYMENT_VERIFICATION,
        TemplateKind::IncomeVerification => INCOME_VERIFICATION,
        TemplateKind::W4Worksheet => W4_WORKSHEET,
        TemplateKind::RentalIncomeReport => RENTAL_INCOME_REPORT,
        TemplateKind::PropertyTaxEstimate => PROPERTY_TAX_ESTIMATE,
        TemplateKind::PowerOfAttorney => POWER_OF_ATTORNEY,
        TemplateKind::LeaseTermination => LEASE_TERMINATION,
        TemplateKind::RepairRequest => REPAIR_REQUEST,
    }
}

/// Layout lines in order, trailing newline dropped
pub fn layout_lines(kind: TemplateKind) -> impl Iterator<Item = &'static str> {
    layout_source(kind).lines()
}
