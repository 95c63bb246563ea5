//! Template registry and metadata
//!
//! One static entry per [`TemplateKind`]: the ordered field list with
//! placeholder text, the exact section-header lines, and the vertical
//! advance used for each body line.

use super::embedded;
use crate::error::DocumentError;
use serde::Serialize;
use shared_types::{TemplateGroup, TemplateKind};

/// A named slot in a template layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key expected in the form-value map (camelCase)
    pub name: &'static str,
    /// Shown when no usable value is supplied; empty for optional slots
    pub placeholder: &'static str,
}

const fn field(name: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec { name, placeholder }
}

struct Definition {
    description: &'static str,
    fields: &'static [FieldSpec],
    section_headers: &'static [&'static str],
    line_advance: u32,
}

/// Information about an available template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub kind: TemplateKind,
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub group: TemplateGroup,
    pub fields: &'static [FieldSpec],
    pub section_headers: &'static [&'static str],
    /// Layout units advanced after each non-blank line
    pub line_advance: u32,
    /// Advance after the first layout line, when it differs from `line_advance`
    pub lead_advance: Option<u32>,
}

impl TemplateInfo {
    pub fn is_section_header(&self, line: &str) -> bool {
        self.section_headers.iter().any(|header| *header == line)
    }

    pub fn placeholder_for(&self, name: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.placeholder)
    }
}

fn definition(kind: TemplateKind) -> &'static Definition {
    match kind {
        TemplateKind::LeaseAgreement => &LEASE_AGREEMENT,
        TemplateKind::RentReceipt => &RENT_RECEIPT,
        TemplateKind::MaintenanceRequest => &MAINTENANCE_REQUEST,
        TemplateKind::NoticeToVacate => &NOTICE_TO_VACATE,
        TemplateKind::SecurityDepositClaim => &SECURITY_DEPOSIT_CLAIM,
        TemplateKind::RentIncreaseNotice => &RENT_INCREASE_NOTICE,
        TemplateKind::RoommateAgreement => &ROOMMATE_AGREEMENT,
        TemplateKind::PetAddendum => &PET_ADDENDUM,
        TemplateKind::SubleaseAgreement => &SUBLEASE_AGREEMENT,
        TemplateKind::MoveInChecklist => &MOVE_IN_CHECKLIST,
        TemplateKind::EmploymentVerification => &EMPLOYMENT_VERIFICATION,
        TemplateKind::IncomeVerification => &INCOME_VERIFICATION,
        TemplateKind::W4Worksheet => &W4_WORKSHEET,
        TemplateKind::RentalIncomeReport => &RENTAL_INCOME_REPORT,
        TemplateKind::PropertyTaxEstimate => &PROPERTY_TAX_ESTIMATE,
        TemplateKind::PowerOfAttorney => &POWER_OF_ATTORNEY,
        TemplateKind::LeaseTermination => &LEASE_TERMINATION,
        TemplateKind::RepairRequest => &REPAIR_REQUEST,
    }
}

/// Ordered field specs for a template kind
pub fn fields_for(kind: TemplateKind) -> &'static [FieldSpec] {
    definition(kind).fields
}

pub fn template_info(kind: TemplateKind) -> TemplateInfo {
    let def = definition(kind);
    TemplateInfo {
        kind,
        slug: kind.slug(),
        title: kind.display_name(),
        description: def.description,
        group: kind.group(),
        fields: def.fields,
        section_headers: def.section_headers,
        line_advance: def.line_advance,
        lead_advance: lead_advance(kind),
    }
}

fn lead_advance(kind: TemplateKind) -> Option<u32> {
    match kind {
        // receipt number sits apart from the payment lines
        TemplateKind::RentReceipt => Some(30),
        _ => None,
    }
}

/// List all available templates
pub fn list_templates() -> Vec<TemplateInfo> {
    TemplateKind::ALL.into_iter().map(template_info).collect()
}

/// Resolve a template by slug ("rent_receipt") or display name ("Rent Receipt")
pub fn parse_template_name(name: &str) -> Result<TemplateKind, DocumentError> {
    let trimmed = name.trim();
    TemplateKind::from_slug(trimmed)
        .or_else(|| {
            TemplateKind::ALL
                .into_iter()
                .find(|kind| kind.display_name().eq_ignore_ascii_case(trimmed))
        })
        .ok_or_else(|| DocumentError::TemplateNotFound(name.to_string()))
}

/// Get the layout source for a named template
pub fn get_template_source(name: &str) -> Result<&'static str, DocumentError> {
    parse_template_name(name).map(embedded::layout_source)
}

// Tenant documents

static LEASE_AGREEMENT: Definition = Definition {
    description: "Residential lease between landlord and tenant",
    fields: &[
        field("landlordName", "[Landlord Name]"),
        field("landlordAddress", "[Landlord Address]"),
        field("landlordPhone", "[Phone Number]"),
        field("tenantName", "[Tenant Name]"),
        field("tenantAddress", "[Current Address]"),
        field("tenantPhone", "[Phone Number]"),
        field("propertyAddress", "[Property Address]"),
        field("propertyType", "[Apartment/House]"),
        field("bedrooms", "[Number]"),
        field("bathrooms", "[Number]"),
        field("startDate", "[Start Date]"),
        field("endDate", "[End Date]"),
        field("monthlyRent", "[Amount]"),
        field("securityDeposit", "[Amount]"),
        field("paymentDueDate", "[Day of Month]"),
    ],
    section_headers: &[
        "LANDLORD INFORMATION",
        "TENANT INFORMATION",
        "PROPERTY INFORMATION",
        "LEASE TERMS",
        "SIGNATURES",
    ],
    line_advance: 20,
};

static RENT_RECEIPT: Definition = Definition {
    description: "Proof of a rent payment received",
    fields: &[
        field("receiptNumber", "[Receipt Number]"),
        field("tenantName", "[Tenant Name]"),
        field("propertyAddress", "[Property Address]"),
        field("amount", "[Amount]"),
        field("period", "[Month/Year]"),
        field("paymentMethod", "[Cash/Check/Electronic]"),
        field("dateReceived", "[Date]"),
    ],
    section_headers: &[],
    line_advance: 25,
};

static MAINTENANCE_REQUEST: Definition = Definition {
    description: "Request that the landlord fix a problem in the unit",
    fields: &[
        field("date", "[Date]"),
        field("tenantName", "[Your Name]"),
        field("unit", "[Unit Number/Address]"),
        field("phone", "[Phone Number]"),
        field("contactTime", "[Morning/Afternoon/Evening]"),
        field("location", "[Kitchen/Bathroom/Bedroom/etc.]"),
        field("priority", "[Emergency/High/Normal/Low]"),
        field("description", "[Detailed description of the maintenance issue]"),
        field("duration", "[Duration]"),
        field("permission", "[Yes/No]"),
    ],
    section_headers: &["MAINTENANCE REQUEST FORM", "ISSUE DETAILS"],
    line_advance: 20,
};

static NOTICE_TO_VACATE: Definition = Definition {
    description: "Tenant's written notice of moving out",
    fields: &[
        field("date", "[Date]"),
        field("landlordName", "[Landlord/Property Manager Name]"),
        field("propertyAddress", "[Property Address]"),
        field("moveOutDate", "[Date]"),
        field("noticePeriod", "[30/60 days]"),
        field("forwardingAddress", "[New Address]"),
        field("tenantName", "[Tenant Name]"),
    ],
    section_headers: &["NOTICE TO VACATE"],
    line_advance: 20,
};

static SECURITY_DEPOSIT_CLAIM: Definition = Definition {
    description: "Dispute of security deposit deductions",
    fields: &[
        field("tenantName", "[Name]"),
        field("previousAddress", "[Previous Address]"),
        field("moveOutDate", "[Date]"),
        field("depositAmount", "[Amount]"),
        field("depositDate", "[Date]"),
        field("deductions", "[List any deductions claimed by landlord]"),
        field("disputeReason", "[Explain why you dispute the deductions]"),
        field("amountClaimed", "[Amount]"),
        field("otherDocs", ""),
    ],
    section_headers: &["SECURITY DEPOSIT CLAIM FORM"],
    line_advance: 20,
};

static RENT_INCREASE_NOTICE: Definition = Definition {
    description: "Landlord's notice of a change in monthly rent",
    fields: &[
        field("date", "[Date]"),
        field("tenantName", "[Tenant Name]"),
        field("propertyAddress", "[Property Address]"),
        field("currentRent", "[Current Amount]"),
        field("newRent", "[New Amount]"),
        field("increaseAmount", "[Difference]"),
        field("effectiveDate", "[Date]"),
        field("noticePeriod", "[30/60 days]"),
        field("reason", "[Reason for rent increase]"),
        field("landlordPhone", "[Phone]"),
        field("landlordEmail", "[Email]"),
        field("landlordName", "[Landlord/Property Manager Name]"),
    ],
    section_headers: &["NOTICE OF RENT INCREASE"],
    line_advance: 20,
};

static ROOMMATE_AGREEMENT: Definition = Definition {
    description: "Rent split and house rules between roommates",
    fields: &[
        field("date", "[Date]"),
        field("roommate1", "[Name]"),
        field("roommate2", "[Name]"),
        field("roommate3", ""),
        field("propertyAddress", "[Address]"),
        field("totalRent", "[Amount]"),
        field("rent1", "[Amount]"),
        field("rent2", "[Amount]"),
        field("rent3", ""),
        field("utilitySplit", "[Equal/Percentage]"),
        field("internet", "[Amount]"),
        field("utilities", "[Amount]"),
        field("quietHours", "[Time]"),
        field("guestPolicy", "[Policy]"),
        field("cleaning", "[Schedule]"),
    ],
    section_headers: &[
        "ROOMMATE AGREEMENT",
        "RENT DIVISION",
        "UTILITIES & EXPENSES",
        "HOUSE RULES",
        "SIGNATURES",
    ],
    line_advance: 20,
};

static PET_ADDENDUM: Definition = Definition {
    description: "Lease addendum permitting a pet",
    fields: &[
        field("propertyAddress", "[Address]"),
        field("leaseDate", "[Date]"),
        field("tenantName", "[Name]"),
        field("petType", "[Dog/Cat/Other]"),
        field("breed", "[Breed]"),
        field("petName", "[Pet Name]"),
        field("petAge", "[Age]"),
        field("weight", "[Weight]"),
        field("color", "[Color]"),
        field("petDeposit", "[Amount]"),
        field("petRent", "[Amount]"),
    ],
    section_headers: &[
        "PET ADDENDUM TO LEASE AGREEMENT",
        "TENANT INFORMATION",
        "PET INFORMATION",
        "FEES & DEPOSITS",
        "PET RULES",
        "SIGNATURES",
    ],
    line_advance: 20,
};

static SUBLEASE_AGREEMENT: Definition = Definition {
    description: "Sublease from the original tenant to a subtenant",
    fields: &[
        field("originalLeaseDate", "[Date]"),
        field("startDate", "[Date]"),
        field("endDate", "[Date]"),
        field("originalTenant", "[Name]"),
        field("originalPhone", "[Phone]"),
        field("subtenant", "[Name]"),
        field("subtenantPhone", "[Phone]"),
        field("subtenantEmail", "[Email]"),
        field("propertyAddress", "[Address]"),
        field("unit", "[Unit #]"),
        field("rent", "[Amount]"),
        field("deposit", "[Amount]"),
        field("dueDate", "[Day of Month]"),
        field("landlordName", "[Name]"),
        field("approvalDate", "[Date]"),
        field("utilities", "[Who pays]"),
    ],
    section_headers: &[
        "SUBLEASE AGREEMENT",
        "ORIGINAL TENANT (Sublessor)",
        "SUBTENANT (Sublessee)",
        "PROPERTY",
        "FINANCIAL TERMS",
        "LANDLORD APPROVAL",
        "TERMS",
        "SIGNATURES",
    ],
    line_advance: 20,
};

static MOVE_IN_CHECKLIST: Definition = Definition {
    description: "Room-by-room condition report at move-in",
    fields: &[
        field("propertyAddress", "[Address]"),
        field("moveInDate", "[Date]"),
        field("tenantName", "[Name]"),
        field("notes", "[Additional observations]"),
    ],
    section_headers: &[
        "MOVE-IN INSPECTION CHECKLIST",
        "LIVING ROOM",
        "KITCHEN",
        "BATHROOM(S)",
        "BEDROOM(S)",
        "ADDITIONAL NOTES:",
        "SIGNATURES",
    ],
    line_advance: 18,
};

// Employment documents

static EMPLOYMENT_VERIFICATION: Definition = Definition {
    description: "Employer letter confirming current employment",
    fields: &[
        field("date", "[Date]"),
        field("employeeName", "[Employee Name]"),
        field("position", "[Job Title]"),
        field("department", "[Department]"),
        field("employeeId", "[ID Number]"),
        field("startDate", "[Date]"),
        field("employmentStatus", "[Full-time/Part-time]"),
        field("schedule", "[Hours per week]"),
        field("companyName", "[Company Name]"),
        field("companyAddress", "[Address]"),
        field("hrContact", "[Name]"),
        field("phone", "[Phone]"),
        field("email", "[Email]"),
        field("signerName", "[HR Manager Name]"),
        field("signerTitle", "[Title]"),
    ],
    section_headers: &[
        "EMPLOYMENT VERIFICATION LETTER",
        "EMPLOYEE INFORMATION",
        "EMPLOYMENT DETAILS",
        "COMPANY INFORMATION",
    ],
    line_advance: 20,
};

static INCOME_VERIFICATION: Definition = Definition {
    description: "Employer letter stating salary and compensation",
    fields: &[
        field("date", "[Date]"),
        field("employeeName", "[Employee Name]"),
        field("position", "[Job Title]"),
        field("status", "[Full-time/Part-time]"),
        field("hireDate", "[Date]"),
        field("annualSalary", "[Amount]"),
        field("payFrequency", "[Weekly/Bi-weekly/Monthly]"),
        field("payPerPeriod", "[Amount]"),
        field("bonuses", "[Amount]"),
        field("commission", "[Amount]"),
        field("overtime", "[Amount]"),
        field("otherIncome", "[Amount]"),
        field("totalIncome", "[Total Amount]"),
        field("currentDate", "[Date]"),
        field("hrContact", "[Name]"),
        field("phone", "[Phone]"),
        field("email", "[Email]"),
        field("signerName", "[HR Manager/Supervisor]"),
        field("signerTitle", "[Title]"),
        field("companyName", "[Company Name]"),
    ],
    section_headers: &[
        "INCOME VERIFICATION LETTER",
        "EMPLOYEE INFORMATION",
        "INCOME DETAILS",
        "ADDITIONAL COMPENSATION (if applicable)",
    ],
    line_advance: 20,
};

static W4_WORKSHEET: Definition = Definition {
    description: "Simplified federal withholding worksheet",
    fields: &[
        field("firstName", "[First]"),
        field("lastName", "[Last]"),
        field("ssn", "[XXX-XX-XXXX]"),
        field("address", "[Address]"),
        field("city", "[City]"),
        field("state", "[State]"),
        field("zip", "[ZIP]"),
        field("children", "[Number]"),
        field("otherDependents", "[Number]"),
        field("otherIncome", "[Amount]"),
        field("deductions", "[Amount]"),
        field("extraWithholding", "[Amount]"),
        field("employerName", "[Company Name]"),
        field("ein", "[XX-XXXXXXX]"),
    ],
    section_headers: &[
        "Form W-4 Worksheet",
        "EMPLOYEE INFORMATION",
        "FILING STATUS",
        "MULTIPLE JOBS OR SPOUSE WORKS",
        "CLAIM DEPENDENTS",
        "OTHER ADJUSTMENTS",
        "EMPLOYER USE ONLY",
    ],
    line_advance: 18,
};

// Tax documents

static RENTAL_INCOME_REPORT: Definition = Definition {
    description: "Annual rental income and expense summary",
    fields: &[
        field("taxYear", "[Year]"),
        field("reportDate", "[Date]"),
        field("ownerName", "[Name]"),
        field("taxId", "[XXX-XX-XXXX]"),
        field("ownerAddress", "[Address]"),
        field("propertyAddress", "[Address]"),
        field("propertyType", "[Single-family/Multi-unit]"),
        field("units", "[Number]"),
        field("totalRent", "[Amount]"),
        field("depositsRetained", "[Amount]"),
        field("otherIncome", "[Amount]"),
        field("totalIncome", "[Total]"),
        field("mortgageInterest", "[Amount]"),
        field("propertyTax", "[Amount]"),
        field("insurance", "[Amount]"),
        field("repairs", "[Amount]"),
        field("utilities", "[Amount]"),
        field("managementFees", "[Amount]"),
        field("hoaFees", "[Amount]"),
        field("otherExpenses", "[Amount]"),
        field("totalExpenses", "[Total]"),
        field("depreciation", "[Amount]"),
        field("netIncome", "[Amount]"),
    ],
    section_headers: &[
        "RENTAL INCOME REPORT",
        "PROPERTY OWNER INFORMATION",
        "RENTAL PROPERTY",
        "RENTAL INCOME",
        "RENTAL EXPENSES",
        "DEPRECIATION",
    ],
    line_advance: 18,
};

static PROPERTY_TAX_ESTIMATE: Definition = Definition {
    description: "Estimated annual property tax from assessed value and rates",
    fields: &[
        field("date", "[Date]"),
        field("taxYear", "[Year]"),
        field("propertyAddress", "[Address]"),
        field("parcelNumber", "[Parcel ID]"),
        field("county", "[County]"),
        field("assessedValue", "[Amount]"),
        field("marketValue", "[Amount]"),
        field("assessmentRatio", "[Percentage]"),
        field("countyRate", "[Rate]"),
        field("cityRate", "[Rate]"),
        field("schoolRate", "[Rate]"),
        field("specialRate", "[Rate]"),
        field("totalRate", "[Rate]"),
        field("countyTax", "[Amount]"),
        field("cityTax", "[Amount]"),
        field("schoolTax", "[Amount]"),
        field("specialTax", "[Amount]"),
        field("totalTax", "[Total]"),
        field("monthlyEscrow", "[Amount]"),
        field("dueDate1", "[Date]"),
        field("payment1", "[Amount]"),
        field("dueDate2", "[Date]"),
        field("payment2", "[Amount]"),
    ],
    section_headers: &[
        "PROPERTY TAX ESTIMATE",
        "PROPERTY INFORMATION",
        "ASSESSMENT",
        "TAX RATES (per $1,000 of assessed value)",
        "ESTIMATED TAX BREAKDOWN",
        "PAYMENT SCHEDULE",
    ],
    line_advance: 18,
};

// Other legal documents

static POWER_OF_ATTORNEY: Definition = Definition {
    description: "General power of attorney with witness and notary blocks",
    fields: &[
        field("principalName", "[Your Full Name]"),
        field("principalAddress", "[Address]"),
        field("principalDOB", "[Date]"),
        field("agentName", "[Agent Full Name]"),
        field("agentAddress", "[Address]"),
        field("agentPhone", "[Phone]"),
        field("otherPowers", ""),
        field("effectiveDate", "[Date]"),
        field("terminationDate", "[Date]"),
        field("limitations", "[Any restrictions]"),
    ],
    section_headers: &[
        "POWER OF ATTORNEY",
        "PRINCIPAL (Person Granting Power)",
        "ATTORNEY-IN-FACT (Person Receiving Power)",
        "GRANT OF AUTHORITY",
        "EFFECTIVE DATE",
        "TERMINATION",
        "LIMITATIONS",
        "PRINCIPAL'S SIGNATURE",
        "WITNESS 1",
        "WITNESS 2",
        "NOTARY PUBLIC",
    ],
    line_advance: 18,
};

static LEASE_TERMINATION: Definition = Definition {
    description: "Mutual agreement to end a lease early",
    fields: &[
        field("date", "[Date]"),
        field("landlordName", "[Landlord Name]"),
        field("tenantName", "[Tenant Name]"),
        field("propertyAddress", "[Property Address]"),
        field("leaseStartDate", "[Date]"),
        field("leaseEndDate", "[Date]"),
        field("terminationDate", "[Date]"),
        field("reason", "[Reason]"),
        field("depositHeld", "[Amount]"),
        field("depositReturn", "[Amount]"),
        field("deductions", "[Amount]"),
        field("terminationFee", "[Amount]"),
        field("outstandingRent", "[Amount]"),
        field("moveOutDate", "[Date]"),
        field("inspectionDate", "[Date]"),
    ],
    section_headers: &[
        "MUTUAL LEASE TERMINATION AGREEMENT",
        "PARTIES",
        "PROPERTY",
        "ORIGINAL LEASE",
        "TERMINATION TERMS",
        "FINANCIAL SETTLEMENT",
        "MOVE-OUT CONDITIONS",
        "MUTUAL RELEASE",
        "SIGNATURES",
    ],
    line_advance: 18,
};

static REPAIR_REQUEST: Definition = Definition {
    description: "Itemized repair request with urgency and access permission",
    fields: &[
        field("date", "[Date]"),
        field("requestNumber", "[Request Number]"),
        field("tenantName", "[Tenant Name]"),
        field("propertyAddress", "[Address]"),
        field("unit", "[Unit #]"),
        field("phone", "[Phone]"),
        field("email", "[Email]"),
        field("contactTime", "[Morning/Afternoon/Evening]"),
        field("area", "[Kitchen/Bathroom/Bedroom/Living Room/Other]"),
        field("item", "[Appliance/Plumbing/Electrical/HVAC/Other]"),
        field("description", "[Detailed description of the problem]"),
        field("problemStart", "[Date/Time]"),
        field("worsened", "[Yes/No]"),
        field("previousRepairs", "[Yes/No]"),
    ],
    section_headers: &[
        "REPAIR REQUEST FORM",
        "TENANT INFORMATION",
        "REPAIR DETAILS",
        "URGENCY LEVEL",
        "ADDITIONAL INFORMATION",
        "ACCESS PERMISSION",
        "LANDLORD/PROPERTY MANAGER USE",
    ],
    line_advance: 18,
};
