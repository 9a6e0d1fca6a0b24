// ============================================================
// Layer 3 — Field Queries
// ============================================================
// The fixed table of tender fields and the natural-language
// question asked of the Q&A model for each one.
//
// The order of TENDER_FIELDS is the order of keys in the output
// JSON. Field identifiers are unique; a test below enforces it.

use serde::Serialize;

/// A (field identifier, question) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldQuery {
    /// Key used in the output record, e.g. "reference_number"
    pub field: &'static str,

    /// Question handed to the Q&A model for this field
    pub question: &'static str,
}

impl FieldQuery {
    pub const fn new(field: &'static str, question: &'static str) -> Self {
        Self { field, question }
    }
}

/// Number of fields every extraction result carries.
pub const FIELD_COUNT: usize = 24;

pub const TENDER_FIELDS: [FieldQuery; FIELD_COUNT] = [
    // ── Basic information ────────────────────────────────────────────────────
    FieldQuery::new("reference_number", "What is the reference number in the tender?"),
    FieldQuery::new("tender_title", "What is the title of the tender?"),
    FieldQuery::new("issuing_organization", "What is the name of the issuing organization?"),
    FieldQuery::new("contact_email", "What are the contact email addresses?"),
    FieldQuery::new("contact_phone", "What are the contact phone numbers?"),
    // ── Timeline ─────────────────────────────────────────────────────────────
    FieldQuery::new("start_date_for_bid_submissions", "What is the start date for bid submissions?"),
    FieldQuery::new("online_bid_submission_deadline", "What is the deadline for online bid submission?"),
    FieldQuery::new(
        "physical_submission_deadline",
        "What is the deadline for physical submission of tender fee and EMD?",
    ),
    FieldQuery::new("technical_bid_opening_date", "What is the date for opening technical bids online?"),
    // ── Financial ────────────────────────────────────────────────────────────
    FieldQuery::new("tender_fee", "What is the tender fee?"),
    FieldQuery::new("project_scope", "What is the scope of work for the project outlined in the tender?"),
    FieldQuery::new("emd", "What is the Earnest Money Deposit (EMD) amount required ?"),
    FieldQuery::new("exemption_criteria", "What is the exemption criteria for tender fee and EMD?"),
    FieldQuery::new("payment_terms", "What are the payment terms?"),
    // ── Scope, eligibility and technical ─────────────────────────────────────
    FieldQuery::new(
        "materials_required",
        "What materials or resources are required for the project as mentioned in the tender?",
    ),
    FieldQuery::new("site_location", "What is the location or site of the project?"),
    FieldQuery::new("eligibility_criteria", "What are the eligibility criteria for bidders?"),
    FieldQuery::new("technical_specifications", "What are the technical specifications for the equipment?"),
    FieldQuery::new("delivery_time", "What is the delivery time mentioned in the tender?"),
    FieldQuery::new("penalty_details", "What are the penalty details in case of delay?"),
    // ── Evaluation and legal ─────────────────────────────────────────────────
    FieldQuery::new("technical_evaluation_process", "What is the process for technical evaluation?"),
    FieldQuery::new("financial_evaluation_process", "What is the process for financial evaluation?"),
    FieldQuery::new("legal_jurisdiction", "What is the legal jurisdiction for disputes?"),
    FieldQuery::new("arbitration_clause", "What is the arbitration clause for disputes?"),
];
