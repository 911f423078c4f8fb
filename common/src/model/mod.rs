pub mod document;
pub mod eligibility;
pub mod fields;
