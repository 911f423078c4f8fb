//! Per-document-type field catalogue.
//!
//! The catalogue is the single allow-list for a document type: the editable
//! form is rendered from it and the update payload is built from it. Each
//! entry also knows how to coerce a draft value for the wire and how to flag
//! values that look wrong. Those flags are advisory; nothing here refuses a
//! value.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::document::DocType;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}-\d{2}-\d{4}|\d{4}-\d{2}-\d{2})$").expect("date pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    /// Free decimal; `step` is the hint handed to the number input.
    Decimal { step: &'static str },
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub helper: Option<&'static str>,
    /// Text fields that should look like `DD-MM-YYYY` or `YYYY-MM-DD`.
    pub date_like: bool,
}

const fn text(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind: FieldKind::Text,
        min: None,
        max: None,
        helper: None,
        date_like: false,
    }
}

const ACADEMIC: &[FieldSpec] = &[
    text("student_name", "Student Name"),
    text("university", "University / School"),
    text("course", "Course Name"),
    FieldSpec {
        kind: FieldKind::Decimal { step: "0.1" },
        min: Some(0.0),
        max: Some(100.0),
        ..text("percentage", "Percentage")
    },
    FieldSpec {
        kind: FieldKind::Decimal { step: "0.1" },
        min: Some(0.0),
        max: Some(10.0),
        ..text("gpa", "GPA")
    },
    FieldSpec {
        kind: FieldKind::Integer,
        min: Some(1900.0),
        max: Some(2100.0),
        ..text("year_of_passing", "Year of Passing")
    },
];

const FINANCIAL: &[FieldSpec] = &[
    text("bank_name", "Bank Name"),
    text("account_holder", "Account Holder"),
    FieldSpec {
        kind: FieldKind::Decimal { step: "0.01" },
        min: Some(0.0),
        ..text("available_balance", "Available Balance")
    },
    FieldSpec {
        helper: Some("e.g., 01-04-2024 or 2024-04-01"),
        date_like: true,
        ..text("date", "Date")
    },
];

impl DocType {
    /// Editable fields for this document type, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            DocType::Academic => ACADEMIC,
            DocType::Financial => FINANCIAL,
        }
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.key == key)
    }
}

impl FieldSpec {
    pub fn is_numeric(&self) -> bool {
        !matches!(self.kind, FieldKind::Text)
    }

    /// Wire value for a draft entry. Text passes through untouched; numeric
    /// fields become a JSON number or `null` when empty or unparseable.
    pub fn coerce(&self, value: &Value) -> Value {
        match self.kind {
            FieldKind::Text => value.clone(),
            FieldKind::Decimal { .. } => coerce_number(value, false),
            FieldKind::Integer => coerce_number(value, true),
        }
    }

    /// Advisory message for a draft value that is outside the field's
    /// expected shape, or `None` when it looks fine or is empty.
    pub fn warning(&self, value: Option<&Value>) -> Option<String> {
        let raw = input_text(value);
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if !self.is_numeric() {
            if self.date_like && !DATE_PATTERN.is_match(raw) {
                return Some(format!(
                    "{} should look like 01-04-2024 or 2024-04-01",
                    self.label
                ));
            }
            return None;
        }

        let Ok(number) = raw.parse::<f64>() else {
            return Some(format!("{} is not a number and will be sent empty", self.label));
        };
        if self.kind == FieldKind::Integer && number.fract() != 0.0 {
            return Some(format!("{} should be a whole number", self.label));
        }
        range_warning(self.label, number, self.min, self.max)
    }
}

/// Text shown in an input for a draft value: empty for a missing or null
/// value, the string itself for text, and the JSON rendering otherwise.
pub fn input_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

pub(crate) fn range_warning(
    label: &str,
    number: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Option<String> {
    let below = min.is_some_and(|min| number < min);
    let above = max.is_some_and(|max| number > max);
    if !below && !above {
        return None;
    }
    Some(match (min, max) {
        (Some(min), Some(max)) => format!("{} should be between {} and {}", label, min, max),
        (Some(min), None) if min == 0.0 => format!("{} should not be negative", label),
        (Some(min), None) => format!("{} should be at least {}", label, min),
        (None, Some(max)) => format!("{} should be at most {}", label, max),
        (None, None) => unreachable!("a bound was crossed"),
    })
}

fn coerce_number(value: &Value, integral: bool) -> Value {
    let parsed = match value {
        Value::Number(number) if !integral || number.is_i64() || number.is_u64() => {
            return value.clone();
        }
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed.filter(|n| n.is_finite()) {
        Some(n) if integral && n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
            Value::from(n as i64)
        }
        Some(n) => Number::from_f64(n).map_or(Value::Null, Value::Number),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_of(doc_type: DocType, key: &str) -> &'static FieldSpec {
        doc_type.field(key).expect("field exists")
    }

    #[test]
    fn allow_lists_match_backend_serializer() {
        let academic: Vec<_> = DocType::Academic.fields().iter().map(|f| f.key).collect();
        assert_eq!(
            academic,
            ["student_name", "university", "course", "percentage", "gpa", "year_of_passing"]
        );
        let financial: Vec<_> = DocType::Financial.fields().iter().map(|f| f.key).collect();
        assert_eq!(financial, ["bank_name", "account_holder", "available_balance", "date"]);
    }

    #[test]
    fn numeric_coercion() {
        let percentage = field_of(DocType::Academic, "percentage");
        assert_eq!(percentage.coerce(&json!("85.5")), json!(85.5));
        assert_eq!(percentage.coerce(&json!(" 72 ")), json!(72.0));
        assert_eq!(percentage.coerce(&json!("")), Value::Null);
        assert_eq!(percentage.coerce(&Value::Null), Value::Null);
        assert_eq!(percentage.coerce(&json!("eighty")), Value::Null);
        assert_eq!(percentage.coerce(&json!(91)), json!(91));
    }

    #[test]
    fn year_is_sent_as_integer_when_whole() {
        let year = field_of(DocType::Academic, "year_of_passing");
        assert_eq!(year.coerce(&json!("2021")), json!(2021));
        assert_eq!(year.coerce(&json!(2020.0)), json!(2020));
        assert_eq!(year.coerce(&json!("2020.5")), json!(2020.5));
    }

    #[test]
    fn text_passes_through_unchanged() {
        let name = field_of(DocType::Academic, "student_name");
        assert_eq!(name.coerce(&json!("")), json!(""));
        assert_eq!(name.coerce(&Value::Null), Value::Null);
    }

    #[test]
    fn warnings_are_advisory_only() {
        let percentage = field_of(DocType::Academic, "percentage");
        assert_eq!(
            percentage.warning(Some(&json!("120"))).as_deref(),
            Some("Percentage should be between 0 and 100")
        );
        assert_eq!(percentage.coerce(&json!("120")), json!(120.0));
        assert_eq!(percentage.warning(Some(&json!("99.5"))), None);
        assert_eq!(percentage.warning(Some(&json!(""))), None);

        let balance = field_of(DocType::Financial, "available_balance");
        assert_eq!(
            balance.warning(Some(&json!(-4))).as_deref(),
            Some("Available Balance should not be negative")
        );

        let year = field_of(DocType::Academic, "year_of_passing");
        assert_eq!(
            year.warning(Some(&json!("2020.5"))).as_deref(),
            Some("Year of Passing should be a whole number")
        );
    }

    #[test]
    fn date_shape_warning() {
        let date = field_of(DocType::Financial, "date");
        assert_eq!(date.warning(Some(&json!("01-04-2024"))), None);
        assert_eq!(date.warning(Some(&json!("2024-04-01"))), None);
        assert!(date.warning(Some(&json!("April 1st"))).is_some());
    }

    #[test]
    fn input_text_renders_drafts() {
        assert_eq!(input_text(None), "");
        assert_eq!(input_text(Some(&Value::Null)), "");
        assert_eq!(input_text(Some(&json!("B"))), "B");
        assert_eq!(input_text(Some(&json!(85.5))), "85.5");
    }
}
