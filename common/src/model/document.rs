use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Extracted payload as exchanged with the backend: a JSON object whose keys
/// depend on the document type.
pub type FieldMap = Map<String, Value>;

/// File extensions offered by the upload picker. The backend performs the
/// actual validation.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.jpg,.jpeg,.png";

/// Kind of document being uploaded. Serialized as the lowercase tag the
/// backend expects in `doc_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    #[default]
    Academic,
    Financial,
}

impl DocType {
    pub const ALL: [DocType; 2] = [DocType::Academic, DocType::Financial];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Academic => "academic",
            DocType::Financial => "financial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocType::Academic => "Academic",
            DocType::Financial => "Financial",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        DocType::ALL.into_iter().find(|doc_type| doc_type.as_str() == tag)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side representation of an uploaded document.
///
/// Only the update-extracted endpoint produces a new record; the client never
/// edits one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: u64,
    pub doc_type: DocType,
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub extracted_data: Option<FieldMap>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AcademicFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_passing: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Typed view of an extracted payload, keyed by document type.
///
/// Reading is lenient: extraction may leave any field empty or put a value of
/// the wrong JSON type in it, and both read as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "doc_type", rename_all = "lowercase")]
pub enum ExtractedFields {
    Academic(AcademicFields),
    Financial(FinancialFields),
}

impl ExtractedFields {
    pub fn read(doc_type: DocType, map: &FieldMap) -> Self {
        match doc_type {
            DocType::Academic => ExtractedFields::Academic(AcademicFields {
                student_name: text(map, "student_name"),
                university: text(map, "university"),
                course: text(map, "course"),
                percentage: number(map, "percentage"),
                gpa: number(map, "gpa"),
                year_of_passing: integer(map, "year_of_passing"),
            }),
            DocType::Financial => ExtractedFields::Financial(FinancialFields {
                bank_name: text(map, "bank_name"),
                account_holder: text(map, "account_holder"),
                available_balance: number(map, "available_balance"),
                date: text(map, "date"),
            }),
        }
    }

    /// One-line description of who the document belongs to, if extraction
    /// found a name.
    pub fn holder(&self) -> Option<&str> {
        match self {
            ExtractedFields::Academic(fields) => fields.student_name.as_deref(),
            ExtractedFields::Financial(fields) => fields.account_holder.as_deref(),
        }
    }
}

fn text(map: &FieldMap, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn number(map: &FieldMap, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

fn integer(map: &FieldMap, key: &str) -> Option<i64> {
    let value = map.get(key)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0)
            .map(|n| n as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn doc_type_uses_lowercase_wire_tag() {
        assert_eq!(serde_json::to_value(DocType::Financial).unwrap(), json!("financial"));
        assert_eq!(DocType::parse("academic"), Some(DocType::Academic));
        assert_eq!(DocType::parse("medical"), None);
    }

    #[test]
    fn record_tolerates_missing_optional_keys() {
        let record: DocumentRecord =
            serde_json::from_value(json!({ "id": 1, "doc_type": "academic" })).unwrap();
        assert_eq!(record.id, 1);
        assert!(record.original_filename.is_empty());
        assert!(record.extracted_data.is_none());
    }

    #[test]
    fn lenient_read_skips_mistyped_values() {
        let fields = ExtractedFields::read(
            DocType::Academic,
            &map(json!({
                "student_name": "Asha",
                "percentage": "not a number",
                "gpa": 8.2,
                "year_of_passing": 2021.0,
                "error": "partial OCR"
            })),
        );
        let ExtractedFields::Academic(academic) = fields else {
            panic!("expected academic fields");
        };
        assert_eq!(academic.student_name.as_deref(), Some("Asha"));
        assert_eq!(academic.percentage, None);
        assert_eq!(academic.gpa, Some(8.2));
        assert_eq!(academic.year_of_passing, Some(2021));
    }

    #[test]
    fn typed_view_serializes_only_present_fields() {
        let fields = ExtractedFields::read(DocType::Financial, &map(json!({ "bank_name": "X" })));
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "doc_type": "financial", "bank_name": "X" })
        );
        assert_eq!(fields.holder(), None);
    }
}
