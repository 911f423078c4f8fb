//! Request payloads and endpoint paths for the document API.

use serde::Serialize;

use crate::model::document::{DocType, FieldMap};
use crate::model::eligibility::IeltsScores;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FILE_FIELD: &str = "file";
/// Multipart field carrying the document type tag.
pub const UPLOAD_DOC_TYPE_FIELD: &str = "doc_type";

/// URL builder rooted at the configured API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn upload(&self) -> String {
        format!("{}/documents/upload/", self.base)
    }

    pub fn update_extracted(&self, document_id: u64) -> String {
        format!("{}/documents/{}/update-extracted/", self.base, document_id)
    }

    pub fn eligibility_check(&self) -> String {
        format!("{}/eligibility/check/", self.base)
    }
}

/// Sparse body for `PATCH /documents/{id}/update-extracted/`.
///
/// Only keys on the document type's allow-list that are present in the
/// draft are sent; absent keys are left alone on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldUpdatePayload(FieldMap);

impl FieldUpdatePayload {
    pub fn build(doc_type: DocType, draft: &FieldMap) -> Self {
        let fields = doc_type
            .fields()
            .iter()
            .filter_map(|field| {
                draft
                    .get(field.key)
                    .map(|value| (field.key.to_string(), field.coerce(value)))
            })
            .collect();
        Self(fields)
    }
}

/// Body for `POST /eligibility/check/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityRequest {
    pub document_id: u64,
    pub ielts_scores: IeltsScores,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn draft(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn endpoints_trim_trailing_slash() {
        for base in ["http://localhost:8000/api", "http://localhost:8000/api/"] {
            let endpoints = Endpoints::new(base);
            assert_eq!(endpoints.upload(), "http://localhost:8000/api/documents/upload/");
            assert_eq!(
                endpoints.update_extracted(42),
                "http://localhost:8000/api/documents/42/update-extracted/"
            );
            assert_eq!(
                endpoints.eligibility_check(),
                "http://localhost:8000/api/eligibility/check/"
            );
        }
    }

    #[test]
    fn financial_payload_uses_financial_allow_list() {
        let payload = FieldUpdatePayload::build(
            DocType::Financial,
            &draft(json!({
                "bank_name": "State Bank",
                "available_balance": "1500.25",
                "student_name": "not for this type",
                "date": ""
            })),
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "bank_name": "State Bank", "available_balance": 1500.25, "date": "" })
        );
    }

    #[test]
    fn empty_draft_sends_empty_object() {
        let payload = FieldUpdatePayload::build(DocType::Academic, &FieldMap::new());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn eligibility_body_shape() {
        let request = EligibilityRequest {
            document_id: 6,
            ielts_scores: IeltsScores { listening: 8.0, reading: 8.5, writing: 8.0, speaking: 7.5 },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "document_id": 6,
                "ielts_scores": { "listening": 8.0, "reading": 8.5, "writing": 8.0, "speaking": 7.5 }
            })
        );
    }
}
