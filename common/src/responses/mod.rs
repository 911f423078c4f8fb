//! Response shapes returned by the backend and the classification of raw
//! HTTP outcomes.

use serde::Deserialize;
use serde_json::Value;

use crate::model::document::{DocumentRecord, FieldMap};

/// Why a request produced no usable 2xx body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestFailure {
    /// Non-2xx response that carried a JSON body.
    Rejected(Value),
    /// Network error, or a non-2xx response without a JSON body.
    Unreachable,
}

/// Raw result of one request as handed back to the reducer.
pub type Outcome = Result<Value, RequestFailure>;

/// Classifies a completed HTTP exchange. A 2xx response without a JSON body
/// is passed on as `null` and fails to decode downstream.
pub fn classify(success_status: bool, body: Option<Value>) -> Outcome {
    match (success_status, body) {
        (true, body) => Ok(body.unwrap_or(Value::Null)),
        (false, Some(body)) => Err(RequestFailure::Rejected(body)),
        (false, None) => Err(RequestFailure::Unreachable),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub document: Option<DocumentRecord>,
    #[serde(default)]
    pub extracted: Option<FieldMap>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// A freshly uploaded document together with its extracted payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub record: DocumentRecord,
    pub extracted: Option<FieldMap>,
}

impl UploadResponse {
    pub fn decode(body: Value) -> Option<Self> {
        serde_json::from_value(body).ok()
    }

    /// The uploaded document, if the backend reported success. The payload
    /// prefers the top-level `extracted` object and falls back to the one
    /// embedded in the record. A top-level `confidence` fills in the
    /// record's OCR confidence when the record carries none.
    pub fn into_loaded(self) -> Option<LoadedDocument> {
        if !self.success {
            return None;
        }
        let mut record = self.document?;
        record.ocr_confidence = record.ocr_confidence.or(self.confidence);
        let extracted = self.extracted.or_else(|| record.extracted_data.clone());
        Some(LoadedDocument { record, extracted })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub document: Option<DocumentRecord>,
}

impl UpdateResponse {
    pub fn decode(body: Value) -> Option<Self> {
        serde_json::from_value(body).ok()
    }

    pub fn into_record(self) -> Option<DocumentRecord> {
        if self.success { self.document } else { None }
    }
}
