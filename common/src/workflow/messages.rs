use crate::model::document::DocType;
use crate::model::eligibility::Band;
use crate::requests::{EligibilityRequest, FieldUpdatePayload};
use crate::responses::Outcome;

use super::state::UploadSelection;

/// Events fed into [`super::update`]. `F` is the platform's file handle.
///
/// `*Finished` messages carry the generation their command was issued under
/// so that completions for a document the user has moved away from can be
/// recognised.
#[derive(Debug, Clone)]
pub enum Msg<F> {
    SelectDocType(DocType),
    SelectFile(Option<UploadSelection<F>>),
    SubmitUpload,
    UploadFinished { generation: u64, outcome: Outcome },
    EditField { key: String, value: String },
    RevertEdits,
    SubmitFieldUpdate,
    FieldUpdateFinished { generation: u64, outcome: Outcome },
    SetBandScore { band: Band, value: String },
    SubmitEligibilityCheck,
    EligibilityFinished { generation: u64, outcome: Outcome },
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    Upload {
        generation: u64,
        file: F,
        file_name: String,
        doc_type: DocType,
    },
    UpdateFields {
        generation: u64,
        document_id: u64,
        payload: FieldUpdatePayload,
    },
    CheckEligibility {
        generation: u64,
        request: EligibilityRequest,
    },
    Notify(Notice),
}

/// Transient confirmations shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Uploaded,
    FieldsSaved,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Uploaded => "Document uploaded.",
            Notice::FieldsSaved => "Fields updated successfully.",
        }
    }
}
