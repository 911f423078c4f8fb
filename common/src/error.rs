//! User-facing failures of the document workflow.
//!
//! Each variant's `Display` text is exactly what the page shows in the alert
//! for its phase.

use thiserror::Error;

use crate::responses::RequestFailure;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("Please choose a file to upload.")]
    NoFileSelected,
    #[error("Upload failed. Please check input and try again.")]
    UploadRejected,
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Upload failed due to a network or server error.")]
    UploadUnreachable,

    #[error("No document loaded to update.")]
    NoDocumentToUpdate,
    #[error("Failed to update fields.")]
    UpdateRejected,
    #[error("Save failed: {0}")]
    SaveFailed(String),
    #[error("Save failed due to a network or server error.")]
    SaveUnreachable,

    #[error("Please upload an academic document first.")]
    NoAcademicDocument,
    #[error("Eligibility check is only applicable to academic documents.")]
    NotAcademic,
    #[error("Eligibility check failed: {0}")]
    EligibilityFailed(String),
    #[error("Eligibility check failed due to a network or server error.")]
    EligibilityUnreachable,
}

impl WorkflowError {
    pub fn upload(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Rejected(body) => WorkflowError::UploadFailed(body.to_string()),
            RequestFailure::Unreachable => WorkflowError::UploadUnreachable,
        }
    }

    pub fn save(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Rejected(body) => WorkflowError::SaveFailed(body.to_string()),
            RequestFailure::Unreachable => WorkflowError::SaveUnreachable,
        }
    }

    pub fn eligibility(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Rejected(body) => WorkflowError::EligibilityFailed(body.to_string()),
            RequestFailure::Unreachable => WorkflowError::EligibilityUnreachable,
        }
    }

}
