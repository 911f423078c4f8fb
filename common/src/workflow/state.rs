use crate::error::WorkflowError;
use crate::model::document::{DocType, DocumentRecord, ExtractedFields, FieldMap};
use crate::model::eligibility::{BandInputs, EligibilityResult};

use super::edit_buffer::EditBuffer;
use super::messages::Notice;

/// A file picked for upload, with the metadata shown next to the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSelection<F> {
    pub file: F,
    pub name: String,
    pub size: u64,
}

/// Coarse position in the document lifecycle, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Selected,
    Uploading,
    Reviewing,
    Saving,
    CheckingEligibility,
}

/// The document currently under review.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub record: DocumentRecord,
    /// Committed extracted payload, `None` when the backend found nothing.
    pub extracted: Option<FieldMap>,
    pub buffer: EditBuffer,
    pub editing: bool,
}

impl Review {
    pub fn new(record: DocumentRecord, extracted: Option<FieldMap>) -> Self {
        let buffer = EditBuffer::from_committed(extracted.as_ref());
        Self {
            record,
            extracted,
            buffer,
            editing: false,
        }
    }

    /// Replaces the committed record with one returned by a save and resets
    /// the draft to match it.
    pub fn commit(&mut self, record: DocumentRecord) {
        self.extracted = record.extracted_data.clone();
        self.buffer = EditBuffer::from_committed(self.extracted.as_ref());
        self.record = record;
        self.editing = false;
    }

    pub fn doc_type(&self) -> DocType {
        self.record.doc_type
    }

    pub fn fields(&self) -> Option<ExtractedFields> {
        self.extracted
            .as_ref()
            .map(|map| ExtractedFields::read(self.record.doc_type, map))
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.differs_from(self.extracted.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadStatus {
    /// Generation of the upload in flight. An upload outliving a file
    /// reselection still blocks new uploads until it completes.
    pub in_flight: Option<u64>,
    pub error: Option<WorkflowError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveStatus {
    pub in_flight: bool,
    pub error: Option<WorkflowError>,
    pub success: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EligibilityStatus {
    pub in_flight: bool,
    pub error: Option<WorkflowError>,
    pub result: Option<EligibilityResult>,
}

/// Complete client state of the document workflow.
///
/// Fields are `pub` so the view can render them; all mutation goes through
/// [`super::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState<F> {
    pub doc_type: DocType,
    pub selection: Option<UploadSelection<F>>,
    pub review: Option<Review>,
    /// Band scores are kept across documents.
    pub bands: BandInputs,
    pub upload: UploadStatus,
    pub save: SaveStatus,
    pub eligibility: EligibilityStatus,
    pub(crate) generation: u64,
}

impl<F> Default for WorkflowState<F> {
    fn default() -> Self {
        Self {
            doc_type: DocType::default(),
            selection: None,
            review: None,
            bands: BandInputs::default(),
            upload: UploadStatus::default(),
            save: SaveStatus::default(),
            eligibility: EligibilityStatus::default(),
            generation: 0,
        }
    }
}

impl<F> WorkflowState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation that commands issued right now are tagged with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stage(&self) -> Stage {
        if self.upload.in_flight == Some(self.generation) {
            Stage::Uploading
        } else if self.review.is_some() {
            if self.save.in_flight {
                Stage::Saving
            } else if self.eligibility.in_flight {
                Stage::CheckingEligibility
            } else {
                Stage::Reviewing
            }
        } else if self.selection.is_some() {
            Stage::Selected
        } else {
            Stage::Idle
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.in_flight.is_some()
    }

    pub fn document(&self) -> Option<&DocumentRecord> {
        self.review.as_ref().map(|review| &review.record)
    }

    /// Whether the eligibility section applies to the current document.
    pub fn eligibility_applies(&self) -> bool {
        self.document()
            .is_some_and(|record| record.doc_type == DocType::Academic)
    }
}
