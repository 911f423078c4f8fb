use crate::error::WorkflowError;
use crate::model::document::DocType;
use crate::requests::{EligibilityRequest, FieldUpdatePayload};
use crate::responses::{UpdateResponse, UploadResponse};

use super::edit_buffer::EditBuffer;
use super::messages::{Command, Msg, Notice};
use super::state::{EligibilityStatus, Review, SaveStatus, WorkflowState};

/// Applies one event to the workflow state.
///
/// Returns the side effect the event calls for, if any. Local validation
/// failures set the phase's error and return `None`; a submit for an
/// operation that is already in flight is ignored.
pub fn update<F: Clone>(state: &mut WorkflowState<F>, msg: Msg<F>) -> Option<Command<F>> {
    match msg {
        Msg::SelectDocType(doc_type) => {
            state.doc_type = doc_type;
            None
        }
        Msg::SelectFile(selection) => {
            state.generation += 1;
            state.selection = selection;
            state.review = None;
            state.upload.error = None;
            state.save = SaveStatus::default();
            state.eligibility = EligibilityStatus::default();
            None
        }
        Msg::SubmitUpload => submit_upload(state),
        Msg::UploadFinished { generation, outcome } => {
            if state.upload.in_flight == Some(generation) {
                state.upload.in_flight = None;
            }
            if generation != state.generation {
                return None;
            }

            let loaded = match outcome {
                Ok(body) => UploadResponse::decode(body).and_then(UploadResponse::into_loaded),
                Err(failure) => {
                    state.upload.error = Some(WorkflowError::upload(failure));
                    return None;
                }
            };
            let Some(loaded) = loaded else {
                state.upload.error = Some(WorkflowError::UploadRejected);
                return None;
            };

            state.review = Some(Review::new(loaded.record, loaded.extracted));
            state.save = SaveStatus::default();
            Some(Command::Notify(Notice::Uploaded))
        }
        Msg::EditField { key, value } => {
            if let Some(review) = &mut state.review {
                review.buffer.set(&key, value);
                review.editing = true;
            }
            None
        }
        Msg::RevertEdits => {
            if let Some(review) = &mut state.review {
                if review.extracted.is_some() {
                    review.buffer = EditBuffer::from_committed(review.extracted.as_ref());
                    review.editing = true;
                    state.save.error = None;
                    state.save.success = None;
                }
            }
            None
        }
        Msg::SubmitFieldUpdate => submit_field_update(state),
        Msg::FieldUpdateFinished { generation, outcome } => {
            if generation != state.generation {
                return None;
            }
            state.save.in_flight = false;

            let record = match outcome {
                Ok(body) => UpdateResponse::decode(body).and_then(UpdateResponse::into_record),
                Err(failure) => {
                    state.save.error = Some(WorkflowError::save(failure));
                    return None;
                }
            };
            match (record, &mut state.review) {
                (Some(record), Some(review)) => {
                    review.commit(record);
                    state.save.success = Some(Notice::FieldsSaved);
                    Some(Command::Notify(Notice::FieldsSaved))
                }
                (Some(_), None) => None,
                (None, _) => {
                    state.save.error = Some(WorkflowError::UpdateRejected);
                    None
                }
            }
        }
        Msg::SetBandScore { band, value } => {
            state.bands.set(band, value);
            None
        }
        Msg::SubmitEligibilityCheck => submit_eligibility_check(state),
        Msg::EligibilityFinished { generation, outcome } => {
            if generation != state.generation {
                return None;
            }
            state.eligibility.in_flight = false;

            match outcome {
                Ok(body) => match serde_json::from_value(body.clone()) {
                    Ok(result) => state.eligibility.result = Some(result),
                    Err(_) => {
                        state.eligibility.result = None;
                        state.eligibility.error =
                            Some(WorkflowError::EligibilityFailed(body.to_string()));
                    }
                },
                Err(failure) => {
                    state.eligibility.result = None;
                    state.eligibility.error = Some(WorkflowError::eligibility(failure));
                }
            }
            None
        }
    }
}

fn submit_upload<F: Clone>(state: &mut WorkflowState<F>) -> Option<Command<F>> {
    if state.is_uploading() {
        return None;
    }
    let Some(selection) = &state.selection else {
        state.upload.error = Some(WorkflowError::NoFileSelected);
        return None;
    };
    let command = Command::Upload {
        generation: state.generation,
        file: selection.file.clone(),
        file_name: selection.name.clone(),
        doc_type: state.doc_type,
    };

    state.upload.error = None;
    state.upload.in_flight = Some(state.generation);
    state.eligibility.result = None;
    state.save.error = None;
    state.save.success = None;
    if let Some(review) = &mut state.review {
        review.editing = false;
    }
    Some(command)
}

fn submit_field_update<F>(state: &mut WorkflowState<F>) -> Option<Command<F>> {
    if state.save.in_flight {
        return None;
    }
    let Some(review) = &state.review else {
        state.save.error = Some(WorkflowError::NoDocumentToUpdate);
        return None;
    };
    let command = Command::UpdateFields {
        generation: state.generation,
        document_id: review.record.id,
        payload: FieldUpdatePayload::build(review.doc_type(), review.buffer.as_map()),
    };

    state.save.in_flight = true;
    state.save.error = None;
    state.save.success = None;
    Some(command)
}

fn submit_eligibility_check<F>(state: &mut WorkflowState<F>) -> Option<Command<F>> {
    if state.eligibility.in_flight {
        return None;
    }
    let Some((document_id, doc_type)) = state.document().map(|record| (record.id, record.doc_type))
    else {
        state.eligibility.error = Some(WorkflowError::NoAcademicDocument);
        return None;
    };
    if doc_type != DocType::Academic {
        state.eligibility.error = Some(WorkflowError::NotAcademic);
        return None;
    }
    let command = Command::CheckEligibility {
        generation: state.generation,
        request: EligibilityRequest {
            document_id,
            ielts_scores: state.bands.to_scores(),
        },
    };

    state.eligibility.in_flight = true;
    state.eligibility.error = None;
    state.eligibility.result = None;
    Some(command)
}
