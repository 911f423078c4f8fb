use common::error::WorkflowError;
use common::model::document::DocType;
use common::responses::RequestFailure;
use common::workflow::{update, Command, Msg, Stage, UploadSelection, WorkflowState};
use serde_json::{json, Value};

type State = WorkflowState<u32>;

fn pick(state: &mut State, handle: u32) {
    let selection = UploadSelection { file: handle, name: format!("doc-{handle}.pdf"), size: 2048 };
    update(state, Msg::SelectFile(Some(selection)));
}

fn upload_with(state: &mut State, body: Value) {
    let command = update(state, Msg::SubmitUpload);
    assert!(matches!(command, Some(Command::Upload { .. })));
    let generation = state.generation();
    update(state, Msg::UploadFinished { generation, outcome: Ok(body) });
}

fn academic_loaded() -> State {
    let mut state = State::new();
    pick(&mut state, 1);
    upload_with(
        &mut state,
        json!({
            "success": true,
            "document": { "id": 1, "doc_type": "academic" },
            "extracted": { "student_name": "A" }
        }),
    );
    state
}

fn save_payload(state: &mut State) -> Value {
    match update(state, Msg::SubmitFieldUpdate) {
        Some(Command::UpdateFields { payload, .. }) => serde_json::to_value(payload).unwrap(),
        other => panic!("expected an update command, got {other:?}"),
    }
}

fn edit(state: &mut State, key: &str, value: &str) {
    update(state, Msg::EditField { key: key.to_string(), value: value.to_string() });
}

#[test]
fn selecting_a_new_file_clears_downstream_state() {
    for doc_type in [DocType::Academic, DocType::Financial] {
        let mut state = State::new();
        update(&mut state, Msg::SelectDocType(doc_type));
        pick(&mut state, 1);
        upload_with(
            &mut state,
            json!({
                "success": true,
                "document": { "id": 4, "doc_type": doc_type.as_str() },
                "extracted": {}
            }),
        );
        assert!(state.review.is_some());

        update(&mut state, Msg::SubmitFieldUpdate);
        let generation = state.generation();
        update(
            &mut state,
            Msg::FieldUpdateFinished { generation, outcome: Err(RequestFailure::Unreachable) },
        );
        update(&mut state, Msg::SubmitEligibilityCheck);
        if doc_type == DocType::Academic {
            update(
                &mut state,
                Msg::EligibilityFinished {
                    generation,
                    outcome: Ok(json!({ "eligible": true, "reasons": [] })),
                },
            );
            assert!(state.eligibility.result.is_some());
        } else {
            assert!(state.eligibility.error.is_some());
        }
        assert!(state.save.error.is_some());

        pick(&mut state, 2);
        assert_eq!(state.stage(), Stage::Selected);
        assert!(state.review.is_none());
        assert!(state.eligibility.result.is_none());
        assert!(state.upload.error.is_none());
        assert!(state.save.error.is_none());
        assert!(state.eligibility.error.is_none());
    }
}

#[test]
fn upload_without_file_makes_no_request() {
    let mut state = State::new();
    assert!(update(&mut state, Msg::SubmitUpload).is_none());
    assert_eq!(state.upload.error, Some(WorkflowError::NoFileSelected));
    assert_eq!(state.stage(), Stage::Idle);
}

#[test]
fn top_level_extracted_payload_populates_fields_and_buffer() {
    let state = academic_loaded();
    let review = state.review.as_ref().unwrap();
    let expected = json!({ "student_name": "A" });
    assert_eq!(Value::Object(review.extracted.clone().unwrap()), expected);
    assert_eq!(Value::Object(review.buffer.as_map().clone()), expected);
    assert!(state.selection.is_some());
}

#[test]
fn extracted_preview_keeps_the_order_received() {
    let body: Value = serde_json::from_str(
        r#"{"success":true,"document":{"id":6,"doc_type":"academic"},
            "extracted":{"student_name":"A","university":"U","percentage":70.5}}"#,
    )
    .unwrap();
    let mut state = State::new();
    pick(&mut state, 1);
    upload_with(&mut state, body);

    let review = state.review.as_ref().unwrap();
    let keys: Vec<_> = review.extracted.as_ref().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["student_name", "university", "percentage"]);
    assert_eq!(
        serde_json::to_string(review.buffer.as_map()).unwrap(),
        r#"{"student_name":"A","university":"U","percentage":70.5}"#
    );
}

#[test]
fn rejected_upload_body_is_shown_in_server_order() {
    let body: Value = serde_json::from_str(r#"{"success":false,"errors":{"file":["required"]}}"#).unwrap();
    let mut state = State::new();
    pick(&mut state, 1);
    update(&mut state, Msg::SubmitUpload);
    let generation = state.generation();
    update(
        &mut state,
        Msg::UploadFinished { generation, outcome: Err(RequestFailure::Rejected(body)) },
    );
    assert_eq!(
        state.upload.error.as_ref().map(ToString::to_string).as_deref(),
        Some(r#"Upload failed: {"success":false,"errors":{"file":["required"]}}"#)
    );
}

#[test]
fn embedded_extracted_data_is_the_fallback() {
    let mut state = State::new();
    update(&mut state, Msg::SelectDocType(DocType::Financial));
    pick(&mut state, 1);
    upload_with(
        &mut state,
        json!({
            "success": true,
            "document": { "id": 2, "doc_type": "financial", "extracted_data": { "bank_name": "X" } }
        }),
    );
    let review = state.review.as_ref().unwrap();
    assert_eq!(Value::Object(review.extracted.clone().unwrap()), json!({ "bank_name": "X" }));
}

#[test]
fn missing_payload_leaves_empty_buffer() {
    let mut state = State::new();
    pick(&mut state, 1);
    upload_with(
        &mut state,
        json!({ "success": true, "document": { "id": 3, "doc_type": "academic" } }),
    );
    let review = state.review.as_ref().unwrap();
    assert!(review.extracted.is_none());
    assert!(review.buffer.as_map().is_empty());
}

#[test]
fn update_payload_is_allow_listed_and_coerced() {
    let mut state = academic_loaded();
    edit(&mut state, "student_name", "B");
    edit(&mut state, "percentage", "85.5");
    edit(&mut state, "extraneousField", "ignored");
    assert_eq!(save_payload(&mut state), json!({ "student_name": "B", "percentage": 85.5 }));
}

#[test]
fn empty_numeric_field_is_sent_as_null() {
    let mut state = academic_loaded();
    edit(&mut state, "percentage", "");
    assert_eq!(save_payload(&mut state), json!({ "student_name": "A", "percentage": null }));
}

#[test]
fn out_of_range_values_pass_through() {
    let mut state = academic_loaded();
    edit(&mut state, "percentage", "140");
    assert_eq!(save_payload(&mut state)["percentage"], json!(140.0));
}

#[test]
fn eligibility_on_financial_document_fails_locally() {
    let mut state = State::new();
    update(&mut state, Msg::SelectDocType(DocType::Financial));
    pick(&mut state, 1);
    upload_with(
        &mut state,
        json!({ "success": true, "document": { "id": 5, "doc_type": "financial" } }),
    );
    assert!(update(&mut state, Msg::SubmitEligibilityCheck).is_none());
    assert_eq!(state.eligibility.error, Some(WorkflowError::NotAcademic));
    assert!(!state.eligibility_applies());
}

#[test]
fn eligibility_result_lists_reasons() {
    let mut state = academic_loaded();
    update(&mut state, Msg::SubmitEligibilityCheck);
    let generation = state.generation();
    update(
        &mut state,
        Msg::EligibilityFinished {
            generation,
            outcome: Ok(json!({ "eligible": false, "reasons": ["Listening below 8.0"] })),
        },
    );
    let result = state.eligibility.result.as_ref().unwrap();
    assert_eq!(result.headline(), "Not Eligible");
    assert_eq!(result.reasons, ["Listening below 8.0"]);
    assert_eq!(state.stage(), Stage::Reviewing);
}

#[test]
fn failed_save_keeps_unsaved_edits_for_retry() {
    let mut state = academic_loaded();
    edit(&mut state, "course", "Physics");
    update(&mut state, Msg::SubmitFieldUpdate);
    let generation = state.generation();
    update(
        &mut state,
        Msg::FieldUpdateFinished { generation, outcome: Ok(json!({ "success": false })) },
    );
    assert_eq!(state.save.error, Some(WorkflowError::UpdateRejected));

    assert_eq!(save_payload(&mut state), json!({ "student_name": "A", "course": "Physics" }));
    assert!(state.save.error.is_none());
}
