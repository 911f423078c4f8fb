//! Update function for the document workflow component.
//!
//! Elm-style: every message is turned into a `common::workflow` transition,
//! and any command the reducer returns is executed here. Network commands
//! run as `spawn_local` futures and report back through the component link
//! with the matching `*Finished` message.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::responses::Outcome;
use common::workflow::{self, Command, Notice};

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{reset_file_input, selection_from_file, show_toast};
use super::messages::{Msg, WorkflowMsg};
use super::requests;
use super::state::DocumentWorkflowComponent;

/// Central update function for the component.
///
/// Returns `true` to re-render after a workflow transition, `false` when
/// only the DOM was touched.
pub fn update(
    component: &mut DocumentWorkflowComponent,
    ctx: &Context<DocumentWorkflowComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Workflow(msg) => dispatch(component, ctx, msg),
        Msg::FileChosen(file) => {
            let selection = file.map(selection_from_file);
            dispatch(component, ctx, WorkflowMsg::SelectFile(selection))
        }
        Msg::OpenRecordDialog => {
            open_top_sheet(&component.record_dialog_ref);
            false
        }
        Msg::CloseRecordDialog => {
            close_top_sheet(&component.record_dialog_ref);
            false
        }
    }
}

fn dispatch(
    component: &mut DocumentWorkflowComponent,
    ctx: &Context<DocumentWorkflowComponent>,
    msg: WorkflowMsg,
) -> bool {
    if let WorkflowMsg::UploadFinished { generation, .. }
    | WorkflowMsg::FieldUpdateFinished { generation, .. }
    | WorkflowMsg::EligibilityFinished { generation, .. } = &msg
    {
        if *generation != component.workflow.generation() {
            log!("discarding a response for a document that is no longer current");
        }
    }
    if let Some(command) = workflow::update(&mut component.workflow, msg) {
        execute(component, ctx, command);
    }
    true
}

fn execute(
    component: &DocumentWorkflowComponent,
    ctx: &Context<DocumentWorkflowComponent>,
    command: Command<web_sys::File>,
) {
    let endpoints = &component.endpoints;
    let link = ctx.link().clone();

    match command {
        Command::Notify(notice) => {
            if notice == Notice::Uploaded {
                reset_file_input(&component.file_input_ref);
            }
            show_toast(notice.message());
        }
        Command::Upload {
            generation,
            file,
            file_name,
            doc_type,
        } => {
            let url = endpoints.upload();
            log!(format!("uploading {} as {}", file_name, doc_type));
            spawn_local(async move {
                let outcome = requests::upload(&url, &file, &file_name, doc_type).await;
                report("Upload", &outcome);
                link.send_message(WorkflowMsg::UploadFinished { generation, outcome });
            });
        }
        Command::UpdateFields {
            generation,
            document_id,
            payload,
        } => {
            let url = endpoints.update_extracted(document_id);
            spawn_local(async move {
                let outcome = requests::update_extracted(&url, &payload).await;
                report("Save fields", &outcome);
                link.send_message(WorkflowMsg::FieldUpdateFinished { generation, outcome });
            });
        }
        Command::CheckEligibility {
            generation,
            request,
        } => {
            let url = endpoints.eligibility_check();
            spawn_local(async move {
                let outcome = requests::check_eligibility(&url, &request).await;
                report("Eligibility", &outcome);
                link.send_message(WorkflowMsg::EligibilityFinished { generation, outcome });
            });
        }
    }
}

fn report(operation: &str, outcome: &Outcome) {
    if let Err(failure) = outcome {
        error!(format!("{} error: {:?}", operation, failure));
    }
}
