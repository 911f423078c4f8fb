//! Component state for the document workflow page.
//!
//! The workflow itself lives in `common::workflow::WorkflowState`; this
//! struct adds what only the browser needs: resolved endpoints and DOM refs.

use web_sys::File;
use yew::prelude::*;

use common::requests::Endpoints;
use common::workflow::WorkflowState;

pub struct DocumentWorkflowComponent {
    /// Upload, review and eligibility state, mutated only by
    /// `common::workflow::update`.
    pub workflow: WorkflowState<File>,

    /// URLs of the three backend endpoints.
    pub endpoints: Endpoints,

    /// Reference to the hidden `<input type="file">`.
    pub file_input_ref: NodeRef,

    /// Reference to the top sheet showing the full document record.
    pub record_dialog_ref: NodeRef,
}

impl DocumentWorkflowComponent {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            workflow: WorkflowState::new(),
            endpoints,
            file_input_ref: Default::default(),
            record_dialog_ref: Default::default(),
        }
    }
}
