use common::workflow;
use web_sys::File;

pub type WorkflowMsg = workflow::Msg<File>;

pub enum Msg {
    /// Transition of the document workflow itself.
    Workflow(WorkflowMsg),
    /// The file picker changed; `None` when the user cleared it.
    FileChosen(Option<File>),
    OpenRecordDialog,
    CloseRecordDialog,
}

impl From<WorkflowMsg> for Msg {
    fn from(msg: WorkflowMsg) -> Self {
        Msg::Workflow(msg)
    }
}
