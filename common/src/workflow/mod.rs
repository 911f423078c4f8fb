//! Upload → review → eligibility state machine.
//!
//! [`WorkflowState`] is the whole client state, [`Msg`] the events that can
//! happen to it, and [`update`] the single reducer. The reducer never
//! performs I/O: when an event needs the network it returns a [`Command`]
//! for the shell to execute, and the shell reports back with the matching
//! `*Finished` message.

mod edit_buffer;
mod messages;
mod state;
mod update;

pub use edit_buffer::EditBuffer;
pub use messages::{Command, Msg, Notice};
pub use state::{
    EligibilityStatus, Review, SaveStatus, Stage, UploadSelection, UploadStatus, WorkflowState,
};
pub use update::update;
