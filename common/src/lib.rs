//! Shared model and workflow logic for the document verification client.
//!
//! Everything in this crate is platform independent: the browser shell in
//! `frontend` owns rendering and network I/O, while this crate owns the data
//! shapes exchanged with the backend and the reducer that drives the
//! upload → review → eligibility flow.

pub mod error;
pub mod model;
pub mod requests;
pub mod responses;
pub mod workflow;
