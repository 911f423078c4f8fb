//! Document workflow page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! HTTP effects and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DocumentWorkflowProps`, `DocumentWorkflowComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Resolve the API endpoints once, from props or build-time configuration.

use gloo_console::log;
use yew::prelude::*;

use common::requests::Endpoints;

use crate::config;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod requests;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::DocumentWorkflowProps;
pub use state::DocumentWorkflowComponent;

impl Component for DocumentWorkflowComponent {
    type Message = Msg;
    type Properties = DocumentWorkflowProps;

    fn create(ctx: &Context<Self>) -> Self {
        let base = ctx
            .props()
            .api_base_url
            .as_deref()
            .unwrap_or(config::api_base_url());
        let endpoints = Endpoints::new(base);
        log!(format!("document API at {}", endpoints.base()));
        DocumentWorkflowComponent::new(endpoints)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
