use yew::html::Scope;
use yew::prelude::*;

use crate::components::document::{DocumentWorkflowComponent, Msg};
use crate::tops_sheet::top_sheet::TopSheet;

use crate::components::document::helpers::pretty_json;

/// Top sheet showing the complete committed document record as JSON.
pub fn record_dialog(component: &DocumentWorkflowComponent, link: &Scope<DocumentWorkflowComponent>) -> Html {
    let body = match component.workflow.document() {
        Some(record) => html! {
            <pre style="background:#fff;color:#000;padding:16px;border-radius:4px;max-width:80vw;max-height:80vh;overflow:auto;font-size:13px;">
                { pretty_json(record) }
            </pre>
        },
        None => html! { <span style="color:#fff;">{"No document loaded"}</span> },
    };

    html! {
        <TopSheet node_ref={component.record_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={link.callback(|_| Msg::CloseRecordDialog)}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                { body }
            </div>
        </TopSheet>
    }
}
