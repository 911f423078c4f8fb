//! Full-screen sheet that slides in over the page.
//!
//! Visibility is driven by the `show` CSS class so the transition defined in
//! `index.html` can run; callers toggle it with [`open_top_sheet`] and
//! [`close_top_sheet`] through the sheet's `NodeRef`.

use gloo_console::error;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, false);
}

/// Applies the class change on the next tick so a freshly rendered sheet
/// still animates in.
fn toggle(top_sheet_ref: &NodeRef, show: bool) {
    let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() else {
        return;
    };
    Timeout::new(50, move || {
        let classes = top_sheet.class_list();
        let toggled = if show {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
        if let Err(err) = toggled {
            error!("failed to toggle top sheet", err);
        }
    })
    .forget();
}
