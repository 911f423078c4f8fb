//! Properties for the `DocumentWorkflowComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DocumentWorkflowProps {
    /// Overrides the API base URL baked in at build time. Read once, when
    /// the component is created.
    #[prop_or_default]
    pub api_base_url: Option<AttrValue>,
}
