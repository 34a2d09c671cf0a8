//! Router configuration
//!
//! `/workflow` opens an empty editor; `/workflow/:id` loads a saved one.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Editor, NotFound, WorkflowList};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const WORKFLOWS: &str = "/workflows";
    pub const NEW_WORKFLOW: &str = "/workflow";

    /// Path of the editor for a saved workflow
    #[must_use]
    pub fn workflow(id: &str) -> String {
        format!("{NEW_WORKFLOW}/{id}")
    }
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=WorkflowList />
                <Route path=StaticSegment("workflows") view=WorkflowList />
                <Route path=StaticSegment("workflow") view=Editor />
                <Route path=(StaticSegment("workflow"), ParamSegment("id")) view=Editor />
            </Routes>
        </Router>
    }
}
