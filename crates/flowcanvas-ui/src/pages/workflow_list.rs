//! Saved workflow list.

use flowcanvas_core::{WorkflowRepository, WorkflowSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::app_context;
use crate::router::routes;

/// What the list page is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<WorkflowSummary>),
    Failed(String),
}

impl ListState {
    /// Error text shown when the list request fails
    #[must_use]
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed(format!("Failed to load workflows: {reason}"))
    }
}

#[component]
pub fn WorkflowList() -> impl IntoView {
    let ctx = app_context();
    let state = RwSignal::new(ListState::Loading);

    spawn_local(async move {
        let next = match ctx.repository.list().await {
            Ok(workflows) => ListState::Loaded(workflows),
            Err(err) => {
                tracing::warn!(error = %err, "Workflow list request failed");
                ListState::failed(err)
            }
        };
        // The page may have been left before the reply arrived
        let _ = state.try_set(next);
    });

    view! {
        <div class="workflow-list-page" style="padding: 24px; max-width: 720px;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h2>"Workflows"</h2>
                <a
                    href=routes::NEW_WORKFLOW
                    style="background-color: #3b82f6; color: white; padding: 8px 16px; border-radius: 4px; text-decoration: none;"
                >
                    "New Workflow"
                </a>
            </div>
            {move || match state.get() {
                ListState::Loading => view! { <p>"Loading..."</p> }.into_any(),
                ListState::Failed(message) => {
                    view! { <p class="error-message" style="color: #dc2626;">{message}</p> }
                        .into_any()
                }
                ListState::Loaded(workflows) if workflows.is_empty() => {
                    view! { <p>"No workflows yet."</p> }.into_any()
                }
                ListState::Loaded(workflows) => {
                    view! {
                        <ul style="list-style: none; padding: 0;">
                            {workflows
                                .into_iter()
                                .map(|workflow| {
                                    let href = routes::workflow(workflow.id.as_str());
                                    view! {
                                        <li style="padding: 12px; border-bottom: 1px solid #e2e8f0;">
                                            <a href=href>{workflow.display_name()}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
