//! Workflow editor page.
//!
//! Owns the [`EditorSession`] for one workflow, loads it when the route
//! carries an id, and hosts the toolbar, palette, canvas and inspector.
//! Touch moves and releases are handled here rather than on the canvas so
//! a palette drag that starts outside the canvas can still land on it.

use flowcanvas_core::{
    DropOutcome, EditorSession, InputMode, LoadState, Notice, PersistenceError, WorkflowId,
    WorkflowRepository,
};
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use web_sys::TouchEvent;

use crate::app::app_context;
use crate::components::{Canvas, InspectorModal, Palette};
use crate::download::download_snapshot;
use crate::input::{element_rect, released_touch_point, touch_point, viewport_profile};
use crate::router::routes;

const NOTICE_MS: u32 = 3_000;

const BUTTON_STYLE: &str = "color: white; padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;";

/// Name to use for a first save: the current one, or whatever the user
/// types into the prompt. `None` if the prompt is dismissed.
fn name_for_first_save(current: &str) -> Option<String> {
    if !current.trim().is_empty() {
        return Some(current.to_string());
    }
    web_sys::window()?
        .prompt_with_message("Name this workflow")
        .ok()
        .flatten()
        .map(|name| name.trim().to_string())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Style of the notice banner
fn notice_style(notice: &Notice) -> String {
    let background = if notice.is_failure() {
        "#dc2626"
    } else {
        "#16a34a"
    };
    format!(
        "position: fixed; top: 16px; right: 16px; z-index: 2000; padding: 10px 16px; border-radius: 4px; color: white; background: {background};"
    )
}

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let session = RwSignal::new(EditorSession::new(ctx.config.editor));
    let notice = RwSignal::new(None::<Notice>);
    let canvas_ref = NodeRef::<leptos::html::Div>::new();

    let show_notice = move |next: Notice| {
        let _ = notice.try_set(Some(next));
        Timeout::new(NOTICE_MS, move || {
            let _ = notice.try_set(None);
        })
        .forget();
    };

    // Initial load
    let route_id = params.with_untracked(|p| p.get("id"));
    match route_id.map(WorkflowId::new) {
        Some(Ok(id)) => {
            session.update(EditorSession::begin_loading);
            let repository = ctx.repository.clone();
            spawn_local(async move {
                let result = repository.load(&id).await;
                let _ = session.try_update(|s| match result {
                    Ok(snapshot) => s.load_snapshot(Some(id), snapshot),
                    Err(err) => s.load_failed(err.to_string()),
                });
            });
        }
        Some(Err(err)) => session.update(|s| s.load_failed(err.to_string())),
        None => {}
    }

    // Input mode follows the viewport
    let detect_input_mode = move || {
        let (width, coarse) = viewport_profile();
        let _ = session.try_update(|s| s.detect_input_mode(width, coarse));
    };
    detect_input_mode();
    let resize = window_event_listener(ev::resize, move |_| detect_input_mode());
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            let _ = session.try_update(EditorSession::cancel_connection);
        }
    });
    on_cleanup(move || {
        resize.remove();
        keydown.remove();
    });

    let is_touch = move || session.with_untracked(|s| s.input_mode() == InputMode::Touch);

    let on_touchmove = move |event: TouchEvent| {
        if !is_touch() || !session.with_untracked(EditorSession::gesture_active) {
            return;
        }
        let Some(point) = touch_point(&event) else {
            return;
        };
        if session.try_update(|s| s.touch_move(point)).unwrap_or(false) {
            event.prevent_default();
        }
    };

    let on_touchend = move |event: TouchEvent| {
        if !is_touch() || !session.with_untracked(EditorSession::gesture_active) {
            return;
        }
        let Some(point) = released_touch_point(&event) else {
            return;
        };
        let rect = canvas_ref.get_untracked().map(|el| element_rect(&el));
        let outcome = session.try_update(|s| {
            if let Some(rect) = rect {
                s.set_canvas_rect(rect);
            }
            s.touch_end(point)
        });
        if let Some(outcome @ (DropOutcome::Created(_) | DropOutcome::Moved(_))) = outcome {
            tracing::debug!(?outcome, "Touch drop");
        }
    };

    // Toolbar actions
    let on_name_input = move |event: web_sys::Event| {
        let name = event_target_value(&event);
        session.update(|s| s.set_name(name));
    };

    let rename_repository = ctx.repository.clone();
    let on_name_blur = move |_| {
        let (id, name) = session.with_untracked(|s| (s.workflow_id().cloned(), s.name().to_string()));
        let Some(id) = id else {
            return;
        };
        let repository = rename_repository.clone();
        spawn_local(async move {
            if let Err(err) = repository.rename(&id, &name).await {
                tracing::warn!(error = %err, workflow = %id, "Rename failed");
                show_notice(Notice::Failure("Failed to rename workflow".to_string()));
            }
        });
    };

    let save_repository = ctx.repository.clone();
    let save_navigate = navigate.clone();
    let on_save = move |_| {
        let (id, current_name) =
            session.with_untracked(|s| (s.workflow_id().cloned(), s.name().to_string()));
        if id.is_none() {
            let Some(name) = name_for_first_save(&current_name) else {
                return;
            };
            session.update(|s| s.set_name(name));
        }
        let snapshot = session.with_untracked(EditorSession::snapshot);
        let repository = save_repository.clone();
        let navigate = save_navigate.clone();
        spawn_local(async move {
            let result = repository.save(id.as_ref(), &snapshot).await;
            let message = Notice::saved(&result);
            match result {
                Ok(saved) => {
                    let path = routes::workflow(saved.id.as_str());
                    let first = session.try_update(|s| s.saved(saved)).unwrap_or(false);
                    if first {
                        navigate(&path, Default::default());
                    }
                }
                Err(err) => tracing::warn!(error = %err, "Save failed"),
            }
            show_notice(message);
        });
    };

    let delete_repository = ctx.repository.clone();
    let on_delete = move |_| {
        let Some(id) = session.with_untracked(|s| s.workflow_id().cloned()) else {
            return;
        };
        if !confirm("Are you sure you want to delete this workflow?") {
            return;
        }
        let repository = delete_repository.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result: Result<(), PersistenceError> = repository.delete(&id).await;
            let message = Notice::deleted(&result);
            match result {
                Ok(()) => navigate(routes::WORKFLOWS, Default::default()),
                Err(err) => tracing::warn!(error = %err, workflow = %id, "Delete failed"),
            }
            show_notice(message);
        });
    };

    let on_export = move |_| {
        let snapshot = session.with_untracked(EditorSession::snapshot);
        if let Err(err) = download_snapshot(&snapshot) {
            tracing::warn!(error = %err, "Export failed");
            show_notice(Notice::Failure("Failed to export workflow".to_string()));
        }
    };

    let is_loading = move || session.with(|s| matches!(s.load_state(), LoadState::Loading));
    let load_error = move || {
        session.with(|s| match s.load_state() {
            LoadState::Failed(reason) => Some(reason.clone()),
            LoadState::Ready | LoadState::Loading => None,
        })
    };
    let is_saved = move || session.with(|s| s.workflow_id().is_some());
    let touch_layout = move || session.with(|s| s.input_mode() == InputMode::Touch);

    view! {
        <div
            class="editor-page"
            style="display: flex; flex-direction: column; height: 100%;"
            on:touchmove=on_touchmove
            on:touchend=on_touchend
        >
            <div class="editor-toolbar" style="display: flex; gap: 8px; align-items: center; padding: 8px 16px; border-bottom: 1px solid #e2e8f0; flex-wrap: wrap;">
                <input
                    type="text"
                    placeholder="Untitled workflow"
                    style="padding: 6px 10px; border: 1px solid #cbd5e1; border-radius: 4px; min-width: 200px;"
                    prop:value=move || session.with(|s| s.name().to_string())
                    on:input=on_name_input
                    on:blur=on_name_blur
                />
                <button style=format!("background-color: #3b82f6; {BUTTON_STYLE}") on:click=on_save>
                    "Save"
                </button>
                <button
                    style=format!("background-color: #dc2626; {BUTTON_STYLE}")
                    disabled=move || !is_saved()
                    on:click=on_delete
                >
                    "Delete"
                </button>
                <button style=format!("background-color: #6b7280; {BUTTON_STYLE}") on:click=on_export>
                    "Export"
                </button>
            </div>

            <Show when=move || load_error().is_some()>
                <div class="error-message" style="color: #dc2626; padding: 8px 16px;">
                    {move || load_error().unwrap_or_default()}
                </div>
            </Show>

            <div
                class="editor-body"
                style=move || {
                    if touch_layout() {
                        "flex: 1; min-height: 0; display: flex; flex-direction: column-reverse;"
                    } else {
                        "flex: 1; min-height: 0; display: flex; flex-direction: row;"
                    }
                }
            >
                <Palette session=session />
                <Canvas session=session canvas_ref=canvas_ref />
            </div>

            <InspectorModal session=session />

            <Show when=is_loading>
                <div
                    class="loading-overlay"
                    style="position: fixed; inset: 0; z-index: 3000; display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,0.8);"
                >
                    <p>"Loading workflow..."</p>
                </div>
            </Show>

            {move || {
                notice
                    .get()
                    .map(|current| {
                        view! {
                            <div class="notice" style=notice_style(&current)>
                                {current.message().to_string()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_component_exists() {
        let _component = Editor;
    }

    #[test]
    fn test_notice_style_colours() {
        let ok = notice_style(&Notice::Success("Workflow saved!".to_string()));
        let failed = notice_style(&Notice::Failure("Failed to save workflow".to_string()));
        assert!(ok.contains("#16a34a"));
        assert!(failed.contains("#dc2626"));
    }

    #[test]
    fn test_named_workflow_skips_prompt() {
        assert_eq!(name_for_first_save("Billing"), Some("Billing".to_string()));
    }
}
