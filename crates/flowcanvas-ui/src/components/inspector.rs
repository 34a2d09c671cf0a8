//! Configuration modal for one component.
//!
//! Edits go to the inspector's scratch copy; Save commits title and
//! configuration together, Cancel throws the scratch away. Widgets echo the
//! raw text typed into them, so clearing a number field leaves it empty.

use flowcanvas_core::{ConfigField, EditorSession, FieldView, FieldWidget};
use leptos::prelude::*;
use web_sys::{Event, MouseEvent};

fn edit_field(session: RwSignal<EditorSession>, field: ConfigField, raw: &str) {
    session.update(|s| {
        if let Err(err) = s.inspector_mut().edit_config_field(field, raw) {
            tracing::warn!(error = %err, "Rejected inspector input");
        }
    });
}

#[component]
fn FieldRow(row: FieldView, session: RwSignal<EditorSession>) -> impl IntoView {
    let field = row.field;
    let value = Memo::new(move |_| {
        session.with(|s| {
            s.inspector()
                .scratch()
                .and_then(|scratch| scratch.field_text(field))
                .unwrap_or_default()
        })
    });
    let on_change = move |event: Event| edit_field(session, field, &event_target_value(&event));

    let input_style = "width: 100%; padding: 6px 8px; border: 1px solid #cbd5e1; border-radius: 4px; box-sizing: border-box;";

    let widget = match row.widget {
        FieldWidget::Select(options) => view! {
            <select style=input_style on:change=on_change>
                {options
                    .iter()
                    .map(|&(wire, label)| {
                        view! {
                            <option value=wire prop:selected=move || value.get() == wire>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldWidget::Text => view! {
            <input type="text" style=input_style prop:value=move || value.get() on:input=on_change />
        }
        .into_any(),
        FieldWidget::Number => view! {
            <input
                type="number"
                min="0"
                style=input_style
                prop:value=move || value.get()
                on:input=on_change
            />
        }
        .into_any(),
    };

    view! {
        <label style="display: block; margin-bottom: 12px; font-size: 13px; color: #334155;">
            <span style="display: block; margin-bottom: 4px;">{row.label}</span>
            {widget}
        </label>
    }
}

#[component]
pub fn InspectorModal(session: RwSignal<EditorSession>) -> impl IntoView {
    let is_open = Memo::new(move |_| session.with(|s| s.inspector().is_open()));
    let heading = Memo::new(move |_| {
        session.with(|s| {
            s.inspector()
                .scratch()
                .map(|scratch| format!("Configure {} component", scratch.kind()))
                .unwrap_or_default()
        })
    });
    let title = Memo::new(move |_| {
        session.with(|s| {
            s.inspector()
                .scratch()
                .map(|scratch| scratch.title.clone())
                .unwrap_or_default()
        })
    });
    let fields = move || session.with(|s| s.inspector().fields());

    let on_title = move |event: Event| {
        let next = event_target_value(&event);
        session.update(|s| {
            if let Err(err) = s.inspector_mut().edit_title(next) {
                tracing::warn!(error = %err, "Title edit without an open inspector");
            }
        });
    };

    let on_save = move |_: MouseEvent| {
        session.update(|s| match s.commit_inspector() {
            Ok(written) => tracing::debug!(written, "Inspector committed"),
            Err(err) => tracing::warn!(error = %err, "Inspector commit failed"),
        });
    };

    let on_cancel = move |_: MouseEvent| session.update(EditorSession::discard_inspector);

    view! {
        <Show when=move || is_open.get()>
            <div
                class="inspector-backdrop"
                style="position: fixed; inset: 0; z-index: 1000; display: flex; align-items: center; justify-content: center; background: rgba(15,23,42,0.4);"
            >
                <div
                    class="inspector-modal"
                    style="background: white; padding: 20px; border-radius: 8px; width: min(360px, 90vw); box-shadow: 0 4px 6px rgba(0,0,0,0.1);"
                >
                    <h3 style="margin-top: 0; text-transform: capitalize;">{move || heading.get()}</h3>
                    <label style="display: block; margin-bottom: 12px; font-size: 13px; color: #334155;">
                        <span style="display: block; margin-bottom: 4px;">"Title"</span>
                        <input
                            type="text"
                            style="width: 100%; padding: 6px 8px; border: 1px solid #cbd5e1; border-radius: 4px; box-sizing: border-box;"
                            prop:value=move || title.get()
                            on:input=on_title
                        />
                    </label>
                    <For each=fields key=|row| row.field let:row>
                        <FieldRow row=row session=session />
                    </For>
                    <div style="display: flex; justify-content: flex-end; gap: 8px;">
                        <button
                            style="background-color: #6b7280; color: white; padding: 8px 16px; border: none; border-radius: 4px; cursor: pointer;"
                            on:click=on_cancel
                        >
                            "Cancel"
                        </button>
                        <button
                            style="background-color: #3b82f6; color: white; padding: 8px 16px; border: none; border-radius: 4px; cursor: pointer;"
                            on:click=on_save
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspector_component_exists() {
        let _component = InspectorModal;
    }
}
