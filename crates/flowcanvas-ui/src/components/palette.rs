//! Component palette.
//!
//! Desktop: a sidebar of native drag sources. Touch: a bottom bar whose
//! entries start a touch drag that the editor page finishes on release.

use flowcanvas_core::{ComponentTemplate, DragPayload, EditorSession, InputMode, PointerTarget, palette};
use leptos::prelude::*;
use web_sys::{DragEvent, TouchEvent};

use crate::input::touch_point;

/// MIME type carrying the drag payload
pub const TRANSFER_FORMAT: &str = "text/plain";

fn item_style(template: &ComponentTemplate, touch: bool) -> String {
    let layout = if touch {
        "flex: 1; flex-direction: column; padding: 8px; font-size: 12px;"
    } else {
        "padding: 10px 12px; margin-bottom: 8px;"
    };
    format!(
        "display: flex; gap: 8px; align-items: center; background: white; border: 1px solid #e2e8f0; border-left: 4px solid {}; border-radius: 6px; cursor: grab; user-select: none; touch-action: none; {layout}",
        template.color
    )
}

#[component]
pub fn Palette(session: RwSignal<EditorSession>) -> impl IntoView {
    let touch = move || session.with(|s| s.input_mode() == InputMode::Touch);

    let container_style = move || {
        if touch() {
            "display: flex; gap: 8px; padding: 8px; border-top: 1px solid #e2e8f0; background: #f8fafc;"
        } else {
            "width: 200px; padding: 16px; border-right: 1px solid #e2e8f0; background: #f8fafc; overflow-y: auto;"
        }
    };

    let items = palette()
        .into_iter()
        .map(|template| {
            let kind = template.kind;
            let on_dragstart = move |event: DragEvent| {
                if let Some(transfer) = event.data_transfer() {
                    let payload = DragPayload::Palette(template).encode();
                    if transfer.set_data(TRANSFER_FORMAT, &payload).is_err() {
                        tracing::debug!("Drag payload could not be attached");
                    }
                }
                session.update(|s| s.palette_drag_start(kind));
            };
            let on_dragend = move |_: DragEvent| session.update(EditorSession::drag_end);
            let on_touchstart = move |event: TouchEvent| {
                if !session.with_untracked(|s| s.input_mode() == InputMode::Touch) {
                    return;
                }
                if let Some(point) = touch_point(&event) {
                    event.prevent_default();
                    session.update(|s| {
                        s.touch_start(point, PointerTarget::Palette(kind));
                    });
                }
            };
            view! {
                <div
                    class="palette-item"
                    draggable=move || if touch() { "false" } else { "true" }
                    style=move || item_style(&template, touch())
                    on:dragstart=on_dragstart
                    on:dragend=on_dragend
                    on:touchstart=on_touchstart
                >
                    <span style="font-size: 18px;">{template.icon}</span>
                    <span>{template.title}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="component-palette" style=container_style>
            <Show when=move || !touch()>
                <h3 style="margin-top: 0; font-size: 14px; color: #475569;">"Components"</h3>
            </Show>
            {items}
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcanvas_core::ComponentKind;

    #[test]
    fn test_palette_component_exists() {
        let _component = Palette;
    }

    #[test]
    fn test_item_style_uses_template_colour() {
        let template = ComponentTemplate::for_kind(ComponentKind::Input);
        assert!(item_style(&template, false).contains(template.color));
        assert!(item_style(&template, true).contains("flex-direction: column"));
    }
}
