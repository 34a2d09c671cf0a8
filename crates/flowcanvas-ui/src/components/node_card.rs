//! A component card with its anchor dots.

use flowcanvas_core::geometry::anchor_point_at;
use flowcanvas_core::{
    AnchorKind, ConfigField, DragPayload, EditorSession, InputMode, NodeFootprint, NodeId,
    PointerTarget, Position, WorkflowComponent,
};
use leptos::prelude::*;
use web_sys::{DragEvent, MouseEvent, TouchEvent};

use crate::components::palette::TRANSFER_FORMAT;
use crate::input::touch_point;

const ARMED_COLOR: &str = "#3b82f6";

/// Fill of an anchor dot; the armed source anchor is highlighted
#[must_use]
pub const fn anchor_color(anchor: AnchorKind, armed: bool) -> &'static str {
    if armed {
        return ARMED_COLOR;
    }
    match anchor {
        AnchorKind::Input => "#10b981",
        AnchorKind::Output => "#f59e0b",
        AnchorKind::Top => "#8b5cf6",
        AnchorKind::Bottom => "#ef4444",
        AnchorKind::Center => "#64748b",
    }
}

/// One-line summary of the card's configuration, e.g. `Delay (ms): 1000`
#[must_use]
pub fn config_summary(component: &WorkflowComponent) -> String {
    ConfigField::for_kind(component.kind())
        .iter()
        .filter_map(|field| {
            component
                .config()
                .field_value(*field)
                .filter(|value| !value.is_empty())
                .map(|value| format!("{}: {value}", field.label()))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

fn card_style(
    component: &WorkflowComponent,
    footprint: NodeFootprint,
    lifted: bool,
    armed: bool,
) -> String {
    let Position { x, y } = component.position();
    let opacity = if lifted { 0.5 } else { 1.0 };
    let outline = if armed {
        format!("outline: 3px solid {ARMED_COLOR};")
    } else {
        String::new()
    };
    format!(
        "position: absolute; left: {x}px; top: {y}px; width: {}px; height: {}px; box-sizing: border-box; background: white; border: 1px solid #e2e8f0; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.08); opacity: {opacity}; user-select: none; touch-action: none; {outline}",
        footprint.width, footprint.height,
    )
}

fn button_style() -> &'static str {
    "background: none; border: none; cursor: pointer; padding: 2px 4px; font-size: 14px;"
}

#[component]
fn AnchorDot(id: StoredValue<NodeId>, anchor: AnchorKind, session: RwSignal<EditorSession>) -> impl IntoView {
    let style = move || {
        session.with(|s| {
            let footprint = s.config().footprint;
            let radius = s.config().anchor_radius;
            let center = anchor_point_at(Position::origin(), anchor, footprint);
            let armed = s
                .connect()
                .armed()
                .is_some_and(|source| source.node == id.get_value() && source.anchor == anchor);
            format!(
                "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; box-sizing: border-box; border-radius: 50%; border: 2px solid white; background: {}; cursor: crosshair; z-index: 2;",
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
                anchor_color(anchor, armed),
            )
        })
    };

    let on_click = move |event: MouseEvent| {
        event.stop_propagation();
        session.update(|s| {
            let outcome = s.anchor_clicked(id.get_value(), anchor);
            tracing::debug!(?outcome, %anchor, "Anchor clicked");
        });
    };

    let on_touchstart = move |event: TouchEvent| {
        event.stop_propagation();
        let Some(point) = touch_point(&event) else {
            return;
        };
        let prevent = session
            .try_update(|s| s.touch_start(point, PointerTarget::Anchor(id.get_value(), anchor)))
            .unwrap_or(false);
        if prevent {
            // Stops the synthetic click from firing a second time
            event.prevent_default();
        }
    };

    view! {
        <div
            class="anchor"
            title=anchor.title()
            style=style
            draggable="false"
            on:mousedown=|event: MouseEvent| event.stop_propagation()
            on:click=on_click
            on:touchstart=on_touchstart
        />
    }
}

#[component]
pub fn NodeCard(id: NodeId, session: RwSignal<EditorSession>) -> impl IntoView {
    let id = StoredValue::new(id);

    let component = Memo::new(move |_| session.with(|s| s.component(&id.get_value()).cloned()));
    let lifted = Memo::new(move |_| session.with(|s| s.is_lifted(&id.get_value())));
    let armed = Memo::new(move |_| session.with(|s| s.is_armed_source(&id.get_value())));
    let interactive = Memo::new(move |_| session.with(|s| s.anchors_interactive(&id.get_value())));
    let touch = move || session.with(|s| s.input_mode() == InputMode::Touch);

    let on_dragstart = move |event: DragEvent| {
        if let Some(transfer) = event.data_transfer() {
            let payload = DragPayload::Existing(id.get_value()).encode();
            if transfer.set_data(TRANSFER_FORMAT, &payload).is_err() {
                tracing::debug!("Drag payload could not be attached");
            }
        }
        session.update(|s| s.node_drag_start(id.get_value()));
    };

    let on_dragend = move |_: DragEvent| session.update(EditorSession::drag_end);

    let on_touchstart = move |event: TouchEvent| {
        if !session.with_untracked(|s| s.input_mode() == InputMode::Touch) {
            return;
        }
        let Some(point) = touch_point(&event) else {
            return;
        };
        session.update(|s| {
            s.touch_start(point, PointerTarget::Node(id.get_value()));
        });
    };

    let on_configure = move |event: MouseEvent| {
        event.stop_propagation();
        session.update(|s| {
            s.open_inspector(&id.get_value());
        });
    };

    let on_remove = move |event: MouseEvent| {
        event.stop_propagation();
        session.update(|s| {
            s.remove_node(&id.get_value());
        });
    };

    let anchors = move || {
        AnchorKind::ALL
            .into_iter()
            .map(|anchor| {
                view! {
                    <Show when=move || interactive.get()>
                        <AnchorDot id=id anchor=anchor session=session />
                    </Show>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || component.with(Option::is_some)>
            <div
                class="workflow-node"
                draggable=move || if touch() { "false" } else { "true" }
                style=move || {
                    let (lifted, armed) = (lifted.get(), armed.get());
                    let footprint = session.with(|s| s.config().footprint);
                    component
                        .with(|current| current.as_ref().map(|c| card_style(c, footprint, lifted, armed)))
                        .unwrap_or_default()
                }
                on:dragstart=on_dragstart
                on:dragend=on_dragend
                on:mouseenter=move |_: MouseEvent| session.update(|s| s.hover_enter(id.get_value()))
                on:mouseleave=move |_: MouseEvent| session.update(|s| s.hover_leave(&id.get_value()))
                on:touchstart=on_touchstart
            >
                <div
                    class="node-header"
                    style=move || {
                        let color = component
                            .with(|c| c.as_ref().map(|c| c.color().to_string()))
                            .unwrap_or_default();
                        format!(
                            "display: flex; align-items: center; gap: 6px; padding: 6px 8px; border-radius: 8px 8px 0 0; color: white; background: {color};"
                        )
                    }
                >
                    <span>{move || component.with(|c| c.as_ref().map(|c| c.icon().to_string()))}</span>
                    <span style="flex: 1; font-weight: 600; font-size: 13px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {move || component.with(|c| c.as_ref().map(|c| c.title().to_string()))}
                    </span>
                    <button
                        title="Configure"
                        style=button_style()
                        on:mousedown=|event: MouseEvent| event.stop_propagation()
                        on:touchstart=|event: TouchEvent| event.stop_propagation()
                        on:click=on_configure
                    >
                        "⚙"
                    </button>
                    <button
                        title="Delete"
                        style=button_style()
                        on:mousedown=|event: MouseEvent| event.stop_propagation()
                        on:touchstart=|event: TouchEvent| event.stop_propagation()
                        on:click=on_remove
                    >
                        "✕"
                    </button>
                </div>
                <div class="node-body" style="padding: 6px 8px; font-size: 11px; color: #475569;">
                    <div style="text-transform: capitalize;">
                        {move || component.with(|c| c.as_ref().map(|c| c.kind().to_string()))}
                    </div>
                    <div style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {move || component.with(|c| c.as_ref().map(config_summary))}
                    </div>
                </div>
                {anchors()}
            </div>
        </Show>
    }
}
