//! The workflow canvas.
//!
//! Renders component cards over an SVG layer holding the connections and
//! the rubber-band line. Mouse pans and drops are handled here; touch moves
//! and releases bubble to the editor page.

use flowcanvas_core::{EdgeLine, EditorSession, InputMode, LineSegment, PointerTarget};
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{DragEvent, MouseEvent, TouchEvent};

use crate::components::node_card::NodeCard;
use crate::components::palette::TRANSFER_FORMAT;
use crate::input::{client_point, element_rect, is_background, local_point, touch_point};

const EDGE_COLOR: &str = "#3b82f6";
const RUBBER_BAND_COLOR: &str = "#94a3b8";

fn edge_view(edge: EdgeLine, session: RwSignal<EditorSession>) -> impl IntoView {
    let EdgeLine { id, line } = edge;
    view! {
        <line
            class="connection"
            x1=line.from.x
            y1=line.from.y
            x2=line.to.x
            y2=line.to.y
            stroke=EDGE_COLOR
            stroke-width="3"
            marker-end="url(#arrowhead)"
            style="pointer-events: stroke; cursor: pointer;"
            on:click=move |event: MouseEvent| {
                event.stop_propagation();
                let id = id.clone();
                session.update(|s| {
                    s.remove_edge(&id);
                });
            }
        />
    }
}

fn rubber_band_view(line: LineSegment) -> impl IntoView {
    view! {
        <line
            class="rubber-band"
            x1=line.from.x
            y1=line.from.y
            x2=line.to.x
            y2=line.to.y
            stroke=RUBBER_BAND_COLOR
            stroke-width="2"
            stroke-dasharray="6,4"
        />
    }
}

#[component]
pub fn Canvas(session: RwSignal<EditorSession>, canvas_ref: NodeRef<Div>) -> impl IntoView {
    let is_touch = move || session.with_untracked(|s| s.input_mode() == InputMode::Touch);

    let on_mousedown = move |event: MouseEvent| {
        if is_touch() || !is_background(&event) {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (local, rect) = local_point(&event, &canvas);
        session.update(|s| {
            s.set_canvas_rect(rect);
            s.pointer_down(local, &PointerTarget::Background);
        });
    };

    let on_mousemove = move |event: MouseEvent| {
        // Only pans and armed connections follow the pointer
        let tracking = session.with_untracked(|s| s.is_panning() || s.connect().armed().is_some());
        if is_touch() || !tracking {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (local, _) = local_point(&event, &canvas);
        session.update(|s| s.pointer_move(local));
    };

    let on_mouseup = move |_: MouseEvent| {
        if session.with_untracked(EditorSession::is_panning) {
            session.update(EditorSession::pointer_up);
        }
    };

    let on_mouseleave = move |_: MouseEvent| {
        if session.with_untracked(EditorSession::is_panning) {
            session.update(EditorSession::pointer_leave);
        }
    };

    let on_dragover = move |event: DragEvent| event.prevent_default();

    let on_drop = move |event: DragEvent| {
        event.prevent_default();
        let transfer = event
            .data_transfer()
            .and_then(|data| data.get_data(TRANSFER_FORMAT).ok())
            .unwrap_or_default();
        let rect = canvas_ref.get_untracked().map(|el| element_rect(&el));
        let screen = client_point(&event);
        session.update(|s| {
            if let Some(rect) = rect {
                s.set_canvas_rect(rect);
            }
            let outcome = s.drop_transfer(screen, &transfer);
            tracing::debug!(?outcome, "Drop on canvas");
        });
    };

    let on_touchstart = move |event: TouchEvent| {
        if !is_touch() || !is_background(&event) {
            return;
        }
        let Some(point) = touch_point(&event) else {
            return;
        };
        let rect = canvas_ref.get_untracked().map(|el| element_rect(&el));
        session.update(|s| {
            if let Some(rect) = rect {
                s.set_canvas_rect(rect);
            }
            s.touch_start(point, PointerTarget::Background);
        });
    };

    let cursor = move || {
        if session.with(EditorSession::is_panning) {
            "grabbing"
        } else {
            "grab"
        }
    };

    let node_ids = move || {
        session.with(|s| {
            s.graph()
                .components()
                .iter()
                .map(|node| node.id().clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div
            class="workflow-canvas"
            node_ref=canvas_ref
            style=move || {
                format!(
                    "position: relative; flex: 1; min-height: 0; overflow: hidden; background-color: #f1f5f9; background-image: radial-gradient(#cbd5e1 1px, transparent 1px); background-size: 20px 20px; touch-action: none; cursor: {};",
                    cursor(),
                )
            }
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseup=on_mouseup
            on:mouseleave=on_mouseleave
            on:dragover=on_dragover
            on:drop=on_drop
            on:touchstart=on_touchstart
        >
            <svg
                class="connections-layer"
                style="position: absolute; inset: 0; width: 100%; height: 100%; overflow: visible; pointer-events: none;"
            >
                <defs>
                    <marker
                        id="arrowhead"
                        markerWidth="10"
                        markerHeight="7"
                        refX="9"
                        refY="3.5"
                        orient="auto"
                    >
                        <polygon points="0 0, 10 3.5, 0 7" fill=EDGE_COLOR />
                    </marker>
                </defs>
                {move || {
                    session
                        .with(EditorSession::edge_lines)
                        .into_iter()
                        .map(|edge| edge_view(edge, session))
                        .collect_view()
                }}
                {move || session.with(EditorSession::rubber_band).map(rubber_band_view)}
            </svg>
            <For each=node_ids key=|id| id.clone() let:id>
                <NodeCard id=id session=session />
            </For>
        </div>
    }
}
