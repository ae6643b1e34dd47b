use egui::{LayerId, Pos2};

use crate::input::{InputEvent, InputHandler, route_event};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::state::EditorContext;
use crate::tools::ToolKind;

/// The canvas: feeds this frame's input to the editor, then paints the result.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &mut EditorContext,
    settings: &Settings,
    input: &mut InputHandler,
    renderer: &Renderer,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(ctx.style().visuals.extreme_bg_color))
        .show(ctx, |ui| {
            // The container claims the drag so no other widget reacts to a stroke
            let (container, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            editor.sync_container(container);

            let canvas_layer = ui.layer_id();
            for event in input.process_input(ctx) {
                if let InputEvent::PointerDown { position } = event {
                    if covered_by_other_layer(ctx, canvas_layer, position) {
                        log::trace!("Press at {position:?} belongs to a layer above the canvas");
                        continue;
                    }
                }
                route_event(&event, editor, settings, container);
            }

            let painter = ui.painter_at(container);
            renderer.render(
                &painter,
                editor.surface_rect(container),
                settings.background.color,
                editor.document(),
                editor.draft(),
            );

            let panning = editor.state().gesture_tool() == Some(ToolKind::Hand);
            let cursor = match settings.tool {
                ToolKind::Pen => egui::CursorIcon::Crosshair,
                ToolKind::Hand if panning => egui::CursorIcon::Grabbing,
                ToolKind::Hand => egui::CursorIcon::Grab,
                ToolKind::Eraser => egui::CursorIcon::Default,
            };
            if response.hovered() || !editor.state().is_idle() {
                ctx.set_cursor_icon(cursor);
            }
        });
}

// Popups and windows float above the panels. A press that lands on one of them is
// theirs, even when it is inside the canvas rect. Moves and releases of a gesture
// that already started on the canvas are not filtered.
fn covered_by_other_layer(ctx: &egui::Context, canvas_layer: LayerId, pos: Pos2) -> bool {
    ctx.layer_id_at(pos).is_some_and(|layer| layer != canvas_layer)
}
