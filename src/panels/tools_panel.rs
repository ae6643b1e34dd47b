use egui::{Sense, Slider, vec2};

use crate::settings::{
    BackgroundAction, MAX_PEN_WIDTH, MIN_PEN_WIDTH, PALETTE, PenAction, Settings, parse_hex_color,
    to_hex,
};
use crate::state::EditorContext;
use crate::tools::ToolKind;

const SWATCH_SIZE: f32 = 24.0;

pub fn tools_panel(ctx: &egui::Context, editor: &mut EditorContext, settings: &mut Settings) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Whiteboard");
            ui.separator();

            ui.label("Tools");
            ui.horizontal(|ui| {
                for tool in ToolKind::ALL {
                    if ui.selectable_label(settings.tool == tool, tool.label()).clicked() {
                        editor.set_tool(settings, tool);
                    }
                }
            });
            ui.separator();

            pen_menu(ui, editor, settings);
            ui.separator();

            ui.label(format!("Background {}", to_hex(settings.background.color)));
            let mut background = settings.background.color;
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut background,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                let action = BackgroundAction::ChangeColor { color: background };
                if let Err(err) = editor.apply_background_action(settings, &action) {
                    log::error!("Rejected background setting: {err}");
                }
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = editor.history().can_undo();
                let can_redo = editor.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    editor.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    editor.redo();
                }
                let has_strokes = !editor.document().is_empty();
                if ui.add_enabled(has_strokes, egui::Button::new("Clear")).clicked() {
                    editor.clear_canvas();
                }
            });

            let history = editor.history();
            ui.label(format!("Strokes: {}", editor.document().len()));
            ui.label(format!(
                "Undo: {}  Redo: {}",
                history.undo_depth(),
                history.redo_depth()
            ));
        });
}

fn pen_menu(ui: &mut egui::Ui, editor: &EditorContext, settings: &mut Settings) {
    ui.label(format!("Color {}", to_hex(settings.pen.color)));
    egui::Grid::new("pen_palette")
        .num_columns(4)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, hex) in PALETTE.iter().enumerate() {
                let Ok(color) = parse_hex_color(hex) else {
                    continue;
                };
                let (rect, response) =
                    ui.allocate_exact_size(vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
                let radius = SWATCH_SIZE / 2.0 - 1.0;
                ui.painter().circle_filled(rect.center(), radius, color);
                if settings.pen.color == color {
                    let outline = egui::Stroke::new(2.0, ui.visuals().strong_text_color());
                    ui.painter().circle_stroke(rect.center(), radius, outline);
                }
                if response.on_hover_text(*hex).clicked() {
                    let action = PenAction::ChangeColor {
                        hex: (*hex).to_owned(),
                    };
                    if let Err(err) = editor.apply_pen_action(settings, &action) {
                        log::error!("Rejected pen setting: {err}");
                    }
                }
                if (i + 1) % 4 == 0 {
                    ui.end_row();
                }
            }
        });

    ui.label("Width");
    let mut width = settings.pen.width;
    if ui
        .add(Slider::new(&mut width, MIN_PEN_WIDTH..=MAX_PEN_WIDTH).step_by(1.0))
        .changed()
    {
        if let Err(err) = editor.apply_pen_action(settings, &PenAction::ChangeWidth { width }) {
            log::error!("Rejected pen setting: {err}");
        }
    }
}
