// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape};

use crate::document::CanvasDocument;
use crate::stroke::DraftStroke;

/// Draws the canvas: background fill, committed strokes, then the draft on top.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders one frame
    ///
    /// Args:
    ///     painter (egui::Painter): Painter clipped to the visible container
    ///     surface (egui::Rect): On-screen rectangle of the whole drawing surface
    ///     background (Color32): Surface fill color
    pub fn render(
        &self,
        painter: &Painter,
        surface: Rect,
        background: Color32,
        document: &CanvasDocument,
        draft: Option<&DraftStroke>,
    ) {
        painter.rect_filled(surface, 0.0, background);
        painter.extend(stroke_shapes(surface.min, document, draft));
    }
}

/// Line shapes for every stroke, translated from surface-local to screen coordinates.
///
/// A stroke made of a single point has no visible segment and produces no shape.
pub fn stroke_shapes(origin: Pos2, document: &CanvasDocument, draft: Option<&DraftStroke>) -> Vec<Shape> {
    let committed = document
        .strokes()
        .iter()
        .map(|stroke| (stroke.points(), stroke.color(), stroke.width()));
    let in_progress = draft.map(|draft| (draft.points(), draft.color(), draft.width()));

    committed
        .chain(in_progress)
        .filter(|(points, _, _)| points.len() > 1)
        .map(|(points, color, width)| {
            let screen_points = points.iter().map(|p| origin + p.to_vec2()).collect();
            Shape::line(screen_points, egui::Stroke::new(width, color))
        })
        .collect()
}
