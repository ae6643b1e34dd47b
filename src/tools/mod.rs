use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::settings::PenSettings;

mod eraser;
mod pan;
mod stroke_builder;

pub use eraser::EraserTool;
pub use pan::{PanController, clamp_pan_delta};
pub use stroke_builder::StrokeBuilder;

/// The tool picked in the tools menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    Hand,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Pen, ToolKind::Eraser, ToolKind::Hand];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
            Self::Hand => "Hand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pen => "✏ Pen",
            Self::Eraser => "⌫ Eraser",
            Self::Hand => "✋ Hand",
        }
    }
}

/// Geometry and configuration a tool sees for one pointer sample
#[derive(Clone, Copy, Debug)]
pub struct ToolInput<'a> {
    /// Pointer position in screen coordinates
    pub pos: Pos2,
    /// On-screen bounding box of the whole drawing surface
    pub surface: Rect,
    /// Visible area the surface is panned within
    pub container: Rect,
    pub pen: &'a PenSettings,
}

/// Tool trait defines how a tool interprets one gesture
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Whether a press at `input` would start a gesture with this tool
    fn accepts_press(&self, _input: &ToolInput<'_>) -> bool {
        true
    }

    /// Handle pointer press on the canvas.
    /// Return a Command if the press alone completes an action.
    fn on_pointer_down(&mut self, input: &ToolInput<'_>) -> Option<Command>;

    /// Handle pointer movement while the gesture is active.
    fn on_pointer_move(&mut self, input: &ToolInput<'_>) -> Option<Command>;

    /// Handle pointer release.
    /// Return a Command to **finalize** an action if applicable.
    fn on_pointer_up(&mut self, input: &ToolInput<'_>) -> Option<Command>;

    /// Whether the tool is still in the middle of a gesture
    fn is_active(&self) -> bool;
}
