use egui::Pos2;

use crate::command::Command;
use crate::input::adapter::{is_out_of_bounds, relative_to_rect};
use crate::stroke::DraftStroke;
use crate::tools::{Tool, ToolInput};

/// Pen tool: turns a pointer gesture into one freehand stroke.
///
/// Idle while `draft` is `None`, drawing otherwise.
#[derive(Clone, Debug)]
pub struct StrokeBuilder {
    draft: Option<DraftStroke>,
    out_of_bound_tolerance: f32,
}

impl StrokeBuilder {
    pub fn new(out_of_bound_tolerance: f32) -> Self {
        Self {
            draft: None,
            out_of_bound_tolerance,
        }
    }

    /// The stroke being drawn, if any
    pub fn draft(&self) -> Option<&DraftStroke> {
        self.draft.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Finalize the draft. A no-op returning `None` when nothing is being drawn.
    pub fn stop(&mut self) -> Option<Command> {
        let draft = self.draft.take()?;
        log::debug!("Finished stroke with {} points", draft.points().len());
        Some(Command::AddStroke(draft.finish()))
    }

    fn canvas_point(input: &ToolInput<'_>) -> Pos2 {
        relative_to_rect(input.surface, input.pos).round()
    }
}

impl Tool for StrokeBuilder {
    fn name(&self) -> &'static str {
        "Pen"
    }

    fn accepts_press(&self, input: &ToolInput<'_>) -> bool {
        // No nested strokes
        self.draft.is_none() && input.surface.contains(input.pos)
    }

    fn on_pointer_down(&mut self, input: &ToolInput<'_>) -> Option<Command> {
        if !self.accepts_press(input) {
            return None;
        }
        self.draft = Some(DraftStroke::new(Self::canvas_point(input), input.pen));
        None
    }

    fn on_pointer_move(&mut self, input: &ToolInput<'_>) -> Option<Command> {
        if self.draft.is_none() {
            return None;
        }
        if is_out_of_bounds(input.surface, input.pos, self.out_of_bound_tolerance) {
            log::debug!("Pointer left the surface at {:?}, ending stroke", input.pos);
            return self.stop();
        }

        let point = Self::canvas_point(input);
        if let Some(draft) = &mut self.draft {
            draft.add_point(point);
        }
        None
    }

    fn on_pointer_up(&mut self, _input: &ToolInput<'_>) -> Option<Command> {
        self.stop()
    }

    fn is_active(&self) -> bool {
        self.is_drawing()
    }
}
