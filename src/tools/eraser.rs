use crate::command::Command;
use crate::tools::{Tool, ToolInput};

/// Reserved eraser tool. It owns the gesture so pointer events are swallowed,
/// but it never changes the canvas.
#[derive(Clone, Debug, Default)]
pub struct EraserTool {
    pressed: bool,
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn on_pointer_down(&mut self, _input: &ToolInput<'_>) -> Option<Command> {
        self.pressed = true;
        None
    }

    fn on_pointer_move(&mut self, _input: &ToolInput<'_>) -> Option<Command> {
        None
    }

    fn on_pointer_up(&mut self, _input: &ToolInput<'_>) -> Option<Command> {
        self.pressed = false;
        None
    }

    fn is_active(&self) -> bool {
        self.pressed
    }
}
