use crate::state::EditorState;
use crate::tools::ToolKind;

/// Change notifications emitted by the editor for its collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    StateChanged {
        old: EditorState,
        new: EditorState,
    },
    /// A finished stroke was added to the canvas
    StrokeCommitted {
        stroke_count: usize,
    },
    CanvasCleared,
    Undone {
        stroke_count: usize,
    },
    Redone {
        stroke_count: usize,
    },
    ToolChanged {
        old: ToolKind,
        new: ToolKind,
    },
    PenSettingsChanged,
    BackgroundChanged,
}
