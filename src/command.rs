use crate::document::CanvasDocument;
use crate::stroke::StrokeRef;

/// Represents actions that change what is drawn, and can therefore be undone
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Append a finished stroke
    AddStroke(StrokeRef),
    /// Remove every stroke
    ClearCanvas,
}

impl Command {
    /// The document that results from applying this command to `document`
    pub fn apply(&self, document: &CanvasDocument) -> CanvasDocument {
        match self {
            Command::AddStroke(stroke) => document.with_stroke(stroke.clone()),
            Command::ClearCanvas => CanvasDocument::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "AddStroke",
            Command::ClearCanvas => "ClearCanvas",
        }
    }
}
