use crate::stroke::StrokeRef;

/// What is currently drawn on the canvas.
///
/// Strokes are reference counted, so cloning a document for a history snapshot
/// copies pointers rather than point data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasDocument {
    strokes: Vec<StrokeRef>,
}

impl CanvasDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document that results from appending `stroke` to this one.
    pub fn with_stroke(&self, stroke: StrokeRef) -> Self {
        let mut strokes = Vec::with_capacity(self.strokes.len() + 1);
        strokes.extend(self.strokes.iter().cloned());
        strokes.push(stroke);
        Self { strokes }
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
