use egui::{Color32, Pos2};
use std::fmt::Write as _;
use std::sync::Arc;

use crate::settings::PenSettings;

// Immutable stroke for sharing between history snapshots
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Mutable stroke for the gesture in progress
#[derive(Clone, Debug, PartialEq)]
pub struct DraftStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// The stroke geometry as path commands, e.g. `M10 10 L50 10`.
    pub fn path_data(&self) -> String {
        encode_path(&self.points)
    }
}

impl DraftStroke {
    /// Start a draft at `start`, copying the pen settings in effect right now.
    ///
    /// Later changes to the pen do not reach a draft that already exists.
    pub fn new(start: Pos2, pen: &PenSettings) -> Self {
        Self {
            points: vec![start],
            color: pen.color,
            width: pen.width,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn path_data(&self) -> String {
        encode_path(&self.points)
    }

    // Consume the draft into a shareable immutable stroke
    pub fn finish(self) -> StrokeRef {
        Arc::new(Stroke::new(self.color, self.width, self.points))
    }
}

/// Encode a polyline as a move-to followed by one line-to per remaining point.
pub fn encode_path(points: &[Pos2]) -> String {
    let mut path = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(path, "{command}{} {}", point.x, point.y);
    }
    path
}
