//! Pure conversions from screen positions to surface-local coordinates.

use egui::{Pos2, Rect, pos2};

/// Clamp `pos` into `rect` and express it relative to the rectangle's top-left corner.
///
/// Positions outside the rectangle are pinned to its nearest edge rather than rejected,
/// so a drag that wanders off the surface keeps tracking the boundary.
pub fn relative_to_rect(rect: Rect, pos: Pos2) -> Pos2 {
    let x = pos.x.max(rect.min.x).min(rect.max.x);
    let y = pos.y.max(rect.min.y).min(rect.max.y);
    pos2(x - rect.min.x, y - rect.min.y)
}

/// True when `pos` is more than `tolerance` away from `rect` on any side.
pub fn is_out_of_bounds(rect: Rect, pos: Pos2, tolerance: f32) -> bool {
    pos.x + tolerance < rect.min.x
        || pos.y + tolerance < rect.min.y
        || pos.x - tolerance > rect.max.x
        || pos.y - tolerance > rect.max.y
}
