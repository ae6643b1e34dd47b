use egui::{Pos2, Rect, Vec2, vec2};

use crate::command::Command;
use crate::tools::{Tool, ToolInput};

/// Hand tool: drags the oversized surface around inside its container.
///
/// The offset is the position of the surface's top-left corner relative to the
/// container's top-left corner, so it is never positive on either axis.
#[derive(Clone, Debug, Default)]
pub struct PanController {
    offset: Vec2,
    last_pos: Option<Pos2>,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Where the surface sits on screen for the current offset
    pub fn surface_rect(&self, container: Rect, surface_size: Vec2) -> Rect {
        Rect::from_min_size(container.min + self.offset, surface_size)
    }

    /// Pull the offset back into range after the container changed size
    pub fn reclamp(&mut self, container: Rect, surface_size: Vec2) {
        let (min, max) = offset_bounds(container.size(), surface_size);
        self.offset = vec2(
            self.offset.x.clamp(min.x, max.x),
            self.offset.y.clamp(min.y, max.y),
        );
    }
}

impl Tool for PanController {
    fn name(&self) -> &'static str {
        "Hand"
    }

    fn on_pointer_down(&mut self, input: &ToolInput<'_>) -> Option<Command> {
        self.last_pos = Some(input.pos);
        None
    }

    fn on_pointer_move(&mut self, input: &ToolInput<'_>) -> Option<Command> {
        let last_pos = self.last_pos?;
        let delta = clamp_pan_delta(
            self.offset,
            input.pos - last_pos,
            input.container.size(),
            input.surface.size(),
        );
        self.offset += delta;
        self.last_pos = Some(input.pos);
        None
    }

    fn on_pointer_up(&mut self, _input: &ToolInput<'_>) -> Option<Command> {
        self.last_pos = None;
        None
    }

    fn is_active(&self) -> bool {
        self.last_pos.is_some()
    }
}

// Range the offset may take on each axis. An axis where the surface is smaller than
// the container is pinned to zero.
fn offset_bounds(container_size: Vec2, surface_size: Vec2) -> (Vec2, Vec2) {
    let min = (container_size - surface_size).min(Vec2::ZERO);
    (min, Vec2::ZERO)
}

/// The part of `delta` that can be applied to `offset` without exposing space beyond
/// the surface edges.
pub fn clamp_pan_delta(offset: Vec2, delta: Vec2, container_size: Vec2, surface_size: Vec2) -> Vec2 {
    let (min, max) = offset_bounds(container_size, surface_size);
    let target = offset + delta;
    vec2(
        target.x.clamp(min.x, max.x) - offset.x,
        target.y.clamp(min.y, max.y) - offset.y,
    )
}
