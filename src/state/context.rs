//! The main context for the whiteboard editor.
//!
//! `EditorContext` owns everything the user can change by drawing: the undo history
//! (and with it the current document), the gesture state, and each tool's transient
//! state. Configuration owned by the surrounding UI (tool selection, pen, background)
//! is never stored here; it is passed in as a [`Settings`] snapshot on every call.
//!
//! # Example
//!
//! ```rust
//! use whiteboard::settings::{CanvasConfig, Settings};
//! use whiteboard::state::EditorContext;
//!
//! use egui::{pos2, vec2, Rect};
//!
//! let settings = Settings::default();
//! let container = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0));
//! let mut context = EditorContext::new(CanvasConfig::default());
//!
//! context.pointer_down(pos2(10.0, 10.0), &settings, container);
//! context.pointer_move(pos2(50.0, 10.0), &settings, container);
//! context.pointer_up(pos2(50.0, 10.0), &settings, container);
//!
//! assert_eq!(context.document().strokes()[0].path_data(), "M10 10 L50 10");
//! ```

use egui::{Pos2, Rect, Vec2};
use thiserror::Error;

use super::EditorState;
use crate::command::Command;
use crate::document::CanvasDocument;
use crate::error::SettingsResult;
use crate::event::{EditorEvent, EventBus};
use crate::history::History;
use crate::settings::{BackgroundAction, CanvasConfig, PenAction, Settings};
use crate::stroke::DraftStroke;
use crate::tools::{EraserTool, PanController, StrokeBuilder, Tool, ToolInput, ToolKind};

/// Errors that can occur during state transitions.
#[derive(Debug, Error, PartialEq)]
pub enum StateTransitionError {
    #[error("Cannot transition from {from:?} to {to:?}")]
    InvalidTransition { from: EditorState, to: EditorState },
}

#[derive(Debug)]
pub struct EditorContext {
    state: EditorState,
    history: History,
    config: CanvasConfig,
    stroke_builder: StrokeBuilder,
    pan: PanController,
    eraser: EraserTool,
    /// The event bus for broadcasting editor events
    pub event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl EditorContext {
    /// Creates a context with an empty canvas, idle, and unpanned.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            state: EditorState::Idle,
            history: History::new(),
            stroke_builder: StrokeBuilder::new(config.out_of_bound_tolerance),
            pan: PanController::new(),
            eraser: EraserTool::default(),
            config,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The committed canvas contents
    pub fn document(&self) -> &CanvasDocument {
        self.history.current()
    }

    /// The stroke currently being drawn, if any
    pub fn draft(&self) -> Option<&DraftStroke> {
        self.stroke_builder.draft()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan.offset()
    }

    /// Where the drawing surface sits on screen inside `container`
    pub fn surface_rect(&self, container: Rect) -> Rect {
        self.pan.surface_rect(container, self.config.surface_size)
    }

    /// Keep the pan offset valid for the container's current size
    pub fn sync_container(&mut self, container: Rect) {
        self.pan.reclamp(container, self.config.surface_size);
    }

    /// Attempts to transition to a new state, emitting a change event on success.
    ///
    /// # Errors
    ///
    /// Returns `StateTransitionError::InvalidTransition` if the requested transition
    /// is not allowed from the current state.
    pub fn transition_to(&mut self, new_state: EditorState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(&new_state) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.state,
                to: new_state,
            });
        }

        let old_state = self.state;
        self.state = new_state;
        self.event_bus.emit(EditorEvent::StateChanged {
            old: old_state,
            new: new_state,
        });
        Ok(())
    }

    /// Start a gesture with the tool selected right now.
    ///
    /// Ignored while another gesture is in progress, when the press is outside the
    /// visible container, or when the tool turns the press down (a pen press off the
    /// surface). An ignored press leaves the state untouched.
    pub fn pointer_down(&mut self, pos: Pos2, settings: &Settings, container: Rect) {
        if !container.contains(pos) {
            return;
        }
        let tool = settings.tool;
        let input = self.tool_input(pos, settings, container);
        if !self.tool_mut(tool).accepts_press(&input) {
            log::trace!("{} ignores a press at {:?}", tool.name(), pos);
            return;
        }
        if let Err(err) = self.transition_to(EditorState::Gesture { tool }) {
            log::trace!("Ignoring pointer down: {err}");
            return;
        }
        let handler = self.tool_mut(tool);
        log::debug!("{} gesture started at {:?}", handler.name(), pos);
        let command = handler.on_pointer_down(&input);
        self.after_tool_step(tool, command);
    }

    pub fn pointer_move(&mut self, pos: Pos2, settings: &Settings, container: Rect) {
        let Some(tool) = self.state.gesture_tool() else {
            return;
        };
        let input = self.tool_input(pos, settings, container);
        let command = self.tool_mut(tool).on_pointer_move(&input);
        self.after_tool_step(tool, command);
    }

    pub fn pointer_up(&mut self, pos: Pos2, settings: &Settings, container: Rect) {
        let Some(tool) = self.state.gesture_tool() else {
            return;
        };
        let input = self.tool_input(pos, settings, container);
        let command = self.tool_mut(tool).on_pointer_up(&input);
        self.after_tool_step(tool, command);
    }

    /// Apply a mutating command and record the result in the history
    pub fn execute(&mut self, command: Command) {
        let next = command.apply(self.history.current());
        let stroke_count = next.len();
        self.history.commit(next);
        log::info!("{} -> {} strokes", command.name(), stroke_count);

        self.event_bus.emit(match command {
            Command::AddStroke(_) => EditorEvent::StrokeCommitted { stroke_count },
            Command::ClearCanvas => EditorEvent::CanvasCleared,
        });
    }

    /// Clear the canvas as an undoable action. Does nothing when already empty.
    pub fn clear_canvas(&mut self) -> bool {
        if self.document().is_empty() {
            return false;
        }
        self.execute(Command::ClearCanvas);
        true
    }

    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        let stroke_count = self.document().len();
        log::info!("Undo -> {} strokes", stroke_count);
        self.event_bus.emit(EditorEvent::Undone { stroke_count });
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        let stroke_count = self.document().len();
        log::info!("Redo -> {} strokes", stroke_count);
        self.event_bus.emit(EditorEvent::Redone { stroke_count });
        true
    }

    /// Select a tool. A gesture already running keeps the tool it started with.
    pub fn set_tool(&self, settings: &mut Settings, tool: ToolKind) {
        if settings.tool == tool {
            return;
        }
        let old = settings.tool;
        settings.tool = tool;
        log::info!("Tool selected: {}", tool.name());
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    /// Run the pen reducer and store the result.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's `SettingsError`; settings are left untouched.
    pub fn apply_pen_action(&self, settings: &mut Settings, action: &PenAction) -> SettingsResult<()> {
        let pen = settings.pen.reduce(action)?;
        if pen != settings.pen {
            settings.pen = pen;
            self.event_bus.emit(EditorEvent::PenSettingsChanged);
        }
        Ok(())
    }

    /// Run the background reducer and store the result.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's `SettingsError`; settings are left untouched.
    pub fn apply_background_action(
        &self,
        settings: &mut Settings,
        action: &BackgroundAction,
    ) -> SettingsResult<()> {
        let background = settings.background.reduce(action)?;
        if background != settings.background {
            settings.background = background;
            self.event_bus.emit(EditorEvent::BackgroundChanged);
        }
        Ok(())
    }

    fn tool_input<'a>(&self, pos: Pos2, settings: &'a Settings, container: Rect) -> ToolInput<'a> {
        ToolInput {
            pos,
            surface: self.surface_rect(container),
            container,
            pen: &settings.pen,
        }
    }

    fn tool_mut(&mut self, tool: ToolKind) -> &mut dyn Tool {
        match tool {
            ToolKind::Pen => &mut self.stroke_builder,
            ToolKind::Eraser => &mut self.eraser,
            ToolKind::Hand => &mut self.pan,
        }
    }

    // Commit whatever the tool produced, and end the gesture once the tool lets go
    fn after_tool_step(&mut self, tool: ToolKind, command: Option<Command>) {
        if let Some(command) = command {
            self.execute(command);
        }
        if !self.tool_mut(tool).is_active() {
            // Only reachable from a gesture, so the transition is always valid
            let _ = self.transition_to(EditorState::Idle);
        }
    }
}
