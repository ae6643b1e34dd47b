//! The gesture state machine for the whiteboard editor.
//!
//! A gesture runs from pointer-down to pointer-up (or an equivalent cutoff). The tool
//! selected when it starts is captured in the state and governs the whole gesture, even
//! if the selection changes before the pointer is released.
//!
//! ```text
//!  ┌──────────┐  pointer down  ┌──────────────────┐
//!  │   Idle   ├───────────────►│ Gesture { tool } │
//!  │          │◄───────────────┤                  │
//!  └──────────┘ up / cutoff    └──────────────────┘
//! ```

use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No pointer gesture in progress
    #[default]
    Idle,
    /// A gesture owned by `tool`
    Gesture { tool: ToolKind },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, EditorState::Gesture { .. }) => true,
            (EditorState::Gesture { .. }, EditorState::Idle) => true,
            // Gestures never nest, and idling while idle is meaningless
            _ => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns the tool that owns the current gesture
    pub fn gesture_tool(&self) -> Option<ToolKind> {
        match self {
            EditorState::Gesture { tool } => Some(*tool),
            EditorState::Idle => None,
        }
    }
}
