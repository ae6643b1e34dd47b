pub mod context;
mod editor_state;

pub use context::{EditorContext, StateTransitionError};
pub use editor_state::EditorState;
