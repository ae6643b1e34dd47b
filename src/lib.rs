#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod stroke;
pub mod tools;

pub use app::WhiteboardApp;
pub use command::Command;
pub use document::CanvasDocument;
pub use error::SettingsError;
pub use history::{History, HistoryEntry};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use settings::{BackgroundSettings, CanvasConfig, PenSettings, Settings};
pub use state::{EditorContext, EditorState};
pub use stroke::{DraftStroke, Stroke, StrokeRef};
pub use tools::ToolKind;
