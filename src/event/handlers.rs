use crate::event::{EditorEvent, EventHandler};

/// Writes every editor event to the log at debug level
#[derive(Debug, Default)]
pub struct LoggingHandler;

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        log::debug!("Editor event: {:?}", event);
    }
}
