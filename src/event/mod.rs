mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::EditorEvent;
pub use handlers::LoggingHandler;

/// Receives change notifications from the editor
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
