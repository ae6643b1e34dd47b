use egui::{Key, Modifiers, Rect};

use crate::settings::Settings;
use crate::state::EditorContext;

use super::InputEvent;

/// Keyboard shortcuts handled by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

/// Ctrl+Z undoes, Ctrl+Y redoes. Shift is ignored.
pub fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    if !modifiers.ctrl {
        return None;
    }
    match key {
        Key::Z => Some(Shortcut::Undo),
        Key::Y => Some(Shortcut::Redo),
        _ => None,
    }
}

/// Routes one input event to the editor, with the settings and canvas container
/// as they are right now.
pub fn route_event(
    event: &InputEvent,
    context: &mut EditorContext,
    settings: &Settings,
    container: Rect,
) {
    match event {
        InputEvent::PointerDown { position } => {
            context.pointer_down(*position, settings, container);
        }
        InputEvent::PointerMove { position } => {
            context.pointer_move(*position, settings, container);
        }
        InputEvent::PointerUp { position } => {
            context.pointer_up(*position, settings, container);
        }
        InputEvent::KeyDown { key, modifiers } => match shortcut_for(*key, *modifiers) {
            Some(Shortcut::Undo) => {
                context.undo();
            }
            Some(Shortcut::Redo) => {
                context.redo();
            }
            None => {}
        },
    }
}
