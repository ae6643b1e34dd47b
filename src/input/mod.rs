use egui::{Context, Key, Modifiers, PointerButton, Pos2};

pub mod adapter;
mod router;
pub use router::{Shortcut, route_event, shortcut_for};

/// Represents the input events the editor reacts to, in delivery order
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Pointer moved (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released
    PointerUp { position: Pos2 },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's raw egui input and generate our InputEvents.
    ///
    /// Raw events are walked in order so a press, its drags and its release that land
    /// in the same frame are still seen in sequence. Key presses are skipped while a
    /// text widget has keyboard focus.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let keyboard_free = !ctx.wants_keyboard_input();
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        if Some(*pos) != self.last_pointer_pos {
                            events.push(InputEvent::PointerMove { position: *pos });
                            self.last_pointer_pos = Some(*pos);
                        }
                    }
                    egui::Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        self.last_pointer_pos = Some(*pos);
                        events.push(if *pressed {
                            InputEvent::PointerDown { position: *pos }
                        } else {
                            InputEvent::PointerUp { position: *pos }
                        });
                    }
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if keyboard_free => {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                    _ => {}
                }
            }
        });

        events
    }
}
