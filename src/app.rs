use crate::event::LoggingHandler;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::{CanvasConfig, Settings};
use crate::state::EditorContext;

/// We derive Deserialize/Serialize so we can persist the user's settings on shutdown.
/// Drawings themselves are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WhiteboardApp {
    settings: Settings,
    #[serde(skip)]
    editor: EditorContext,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any).
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<WhiteboardApp>(storage, eframe::APP_KEY))
            .map(|restored| restored.settings)
            .unwrap_or_default();
        log::info!(
            "Starting with tool {} and pen width {}",
            settings.tool.name(),
            settings.pen.width
        );
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        let editor = EditorContext::new(CanvasConfig::default());
        editor.event_bus.subscribe(Box::new(LoggingHandler));
        Self {
            settings,
            editor,
            input: InputHandler::new(),
            renderer: Renderer::new(),
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(ctx, &mut self.editor, &mut self.settings);
        central_panel(
            ctx,
            &mut self.editor,
            &self.settings,
            &mut self.input,
            &self.renderer,
        );
    }
}
