use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Key, Modifiers, Pos2, Rect, pos2, vec2};
use whiteboard::event::{EditorEvent, EventHandler};
use whiteboard::input::{InputEvent, route_event};
use whiteboard::settings::{CanvasConfig, PenAction, Settings};
use whiteboard::state::{EditorContext, EditorState};
use whiteboard::tools::ToolKind;

const CONTAINER_SIZE: egui::Vec2 = vec2(800.0, 600.0);

fn container() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), CONTAINER_SIZE)
}

fn settings_with(tool: ToolKind) -> Settings {
    Settings {
        tool,
        ..Default::default()
    }
}

// Press at the first point, move through the rest, release at the last
fn drag(context: &mut EditorContext, settings: &Settings, path: &[Pos2]) {
    let (first, rest) = path.split_first().unwrap();
    context.pointer_down(*first, settings, container());
    for point in rest {
        context.pointer_move(*point, settings, container());
    }
    context.pointer_up(*path.last().unwrap(), settings, container());
}

struct Recorder(Rc<RefCell<Vec<EditorEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_pen_path_becomes_one_stroke() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    drag(
        &mut context,
        &settings,
        &[pos2(10.0, 10.0), pos2(50.0, 10.0), pos2(50.0, 50.0)],
    );

    let strokes = context.document().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].path_data(), "M10 10 L50 10 L50 50");
    assert!(context.draft().is_none());
    assert_eq!(context.state(), EditorState::Idle);
    assert_eq!(context.history().undo_depth(), 1);
}

#[test]
fn test_stroke_keeps_settings_from_its_start() {
    let mut context = EditorContext::default();
    let mut settings = settings_with(ToolKind::Pen);
    context
        .apply_pen_action(&mut settings, &PenAction::ChangeColor { hex: "#0000FF".into() })
        .unwrap();
    context
        .apply_pen_action(&mut settings, &PenAction::ChangeWidth { width: 5.0 })
        .unwrap();

    context.pointer_down(pos2(10.0, 10.0), &settings, container());
    context.pointer_move(pos2(20.0, 20.0), &settings, container());

    context
        .apply_pen_action(&mut settings, &PenAction::ChangeColor { hex: "#FF0000".into() })
        .unwrap();
    context
        .apply_pen_action(&mut settings, &PenAction::ChangeWidth { width: 10.0 })
        .unwrap();

    context.pointer_move(pos2(30.0, 30.0), &settings, container());
    context.pointer_up(pos2(30.0, 30.0), &settings, container());

    let stroke = &context.document().strokes()[0];
    assert_eq!(stroke.color(), Color32::from_rgb(0, 0, 255));
    assert_eq!(stroke.width(), 5.0);
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    context.pointer_down(pos2(10.0, 10.0), &settings, container());
    context.pointer_down(pos2(99.0, 99.0), &settings, container());
    context.pointer_move(pos2(20.0, 10.0), &settings, container());
    context.pointer_up(pos2(20.0, 10.0), &settings, container());

    assert_eq!(context.document().len(), 1);
    assert_eq!(context.document().strokes()[0].path_data(), "M10 10 L20 10");
}

#[test]
fn test_pointer_up_without_gesture_is_noop() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    context.pointer_up(pos2(10.0, 10.0), &settings, container());
    context.pointer_move(pos2(20.0, 10.0), &settings, container());

    assert!(context.document().is_empty());
    assert!(!context.history().can_undo());
}

#[test]
fn test_stroke_cut_off_when_pointer_leaves_surface() {
    // A surface smaller than the container, so the pointer can leave it
    let config = CanvasConfig {
        surface_size: vec2(100.0, 100.0),
        out_of_bound_tolerance: 30.0,
    };
    let mut context = EditorContext::new(config);
    let settings = settings_with(ToolKind::Pen);

    context.pointer_down(pos2(50.0, 50.0), &settings, container());
    context.pointer_move(pos2(120.0, 50.0), &settings, container());
    assert!(context.draft().is_some());

    context.pointer_move(pos2(140.0, 50.0), &settings, container());
    assert!(context.draft().is_none());
    assert_eq!(context.state(), EditorState::Idle);
    assert_eq!(context.document().strokes()[0].path_data(), "M50 50 L100 50");

    // Coming back without a new press draws nothing
    context.pointer_move(pos2(60.0, 60.0), &settings, container());
    context.pointer_up(pos2(60.0, 60.0), &settings, container());
    assert_eq!(context.document().len(), 1);
}

#[test]
fn test_press_outside_container_is_ignored() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    context.pointer_down(pos2(-10.0, 10.0), &settings, container());
    assert_eq!(context.state(), EditorState::Idle);
}

#[test]
fn test_eraser_swallows_gesture() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Eraser);

    context.pointer_down(pos2(10.0, 10.0), &settings, container());
    assert_eq!(
        context.state(),
        EditorState::Gesture {
            tool: ToolKind::Eraser
        }
    );
    context.pointer_move(pos2(50.0, 50.0), &settings, container());
    context.pointer_up(pos2(50.0, 50.0), &settings, container());

    assert!(context.document().is_empty());
    assert_eq!(context.pan_offset(), vec2(0.0, 0.0));
    assert_eq!(context.state(), EditorState::Idle);
}

#[test]
fn test_hand_pans_within_bounds() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Hand);
    let surface_size = context.config().surface_size;

    drag(
        &mut context,
        &settings,
        &[pos2(400.0, 300.0), pos2(300.0, 250.0), pos2(350.0, 400.0)],
    );
    assert_eq!(context.pan_offset(), vec2(-50.0, 0.0));

    // Fling far beyond the bottom-right corner
    for _ in 0..20 {
        drag(&mut context, &settings, &[pos2(790.0, 590.0), pos2(10.0, 10.0)]);
    }
    let surface = context.surface_rect(container());
    assert_eq!(surface.size(), surface_size);
    assert_eq!(surface.max, container().max);
    assert!(context.document().is_empty());
}

#[test]
fn test_strokes_follow_the_panned_surface() {
    let mut context = EditorContext::default();
    let hand = settings_with(ToolKind::Hand);
    let pen = settings_with(ToolKind::Pen);

    drag(&mut context, &hand, &[pos2(400.0, 300.0), pos2(300.0, 200.0)]);
    drag(&mut context, &pen, &[pos2(10.0, 10.0), pos2(20.0, 10.0)]);

    assert_eq!(context.document().strokes()[0].path_data(), "M110 110 L120 110");
}

#[test]
fn test_tool_change_mid_gesture_does_not_apply() {
    let mut context = EditorContext::default();
    let mut settings = settings_with(ToolKind::Pen);

    context.pointer_down(pos2(10.0, 10.0), &settings, container());
    context.set_tool(&mut settings, ToolKind::Hand);
    context.pointer_move(pos2(60.0, 10.0), &settings, container());
    context.pointer_up(pos2(60.0, 10.0), &settings, container());

    assert_eq!(context.document().strokes()[0].path_data(), "M10 10 L60 10");
    assert_eq!(context.pan_offset(), vec2(0.0, 0.0));

    // The next gesture uses the new tool
    drag(&mut context, &settings, &[pos2(400.0, 300.0), pos2(350.0, 300.0)]);
    assert_eq!(context.pan_offset(), vec2(-50.0, 0.0));
    assert_eq!(context.document().len(), 1);
}

#[test]
fn test_clear_canvas_is_undoable_and_skips_empty() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    assert!(!context.clear_canvas());
    assert!(!context.history().can_undo());

    drag(&mut context, &settings, &[pos2(10.0, 10.0), pos2(20.0, 20.0)]);
    assert!(context.clear_canvas());
    assert!(context.document().is_empty());

    assert!(context.undo());
    assert_eq!(context.document().len(), 1);
}

#[test]
fn test_keyboard_shortcuts_undo_and_redo() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);
    drag(&mut context, &settings, &[pos2(10.0, 10.0), pos2(20.0, 20.0)]);
    drag(&mut context, &settings, &[pos2(30.0, 30.0), pos2(40.0, 40.0)]);

    let ctrl_z = InputEvent::KeyDown {
        key: Key::Z,
        modifiers: Modifiers::CTRL,
    };
    let ctrl_y = InputEvent::KeyDown {
        key: Key::Y,
        modifiers: Modifiers::CTRL,
    };
    let plain_z = InputEvent::KeyDown {
        key: Key::Z,
        modifiers: Modifiers::NONE,
    };

    route_event(&ctrl_z, &mut context, &settings, container());
    assert_eq!(context.document().len(), 1);

    route_event(&plain_z, &mut context, &settings, container());
    assert_eq!(context.document().len(), 1);

    route_event(&ctrl_y, &mut context, &settings, container());
    assert_eq!(context.document().len(), 2);
}

#[test]
fn test_routed_pointer_events_draw() {
    let mut context = EditorContext::default();
    let settings = settings_with(ToolKind::Pen);

    for event in [
        InputEvent::PointerDown {
            position: pos2(10.0, 10.0),
        },
        InputEvent::PointerMove {
            position: pos2(50.0, 10.0),
        },
        InputEvent::PointerMove {
            position: pos2(50.0, 50.0),
        },
        InputEvent::PointerUp {
            position: pos2(50.0, 50.0),
        },
    ] {
        route_event(&event, &mut context, &settings, container());
    }

    assert_eq!(
        context.document().strokes()[0].path_data(),
        "M10 10 L50 10 L50 50"
    );
}

#[test]
fn test_change_notifications() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut context = EditorContext::default();
    context.event_bus.subscribe(Box::new(Recorder(events.clone())));
    let mut settings = settings_with(ToolKind::Pen);

    drag(&mut context, &settings, &[pos2(10.0, 10.0), pos2(20.0, 20.0)]);
    context.undo();
    context.redo();
    context.clear_canvas();
    context.set_tool(&mut settings, ToolKind::Hand);

    let pen_gesture = EditorState::Gesture {
        tool: ToolKind::Pen,
    };
    assert_eq!(
        *events.borrow(),
        vec![
            EditorEvent::StateChanged {
                old: EditorState::Idle,
                new: pen_gesture,
            },
            EditorEvent::StrokeCommitted { stroke_count: 1 },
            EditorEvent::StateChanged {
                old: pen_gesture,
                new: EditorState::Idle,
            },
            EditorEvent::Undone { stroke_count: 0 },
            EditorEvent::Redone { stroke_count: 1 },
            EditorEvent::CanvasCleared,
            EditorEvent::ToolChanged {
                old: ToolKind::Pen,
                new: ToolKind::Hand,
            },
        ]
    );
}

#[test]
fn test_rejected_settings_leave_pen_untouched() {
    let context = EditorContext::default();
    let mut settings = Settings::default();
    let before = settings.pen.clone();

    assert!(
        context
            .apply_pen_action(&mut settings, &PenAction::ChangeWidth { width: -1.0 })
            .is_err()
    );
    assert!(
        context
            .apply_pen_action(&mut settings, &PenAction::ChangeColor { hex: "red".into() })
            .is_err()
    );
    assert_eq!(settings.pen, before);
}

#[test]
fn test_pen_press_off_surface_starts_nothing() {
    // The container is larger than the surface, so a press can miss it
    let config = CanvasConfig {
        surface_size: vec2(100.0, 100.0),
        out_of_bound_tolerance: 30.0,
    };
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut context = EditorContext::new(config);
    context.event_bus.subscribe(Box::new(Recorder(events.clone())));
    let settings = settings_with(ToolKind::Pen);

    context.pointer_down(pos2(300.0, 300.0), &settings, container());
    context.pointer_move(pos2(50.0, 50.0), &settings, container());
    context.pointer_up(pos2(50.0, 50.0), &settings, container());

    assert_eq!(context.state(), EditorState::Idle);
    assert!(context.document().is_empty());
    assert!(events.borrow().is_empty());
}
