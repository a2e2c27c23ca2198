use sketch_engine::brush::Brush;
use sketch_engine::canvas::Canvas;
use sketch_engine::command::{Command, CommandHistory};
use sketch_engine::geometry::Point;
use sketch_engine::layer::Layer;
use sketch_engine::stroke::DrawingPath;

fn test_path(offset: f32) -> DrawingPath {
    DrawingPath::new(
        Brush::solid(4.0, 1.0, 0xFF00_0000),
        vec![
            Point::new(offset, offset),
            Point::new(offset + 10.0, offset + 10.0),
        ],
    )
}

// Canvas with one empty vector layer, already active
fn canvas_with_layer() -> Canvas {
    Canvas::new("test", 800.0, 600.0).with_layer_added(Layer::vector("L1"), None)
}

#[test]
fn add_path_execute_and_undo() {
    let canvas = canvas_with_layer();
    let layer_id = canvas.active_layer_id().unwrap();
    let path = test_path(0.0);
    let mut history = CommandHistory::new();

    let after = history.execute(Command::add_path(layer_id, path.clone()), &canvas);
    assert_eq!(after.active_layer().unwrap().paths(), &[path]);
    assert!(history.can_undo());

    let undone = history.undo(&after).unwrap();
    assert!(undone.active_layer().unwrap().paths().is_empty());
    assert!(undone.same_content(&canvas));
    assert!(history.can_redo());
}

#[test]
fn redo_reapplies_the_command() {
    let canvas = canvas_with_layer();
    let layer_id = canvas.active_layer_id().unwrap();
    let mut history = CommandHistory::new();

    let after = history.execute(Command::add_path(layer_id, test_path(0.0)), &canvas);
    let undone = history.undo(&after).unwrap();
    let redone = history.redo(&undone).unwrap();
    assert!(redone.same_content(&after));
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn new_command_clears_redo_history() {
    let canvas = canvas_with_layer();
    let layer_id = canvas.active_layer_id().unwrap();
    let mut history = CommandHistory::new();

    let after = history.execute(Command::add_path(layer_id, test_path(0.0)), &canvas);
    let undone = history.undo(&after).unwrap();
    assert!(history.can_redo());

    history.execute(Command::add_path(layer_id, test_path(50.0)), &undone);
    assert!(!history.can_redo());
}

#[test]
fn undo_and_redo_on_empty_stacks_are_noops() {
    let canvas = canvas_with_layer();
    let mut history = CommandHistory::new();
    assert!(history.undo(&canvas).is_none());
    assert!(history.redo(&canvas).is_none());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn add_layer_round_trip_restores_active_id() {
    let canvas = canvas_with_layer();
    let original_active = canvas.active_layer_id();
    let mut history = CommandHistory::new();

    let cmd = Command::add_layer(&canvas, Layer::vector("L2"), None);
    let after = history.execute(cmd, &canvas);
    assert_eq!(after.layers().len(), 2);
    assert_ne!(after.active_layer_id(), original_active);

    let undone = history.undo(&after).unwrap();
    assert!(undone.same_content(&canvas));
}

#[test]
fn delete_layer_round_trip_restores_z_order() {
    let base = Canvas::new("test", 800.0, 600.0)
        .with_layer_added(Layer::vector("bottom"), None)
        .with_layer_added(Layer::vector("middle"), None)
        .with_layer_added(Layer::vector("top"), None);
    let middle_id = base.layers()[1].id;
    let base = base.with_active_layer(middle_id);
    let mut history = CommandHistory::new();

    let cmd = Command::delete_layer(&base, middle_id).unwrap();
    let after = history.execute(cmd, &base);
    assert_eq!(after.layers().len(), 2);
    // The layer that slid into the removed slot becomes active.
    assert_eq!(after.active_layer().unwrap().name, "top");

    let undone = history.undo(&after).unwrap();
    assert_eq!(undone.layers()[1].name, "middle");
    assert!(undone.same_content(&base));
}

#[test]
fn delete_layer_with_unknown_id_yields_no_command() {
    let canvas = canvas_with_layer();
    assert!(Command::delete_layer(&canvas, uuid::Uuid::new_v4()).is_none());
}

#[test]
fn toggle_visibility_round_trip() {
    let canvas = canvas_with_layer();
    let layer_id = canvas.active_layer_id().unwrap();
    let mut history = CommandHistory::new();

    let after = history.execute(Command::toggle_layer_visibility(layer_id), &canvas);
    assert!(!after.active_layer().unwrap().visible);

    let undone = history.undo(&after).unwrap();
    assert!(undone.active_layer().unwrap().visible);
    assert!(undone.same_content(&canvas));
}

#[test]
fn toggle_visibility_on_unknown_layer_is_a_noop() {
    let canvas = canvas_with_layer();
    let mut history = CommandHistory::new();
    let after = history.execute(
        Command::toggle_layer_visibility(uuid::Uuid::new_v4()),
        &canvas,
    );
    assert!(after.same_content(&canvas));
}

#[test]
fn add_path_undo_removes_most_recent_duplicate() {
    // Two identical paths: undo removes one of them by value equality.
    let canvas = canvas_with_layer();
    let layer_id = canvas.active_layer_id().unwrap();
    let path = test_path(0.0);
    let mut history = CommandHistory::new();

    let one = history.execute(Command::add_path(layer_id, path.clone()), &canvas);
    let two = history.execute(Command::add_path(layer_id, path.clone()), &one);
    assert_eq!(two.active_layer().unwrap().paths().len(), 2);

    let undone = history.undo(&two).unwrap();
    assert_eq!(undone.active_layer().unwrap().paths().len(), 1);
}
