use sketch_engine::canvas::Canvas;
use sketch_engine::layer::Layer;
use uuid::Uuid;

fn three_layer_canvas() -> Canvas {
    Canvas::new("test", 800.0, 600.0)
        .with_layer_added(Layer::vector("A"), None)
        .with_layer_added(Layer::vector("B"), None)
        .with_layer_added(Layer::vector("C"), None)
}

#[test]
fn added_layer_becomes_active() {
    let canvas = three_layer_canvas();
    assert_eq!(canvas.layers().len(), 3);
    assert_eq!(canvas.active_layer().unwrap().name, "C");
}

#[test]
fn add_at_position_inserts_in_paint_order() {
    let canvas = three_layer_canvas().with_layer_added(Layer::vector("X"), Some(1));
    let names: Vec<&str> = canvas.layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["A", "X", "B", "C"]);
}

#[test]
fn removing_active_middle_layer_activates_successor() {
    let canvas = three_layer_canvas();
    let b_id = canvas.layers()[1].id;
    let canvas = canvas.with_active_layer(b_id);

    let after = after_removing(&canvas, b_id);
    // C now occupies B's former index and becomes active.
    assert_eq!(after.active_layer().unwrap().name, "C");
}

#[test]
fn removing_active_top_layer_activates_new_top() {
    let canvas = three_layer_canvas();
    let c_id = canvas.layers()[2].id;

    let after = after_removing(&canvas, c_id);
    assert_eq!(after.active_layer().unwrap().name, "B");
}

#[test]
fn removing_the_only_layer_clears_active_id() {
    let canvas = Canvas::new("test", 800.0, 600.0).with_layer_added(Layer::vector("solo"), None);
    let id = canvas.layers()[0].id;

    let after = canvas.with_layer_removed(id);
    assert!(after.layers().is_empty());
    assert_eq!(after.active_layer_id(), None);
}

#[test]
fn removing_inactive_layer_keeps_active_id() {
    let canvas = three_layer_canvas();
    let a_id = canvas.layers()[0].id;
    let active = canvas.active_layer_id();

    let after = after_removing(&canvas, a_id);
    assert_eq!(after.active_layer_id(), active);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let canvas = three_layer_canvas();
    let after = canvas.with_layer_removed(Uuid::new_v4());
    assert!(after.same_content(&canvas));
    assert_eq!(after.meta.modified_at, canvas.meta.modified_at);
}

#[test]
fn set_active_with_unknown_id_is_a_noop() {
    let canvas = three_layer_canvas();
    let after = canvas.with_active_layer(Uuid::new_v4());
    assert_eq!(after.active_layer_id(), canvas.active_layer_id());
}

#[test]
fn move_layer_reorders() {
    let canvas = three_layer_canvas().with_layer_moved(0, 2);
    let names: Vec<&str> = canvas.layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["B", "C", "A"]);

    let unchanged = canvas.with_layer_moved(0, 99);
    assert!(unchanged.same_content(&canvas));
}

#[test]
fn update_layer_maps_only_the_target() {
    let canvas = three_layer_canvas();
    let a_id = canvas.layers()[0].id;
    let after = canvas.with_layer_updated(a_id, |layer| layer.with_locked(true));
    assert!(after.layers()[0].locked);
    assert!(!after.layers()[1].locked);
}

#[test]
fn mutators_bump_modified_at() {
    let canvas = Canvas::new("test", 800.0, 600.0);
    let after = canvas.with_layer_added(Layer::vector("A"), None);
    assert!(after.meta.modified_at >= canvas.meta.modified_at);
    assert_eq!(after.meta.created_at, canvas.meta.created_at);
}

fn after_removing(canvas: &Canvas, id: Uuid) -> Canvas {
    let after = canvas.with_layer_removed(id);
    assert_eq!(after.layers().len(), canvas.layers().len() - 1);
    after
}
