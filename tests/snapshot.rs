use sketch_engine::brush::Brush;
use sketch_engine::canvas::Canvas;
use sketch_engine::geometry::Point;
use sketch_engine::layer::Layer;
use sketch_engine::snapshot::CanvasSnapshot;
use sketch_engine::stroke::DrawingPath;

fn populated_canvas() -> Canvas {
    let path = DrawingPath::new(
        Brush::air(12.0, 0.8, 0xFF33_66FF, 0.5),
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
    );
    let canvas = Canvas::new("sketch", 800.0, 600.0)
        .with_layer_added(Layer::vector("ink"), None)
        .with_layer_added(Layer::bitmap("photo", 640, 480), None);
    let ink_id = canvas.layers()[0].id;
    canvas
        .with_layer_updated(ink_id, |layer| layer.with_path_added(path.clone()))
        .with_active_layer(ink_id)
}

#[test]
fn json_round_trip_preserves_the_canvas() {
    let canvas = populated_canvas();
    let snapshot = CanvasSnapshot::new(&canvas);

    let json = snapshot.to_json().unwrap();
    let restored = CanvasSnapshot::from_json(&json).unwrap();

    assert_eq!(restored.canvas, canvas);
    assert_eq!(restored.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn snapshot_keeps_brush_and_path_detail() {
    let canvas = populated_canvas();
    let json = CanvasSnapshot::new(&canvas).to_json().unwrap();
    let restored = CanvasSnapshot::from_json(&json).unwrap();

    let layer = restored.canvas.active_layer().unwrap();
    assert_eq!(layer.paths().len(), 1);
    let brush = layer.paths()[0].brush();
    assert!((brush.size() - 12.0).abs() < 1e-6);
    assert_eq!(brush.color(), 0xFF33_66FF);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(CanvasSnapshot::from_json("{not json").is_err());
}

#[test]
fn dangling_active_layer_id_is_rejected() {
    let canvas = populated_canvas();
    let json = CanvasSnapshot::new(&canvas).to_json().unwrap();
    // Point the active-layer reference at a layer that does not exist.
    let json = json.replace(
        &format!("\"active_layer_id\":\"{}\"", canvas.active_layer_id().unwrap()),
        &format!("\"active_layer_id\":\"{}\"", uuid::Uuid::new_v4()),
    );
    let result = CanvasSnapshot::from_json(&json);
    assert!(result.is_err());
}

#[test]
fn inconsistent_active_layer_is_rejected() {
    let canvas = populated_canvas();
    let mut json = CanvasSnapshot::new(&canvas).to_json().unwrap();
    // Sever the active-layer reference.
    json = json.replace(
        &format!("\"active_layer_id\":\"{}\"", canvas.active_layer_id().unwrap()),
        "\"active_layer_id\":null",
    );
    let result = CanvasSnapshot::from_json(&json);
    assert!(result.is_err());
}
