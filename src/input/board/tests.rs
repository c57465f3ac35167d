use super::*;
use crate::draw::color::BLUE;
use crate::draw::{Canvas, DrawCommand, RecordingContext};
use std::f64::consts::PI;

fn create_test_board() -> Board {
    let mut config = Config::default();
    config.canvas.width = 200;
    config.canvas.height = 100;
    config.drawing.default_radius = 10.0;
    Board::new(&config)
}

fn recording_canvas() -> Canvas<RecordingContext> {
    Canvas::new(RecordingContext::new(200.0, 100.0), BLUE)
}

#[test]
fn test_new_board_centers_circle() {
    let board = create_test_board();
    assert_eq!(board.tool(), Tool::Circle);
    assert_eq!(board.circle().center(), Point::new(100.0, 50.0));
    assert_eq!(board.circle().radius(), 10.0);
    assert!(board.shapes().is_empty());
    assert!(board.needs_redraw());
}

#[test]
fn test_click_moves_circle() {
    let mut board = create_test_board();
    board.on_click(30.0, 40.0);
    assert_eq!(board.circle().center(), Point::new(30.0, 40.0));
    assert!(board.polygon().is_empty());
    assert!(board.ruler().is_empty());
}

#[test]
fn test_click_routes_to_active_tool() {
    let mut board = create_test_board();
    board.set_tool(Tool::Polygon);
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)] {
        board.on_click(x, y);
    }
    assert_eq!(board.polygon().len(), 3);
    assert_eq!(board.measure(), Ok(Measurement::Area(2.0)));

    board.set_tool(Tool::Ruler);
    board.on_click(0.0, 0.0);
    board.on_click(3.0, 4.0);
    assert_eq!(board.measure(), Ok(Measurement::Length(5.0)));
    assert_eq!(board.ruler_length(), 5.0);
    assert_eq!(board.polygon().len(), 3);
}

#[test]
fn test_host_click_is_translated() {
    let mut board = create_test_board();
    let canvas = Canvas::with_origin(
        RecordingContext::new(200.0, 100.0),
        BLUE,
        Point::new(50.0, 50.0),
    );
    board.on_host_click(&canvas, 60.0, 70.0);
    assert_eq!(board.circle().center(), Point::new(10.0, 20.0));
}

#[test]
fn test_render_clears_redraw_flag() {
    let mut board = create_test_board();
    let mut canvas = recording_canvas();
    board.render(&mut canvas);
    assert!(!board.needs_redraw());

    board.on_click(1.0, 1.0);
    assert!(board.needs_redraw());
    board.render(&mut canvas);
    assert!(!board.needs_redraw());
}

#[test]
fn test_render_clears_then_draws() {
    let mut board = create_test_board();
    board.commit();
    board.on_click(20.0, 20.0);

    let mut canvas = recording_canvas();
    canvas.context_mut().take_commands();
    board.render(&mut canvas);

    let commands = canvas.context().commands();
    assert_eq!(
        commands[0],
        DrawCommand::ClearRect {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        }
    );
    // committed circle plus the working one
    assert_eq!(canvas.context().stroke_count(), 2);
}

#[test]
fn test_commit_polygon_resets_working_shape() {
    let mut board = create_test_board();
    board.set_tool(Tool::Polygon);
    assert!(!board.commit(), "empty polygon should not be committed");

    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)] {
        board.on_click(x, y);
    }
    assert!(board.commit());
    assert!(board.polygon().is_empty());
    assert_eq!(board.total_area(), Ok(2.0));
}

#[test]
fn test_commit_sums_areas() {
    let mut board = create_test_board();
    board.set_radius(1.0);
    assert!(board.commit());

    board.set_tool(Tool::Polygon);
    for (x, y) in [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)] {
        board.on_click(x, y);
    }
    assert!(board.commit());
    assert_eq!(board.total_area(), Ok(PI + 3.0));
}

#[test]
fn test_ruler_is_never_committed() {
    let mut board = create_test_board();
    board.set_tool(Tool::Ruler);
    board.on_click(0.0, 0.0);
    board.on_click(3.0, 4.0);
    assert!(!board.commit());
    assert!(board.shapes().is_empty());
}

#[test]
fn test_commit_respects_shape_limit() {
    let mut config = Config::default();
    config.limits.max_shapes = 1;
    let mut board = Board::new(&config);
    assert!(board.commit());
    assert!(!board.commit());
    assert_eq!(board.shapes().len(), 1);
}

#[test]
fn test_negative_radius_surfaces_on_measure() {
    let mut board = create_test_board();
    board.set_radius(-3.0);
    assert_eq!(board.measure(), Err(ShapeError::NegativeRadius(-3.0)));

    assert!(board.commit());
    assert!(board.total_area().is_err());
}

#[test]
fn test_remove_shape() {
    let mut board = create_test_board();
    board.commit();
    let mut canvas = recording_canvas();
    board.render(&mut canvas);

    assert!(!board.remove_shape(5));
    assert!(!board.needs_redraw());
    assert!(board.remove_shape(0));
    assert!(board.needs_redraw());
    assert!(board.shapes().is_empty());
}

#[test]
fn test_clear_active_only_touches_active_tool() {
    let mut board = create_test_board();
    board.set_tool(Tool::Polygon);
    board.on_click(1.0, 1.0);
    board.set_tool(Tool::Ruler);
    board.on_click(1.0, 1.0);

    board.clear_active();
    assert!(board.ruler().is_empty());
    assert_eq!(board.polygon().len(), 1);
}

#[test]
fn test_clear_all() {
    let mut board = create_test_board();
    board.commit();
    board.set_tool(Tool::Polygon);
    board.on_click(1.0, 1.0);

    board.clear_all();
    assert!(board.shapes().is_empty());
    assert!(board.polygon().is_empty());
    assert_eq!(board.total_area(), Ok(0.0));
}

#[test]
fn test_measurement_display() {
    assert_eq!(Measurement::Area(2.0).to_string(), "area: 2.000");
    assert_eq!(Measurement::Length(5.0).to_string(), "length: 5.000");
}
