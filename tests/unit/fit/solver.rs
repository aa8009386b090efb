use super::*;

fn square_frame() -> Frame {
    Frame::new(400.0, 400.0).unwrap()
}

fn placement(cw: f64, ch: f64) -> Placement {
    compute_placement(square_frame(), ContentSize::new(cw, ch).unwrap())
}

#[test]
fn landscape_fills_width_and_centers_vertically() {
    let p = placement(800.0, 400.0);
    assert_eq!(p.width, 400.0);
    assert_eq!(p.height, 200.0);
    assert_eq!(p.start_x, 0.0);
    assert_eq!(p.start_y, 100.0);
}

#[test]
fn portrait_fills_height_and_centers_horizontally() {
    let p = placement(400.0, 800.0);
    assert_eq!(p.width, 200.0);
    assert_eq!(p.height, 400.0);
    assert_eq!(p.start_x, 100.0);
    assert_eq!(p.start_y, 0.0);
}

#[test]
fn square_content_takes_landscape_branch() {
    let p = placement(400.0, 400.0);
    assert_eq!(p.width, 400.0);
    assert_eq!(p.height, 400.0);
    assert_eq!(p.start_x, 0.0);
    assert_eq!(p.start_y, 0.0);
}

#[test]
fn extreme_portrait_keeps_sub_pixel_width() {
    let p = placement(1.0, 1000.0);
    assert_eq!(p.height, 400.0);
    assert!((p.width - 0.4).abs() < 1e-12);
    assert!((p.start_x - 199.8).abs() < 1e-12);
    assert_eq!(p.start_y, 0.0);
}

#[test]
fn aspect_ratio_is_preserved() {
    for &(cw, ch) in &[
        (800.0, 400.0),
        (400.0, 800.0),
        (123.0, 457.0),
        (1.0, 1000.0),
        (1920.0, 1080.0),
    ] {
        let p = placement(cw, ch);
        let got = p.width / p.height;
        let want = cw / ch;
        assert!(
            ((got - want) / want).abs() < 1e-9,
            "aspect drift for {cw}x{ch}: got {got}, want {want}"
        );
    }
}

#[test]
fn square_frame_always_contains_content() {
    for &(cw, ch) in &[
        (800.0, 400.0),
        (400.0, 800.0),
        (3.0, 5.0),
        (5.0, 3.0),
        (4000.0, 1.0),
    ] {
        let p = placement(cw, ch);
        assert!(p.width <= 400.0 + 1e-9);
        assert!(p.height <= 400.0 + 1e-9);
        assert!(p.width == 400.0 || p.height == 400.0);
    }
}

#[test]
fn filled_axis_starts_at_origin() {
    // Exactly one zero offset, except square content in a square frame where
    // both offsets are zero.
    let p = placement(800.0, 400.0);
    assert!(p.start_x == 0.0 && p.start_y != 0.0);
    let p = placement(400.0, 800.0);
    assert!(p.start_y == 0.0 && p.start_x != 0.0);
    let p = placement(400.0, 400.0);
    assert!(p.start_x == 0.0 && p.start_y == 0.0);
}

#[test]
fn identical_inputs_yield_identical_placements() {
    let frame = square_frame();
    let content = ContentSize::new(123.0, 457.0).unwrap();
    assert_eq!(
        compute_placement(frame, content),
        compute_placement(frame, content)
    );
}

#[test]
fn non_square_frame_can_overflow_the_unfilled_axis() {
    // The branch choice looks only at the content's aspect ratio, never the
    // frame's. In a wide frame, barely-portrait content fills the height and
    // its scaled width overflows the frame; the placement goes negative on
    // start_x rather than clamping. Intended behavior for non-square frames
    // is unspecified upstream, so this documents the current contract.
    let frame = Frame::new(100.0, 400.0).unwrap();
    let content = ContentSize::new(390.0, 400.0).unwrap();
    let p = compute_placement(frame, content);
    assert_eq!(p.height, 400.0);
    assert!(p.width > frame.width());
    assert!(p.start_x < 0.0);
}
