use super::*;
use crate::foundation::core::Canvas;

fn doc() -> CaptionDoc {
    CaptionDoc {
        canvas: Canvas {
            width: 400,
            height: 400,
        },
        image: "assets/cat.png".to_string(),
        top_text: String::new(),
        bottom_text: String::new(),
        style: CaptionStyle::default(),
    }
}

#[test]
fn minimal_json_fills_style_defaults() {
    let parsed: CaptionDoc = serde_json::from_str(
        r#"{"canvas":{"width":400,"height":400},"image":"assets/cat.png"}"#,
    )
    .unwrap();
    assert_eq!(parsed.top_text, "");
    assert_eq!(parsed.bottom_text, "");
    assert_eq!(parsed.style.size_px, 35.0);
    assert_eq!(parsed.style.stroke_width_px, 5.0);
    assert_eq!(parsed.style.fill_rgba8, [255, 255, 255, 255]);
    assert_eq!(parsed.style.stroke_rgba8, [0, 0, 0, 255]);
    assert_eq!(parsed.style.top_baseline_px, 35.0);
    assert_eq!(parsed.style.bottom_inset_px, 8.0);
    assert_eq!(parsed.style.letterbox_rgba8, [0, 0, 0, 255]);
    parsed.validate().unwrap();
}

#[test]
fn rejects_empty_canvas() {
    let mut d = doc();
    d.canvas.width = 0;
    assert!(d.validate().is_err());
}

#[test]
fn rejects_absolute_or_traversing_image_paths() {
    let mut d = doc();
    d.image = "/etc/cat.png".to_string();
    assert!(d.validate().is_err());
    d.image = "../cat.png".to_string();
    assert!(d.validate().is_err());
}

#[test]
fn font_required_only_when_captions_present() {
    let mut d = doc();
    assert!(d.validate().is_ok(), "no captions, no font needed");

    d.top_text = "HELLO".to_string();
    assert!(d.validate().is_err(), "caption text requires a font source");

    d.style.font_source = "fonts/impact.ttf".to_string();
    d.validate().unwrap();
}

#[test]
fn rejects_non_finite_or_negative_style_values() {
    let mut d = doc();
    d.style.size_px = 0.0;
    assert!(d.validate().is_err());

    let mut d = doc();
    d.style.stroke_width_px = -1.0;
    assert!(d.validate().is_err());

    let mut d = doc();
    d.style.top_baseline_px = f32::NAN;
    assert!(d.validate().is_err());

    // Zero stroke width is legal: it just disables the outline pass.
    let mut d = doc();
    d.style.stroke_width_px = 0.0;
    d.validate().unwrap();
}

#[test]
fn has_caption_text_checks_both_slots() {
    let mut d = doc();
    assert!(!d.has_caption_text());
    d.bottom_text = "BOTTOM".to_string();
    assert!(d.has_caption_text());
}

#[test]
fn frame_matches_canvas() {
    let f = doc().frame().unwrap();
    assert_eq!(f.width(), 400.0);
    assert_eq!(f.height(), 400.0);
}
