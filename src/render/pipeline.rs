use crate::{
    assets::store::{PreparedDoc, PreparedText},
    composition::model::{CaptionDoc, CaptionStyle},
    fit::solver::compute_placement,
    foundation::core::{Canvas, ContentSize, Point},
    foundation::error::MemeframeResult,
    render::{
        FrameRGBA,
        surface::{CaptionStamp, CaptionSurface},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The two caption positions on the canvas.
pub enum CaptionSlot {
    Top,
    Bottom,
}

/// Compose the letterboxed, fitted image with no caption text.
///
/// This is the frame shown right after an image loads, and again after a
/// caption is cleared.
#[tracing::instrument(skip_all)]
pub fn render_base_frame(
    doc: &CaptionDoc,
    prepared: &PreparedDoc,
    surface: &mut dyn CaptionSurface,
) -> MemeframeResult<FrameRGBA> {
    compose(doc, prepared, surface, false)
}

/// Compose the letterboxed, fitted image and stamp both caption slots.
#[tracing::instrument(skip_all)]
pub fn render_captioned_frame(
    doc: &CaptionDoc,
    prepared: &PreparedDoc,
    surface: &mut dyn CaptionSurface,
) -> MemeframeResult<FrameRGBA> {
    compose(doc, prepared, surface, true)
}

fn compose(
    doc: &CaptionDoc,
    prepared: &PreparedDoc,
    surface: &mut dyn CaptionSurface,
    stamp_captions: bool,
) -> MemeframeResult<FrameRGBA> {
    doc.validate()?;
    let frame = doc.frame()?;
    let content = ContentSize::from_pixels(prepared.image.width, prepared.image.height)?;
    let placement = compute_placement(frame, content);

    surface.fill_background(doc.style.letterbox_rgba8)?;
    surface.draw_image(&prepared.image, placement)?;

    if stamp_captions {
        if let Some(top) = &prepared.top {
            surface.draw_text(top, stamp_for(doc.canvas, &doc.style, top, CaptionSlot::Top))?;
        }
        if let Some(bottom) = &prepared.bottom {
            surface.draw_text(
                bottom,
                stamp_for(doc.canvas, &doc.style, bottom, CaptionSlot::Bottom),
            )?;
        }
    }

    surface.finish()
}

fn stamp_for(
    canvas: Canvas,
    style: &CaptionStyle,
    text: &PreparedText,
    slot: CaptionSlot,
) -> CaptionStamp {
    let (text_width, _) = text.size();
    CaptionStamp {
        origin: caption_origin(canvas, style, text_width, text.first_line_ascent(), slot),
        stroke_rgba8: style.stroke_rgba8,
        stroke_width_px: f64::from(style.stroke_width_px),
    }
}

/// Top-left origin for a caption slot: horizontally centered, with the first
/// baseline pinned near the frame's top or bottom edge.
pub fn caption_origin(
    canvas: Canvas,
    style: &CaptionStyle,
    text_width: f64,
    first_line_ascent: f64,
    slot: CaptionSlot,
) -> Point {
    let x = (f64::from(canvas.width) - text_width) / 2.0;
    let baseline_y = match slot {
        CaptionSlot::Top => f64::from(style.top_baseline_px),
        CaptionSlot::Bottom => f64::from(canvas.height) - f64::from(style.bottom_inset_px),
    };
    Point::new(x, baseline_y - first_line_ascent)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
