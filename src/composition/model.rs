use crate::foundation::{
    core::{Canvas, Frame},
    error::{MemeframeError, MemeframeResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete caption composition.
///
/// A caption document is a pure data model that can be:
/// - built programmatically
/// - serialized/deserialized via Serde (JSON)
///
/// Composing a document into pixels is performed by the pipeline:
/// [`crate::render_base_frame`] / [`crate::render_captioned_frame`].
pub struct CaptionDoc {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Relative path to the source image.
    pub image: String,
    /// Caption stamped near the top edge. Free text, no validation.
    #[serde(default)]
    pub top_text: String,
    /// Caption stamped near the bottom edge. Free text, no validation.
    #[serde(default)]
    pub bottom_text: String,
    /// Text styling shared by both caption slots.
    #[serde(default)]
    pub style: CaptionStyle,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Styling for caption text: font, size, stroke outline and fill.
pub struct CaptionStyle {
    /// Relative path to font file. May be empty when both caption slots are.
    #[serde(default)]
    pub font_source: String,
    /// Font size in pixels.
    #[serde(default = "default_size_px")]
    pub size_px: f32,
    /// Interior fill color as straight-alpha RGBA8.
    #[serde(default = "default_fill_rgba8")]
    pub fill_rgba8: [u8; 4],
    /// Outline stroke color as straight-alpha RGBA8.
    #[serde(default = "default_stroke_rgba8")]
    pub stroke_rgba8: [u8; 4],
    /// Outline stroke width in pixels.
    #[serde(default = "default_stroke_width_px")]
    pub stroke_width_px: f32,
    /// Baseline of the top caption, measured from the top edge.
    #[serde(default = "default_top_baseline_px")]
    pub top_baseline_px: f32,
    /// Gap between the bottom caption baseline and the bottom edge.
    #[serde(default = "default_bottom_inset_px")]
    pub bottom_inset_px: f32,
    /// Letterbox fill behind the fitted image, straight-alpha RGBA8.
    #[serde(default = "default_letterbox_rgba8")]
    pub letterbox_rgba8: [u8; 4],
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_source: String::new(),
            size_px: default_size_px(),
            fill_rgba8: default_fill_rgba8(),
            stroke_rgba8: default_stroke_rgba8(),
            stroke_width_px: default_stroke_width_px(),
            top_baseline_px: default_top_baseline_px(),
            bottom_inset_px: default_bottom_inset_px(),
            letterbox_rgba8: default_letterbox_rgba8(),
        }
    }
}

fn default_size_px() -> f32 {
    35.0
}

fn default_fill_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_stroke_rgba8() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_stroke_width_px() -> f32 {
    5.0
}

fn default_top_baseline_px() -> f32 {
    35.0
}

fn default_bottom_inset_px() -> f32 {
    8.0
}

fn default_letterbox_rgba8() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl CaptionDoc {
    /// Validate document invariants and the style payload.
    pub fn validate(&self) -> MemeframeResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MemeframeError::validation(
                "canvas width/height must be > 0",
            ));
        }
        validate_rel_source(&self.image, "image source")?;
        self.style
            .validate(self.has_caption_text())?;
        Ok(())
    }

    /// True when at least one caption slot holds non-empty text.
    pub fn has_caption_text(&self) -> bool {
        !self.top_text.is_empty() || !self.bottom_text.is_empty()
    }

    /// Destination frame derived from the canvas dimensions.
    pub fn frame(&self) -> MemeframeResult<Frame> {
        Frame::new(f64::from(self.canvas.width), f64::from(self.canvas.height))
    }
}

impl CaptionStyle {
    /// Validate style invariants. A font source is only required when some
    /// caption text will actually be stamped.
    pub fn validate(&self, requires_font: bool) -> MemeframeResult<()> {
        if requires_font {
            validate_rel_source(&self.font_source, "style font_source")?;
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(MemeframeError::validation(
                "style size_px must be finite and > 0",
            ));
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px < 0.0 {
            return Err(MemeframeError::validation(
                "style stroke_width_px must be finite and >= 0",
            ));
        }
        if !self.top_baseline_px.is_finite() || self.top_baseline_px < 0.0 {
            return Err(MemeframeError::validation(
                "style top_baseline_px must be finite and >= 0",
            ));
        }
        if !self.bottom_inset_px.is_finite() || self.bottom_inset_px < 0.0 {
            return Err(MemeframeError::validation(
                "style bottom_inset_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

fn validate_rel_source(source: &str, field: &str) -> MemeframeResult<()> {
    if source.trim().is_empty() {
        return Err(MemeframeError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(MemeframeError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(MemeframeError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
