use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode as assets_decode,
    composition::model::CaptionDoc,
    foundation::error::{MemeframeError, MemeframeResult},
};

#[derive(Clone, Debug)]
/// Prepared raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Clone)]
/// Prepared caption text: shaped layout plus backing font data.
pub struct PreparedText {
    /// Fully built text layout ready for rendering.
    pub layout: Arc<parley::Layout<TextBrushRgba8>>,
    /// Original font bytes used to build glyph outlines.
    pub font_bytes: Arc<Vec<u8>>,
    /// Primary detected family name from font data.
    pub font_family: String,
}

impl std::fmt::Debug for PreparedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedText")
            .field("layout_ptr", &Arc::as_ptr(&self.layout))
            .field("font_bytes_len", &self.font_bytes.len())
            .field("font_family", &self.font_family)
            .finish()
    }
}

impl PreparedText {
    /// Laid-out text extents (max line advance, summed line heights).
    pub fn size(&self) -> (f64, f64) {
        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in self.layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        (w, h)
    }

    /// Ascent of the first laid-out line, used to place a baseline.
    pub fn first_line_ascent(&self) -> f64 {
        self.layout
            .lines()
            .next()
            .map(|line| f64::from(line.metrics().ascent))
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Debug)]
/// All IO-backed inputs of a caption composition, decoded and shaped up
/// front so the render stages stay deterministic and IO-free.
pub struct PreparedDoc {
    /// Decoded source image.
    pub image: PreparedImage,
    /// Shaped top caption, when the slot holds text.
    pub top: Option<PreparedText>,
    /// Shaped bottom caption, when the slot holds text.
    pub bottom: Option<PreparedText>,
}

impl PreparedDoc {
    /// Prepare every input referenced by `doc` using filesystem root `root`.
    pub fn prepare(doc: &CaptionDoc, root: impl Into<PathBuf>) -> MemeframeResult<Self> {
        let root = root.into();
        doc.validate()?;

        let image_bytes = read_bytes(&root, &normalize_rel_path(&doc.image)?)?;
        let image = assets_decode::decode_image(&image_bytes)?;

        let mut top = None;
        let mut bottom = None;
        if doc.has_caption_text() {
            let font_bytes = read_bytes(&root, &normalize_rel_path(&doc.style.font_source)?)?;
            let brush = TextBrushRgba8 {
                r: doc.style.fill_rgba8[0],
                g: doc.style.fill_rgba8[1],
                b: doc.style.fill_rgba8[2],
                a: doc.style.fill_rgba8[3],
            };

            let mut text_engine = TextLayoutEngine::new();
            if !doc.top_text.is_empty() {
                top = Some(text_engine.layout_caption(
                    &doc.top_text,
                    &font_bytes,
                    doc.style.size_px,
                    brush,
                )?);
            }
            if !doc.bottom_text.is_empty() {
                bottom = Some(text_engine.layout_caption(
                    &doc.bottom_text,
                    &font_bytes,
                    doc.style.size_px,
                    brush,
                )?);
            }
        }

        Ok(Self { image, top, bottom })
    }
}

fn read_bytes(root: &Path, norm_path: &str) -> MemeframeResult<Vec<u8>> {
    let path = root.join(Path::new(norm_path));
    std::fs::read(&path)
        .with_context(|| format!("read bytes from '{}'", path.display()))
        .map_err(MemeframeError::from)
}

/// Normalize and validate document-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> MemeframeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(MemeframeError::validation("paths must be relative"));
    }
    if s.is_empty() {
        return Err(MemeframeError::validation("path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(MemeframeError::validation("paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(MemeframeError::validation("path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out one caption slot using provided font bytes.
    ///
    /// Captions are single logical lines: no wrap width is applied, matching
    /// the fixed-canvas stamping model.
    pub fn layout_caption(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> MemeframeResult<PreparedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MemeframeError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            MemeframeError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MemeframeError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(PreparedText {
            layout: Arc::new(layout),
            font_bytes: Arc::new(font_bytes.to_vec()),
            font_family: family_name,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
