use crate::{
    assets::store::{PreparedImage, PreparedText},
    foundation::core::{Placement, Point},
    foundation::error::MemeframeResult,
    render::FrameRGBA,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Position and outline parameters for stamping one caption slot.
pub struct CaptionStamp {
    /// Top-left origin of the laid-out text inside the frame.
    pub origin: Point,
    /// Outline color as straight-alpha RGBA8.
    pub stroke_rgba8: [u8; 4],
    /// Outline width in pixels. Zero disables the outline pass.
    pub stroke_width_px: f64,
}

/// Drawing seam between the compose pipeline and a concrete raster target.
///
/// Calls arrive in paint order: background fill first, then the fitted
/// image, then caption stamps. A surface is single-use: `finish` reads the
/// composed pixels back and leaves the surface consumed.
pub trait CaptionSurface {
    /// Flood the whole frame with `rgba` (the letterbox fill).
    fn fill_background(&mut self, rgba: [u8; 4]) -> MemeframeResult<()>;

    /// Draw `image` scaled into `placement`.
    fn draw_image(&mut self, image: &PreparedImage, placement: Placement) -> MemeframeResult<()>;

    /// Stamp caption text: outline pass under an interior fill pass.
    fn draw_text(&mut self, text: &PreparedText, stamp: CaptionStamp) -> MemeframeResult<()>;

    /// Read back the composed frame.
    fn finish(&mut self) -> MemeframeResult<FrameRGBA>;
}
