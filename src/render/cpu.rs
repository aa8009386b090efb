use crate::{
    assets::store::{PreparedImage, PreparedText},
    foundation::core::{Affine, Canvas, Placement},
    foundation::error::{MemeframeError, MemeframeResult},
    render::{
        FrameRGBA,
        surface::{CaptionStamp, CaptionSurface},
    },
};

/// CPU raster surface backed by a `vello_cpu` render context.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> MemeframeResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| MemeframeError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| MemeframeError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(MemeframeError::render("canvas must be non-empty"));
        }

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    fn image_paint_for(&self, image: &PreparedImage) -> MemeframeResult<vello_cpu::Image> {
        let pixmap =
            image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
        Ok(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }

    fn glyph_pass(&mut self, text: &PreparedText, font: &vello_cpu::peniko::FontData) {
        for line in text.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

impl CaptionSurface for CpuSurface {
    fn fill_background(&mut self, rgba: [u8; 4]) -> MemeframeResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            rgba[0], rgba[1], rgba[2], rgba[3],
        ));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn draw_image(&mut self, image: &PreparedImage, placement: Placement) -> MemeframeResult<()> {
        if image.width == 0 || image.height == 0 {
            return Err(MemeframeError::render("prepared image must be non-empty"));
        }

        let paint = self.image_paint_for(image)?;
        let sx = placement.width / f64::from(image.width);
        let sy = placement.height / f64::from(image.height);
        let transform = Affine::translate((placement.start_x, placement.start_y))
            * Affine::scale_non_uniform(sx, sy);

        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    fn draw_text(&mut self, text: &PreparedText, stamp: CaptionStamp) -> MemeframeResult<()> {
        let font_bytes = text.font_bytes.as_ref().clone();
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);

        // Outline first: the glyph run stamped once per ring direction at the
        // stroke radius, under the interior fill.
        if stamp.stroke_width_px > 0.0 {
            let w = stamp.stroke_width_px;
            self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                stamp.stroke_rgba8[0],
                stamp.stroke_rgba8[1],
                stamp.stroke_rgba8[2],
                stamp.stroke_rgba8[3],
            ));
            for (dx, dy) in [
                (-w, 0.0),
                (w, 0.0),
                (0.0, -w),
                (0.0, w),
                (-w, -w),
                (-w, w),
                (w, -w),
                (w, w),
            ] {
                let offset =
                    Affine::translate((stamp.origin.x + dx, stamp.origin.y + dy));
                self.ctx.set_transform(affine_to_cpu(offset));
                self.glyph_pass(text, &font);
            }
        }

        // Interior fill in the brush color carried by the layout.
        let brush = first_brush(text);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            brush.0, brush.1, brush.2, brush.3,
        ));
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate((
                stamp.origin.x,
                stamp.origin.y,
            ))));
        self.glyph_pass(text, &font);
        Ok(())
    }

    fn finish(&mut self) -> MemeframeResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn first_brush(text: &PreparedText) -> (u8, u8, u8, u8) {
    for line in text.layout.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                let b = run.style().brush;
                return (b.r, b.g, b.b, b.a);
            }
        }
    }
    (255, 255, 255, 255)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> MemeframeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| MemeframeError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| MemeframeError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(MemeframeError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}
