use crate::foundation::error::{MemeframeError, MemeframeResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// The fixed destination rectangle a caption is composed into.
///
/// Dimensions are set once when the canvas is created and stay immutable for
/// its life. Construction rejects non-positive or non-finite values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> MemeframeResult<Self> {
        validate_dimension(width, "frame width")?;
        validate_dimension(height, "frame height")?;
        Ok(Self { width, height })
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// A source image's natural (undistorted) pixel dimensions.
///
/// One per uploaded image; replaced wholesale on each new upload.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentSize {
    width: f64,
    height: f64,
}

impl ContentSize {
    pub fn new(width: f64, height: f64) -> MemeframeResult<Self> {
        validate_dimension(width, "content width")?;
        validate_dimension(height, "content height")?;
        Ok(Self { width, height })
    }

    pub fn from_pixels(width: u32, height: u32) -> MemeframeResult<Self> {
        Self::new(f64::from(width), f64::from(height))
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// width / height. Always finite and positive for a constructed value.
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }
}

/// Output canvas dimensions in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Scaled content size plus the top-left offset at which to draw it.
///
/// Ephemeral output of [`crate::compute_placement`]: computed fresh for
/// every draw, never cached or mutated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Scaled content width.
    pub width: f64,
    /// Scaled content height.
    pub height: f64,
    /// Left edge offset inside the frame.
    pub start_x: f64,
    /// Top edge offset inside the frame.
    pub start_y: f64,
}

impl Placement {
    /// Destination rectangle inside the frame.
    pub fn rect(self) -> Rect {
        Rect::new(
            self.start_x,
            self.start_y,
            self.start_x + self.width,
            self.start_y + self.height,
        )
    }
}

fn validate_dimension(value: f64, what: &str) -> MemeframeResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MemeframeError::invalid_dimensions(format!(
            "{what} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}
