use crate::foundation::error::{MemeframeError, MemeframeResult};

/// The caption workflow's three stages.
///
/// Legal transitions:
///
/// ```text
/// Empty --image loaded--> ImageLoaded --generate--> Captioned
///                ^                ^                      |
///                |                +-------clear---------+
///                +--- (a new image load from any stage)
/// ```
///
/// `Captioned` is exited only via clear, which returns to `ImageLoaded`
/// (the image stays loaded, the canvas is redrawn without captions).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CaptionStage {
    /// No image loaded yet; everything but upload is disabled.
    #[default]
    Empty,
    /// An image is fitted onto the canvas; generate is available.
    ImageLoaded,
    /// Captions are stamped; clear and read-aloud are available.
    Captioned,
}

/// Enablement of the three mutually dependent controls, derived from the
/// stage rather than toggled ad hoc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ControlStates {
    pub generate: bool,
    pub clear: bool,
    pub read_aloud: bool,
}

impl CaptionStage {
    /// Control enablement for this stage. Failures are avoided by gating
    /// availability on these preconditions; there is no retry logic.
    pub fn controls(self) -> ControlStates {
        match self {
            CaptionStage::Empty => ControlStates {
                generate: false,
                clear: false,
                read_aloud: false,
            },
            CaptionStage::ImageLoaded => ControlStates {
                generate: true,
                clear: false,
                read_aloud: false,
            },
            CaptionStage::Captioned => ControlStates {
                generate: false,
                clear: true,
                read_aloud: true,
            },
        }
    }

    /// A finished image load lands in `ImageLoaded` from any stage: a new
    /// upload supersedes whatever was on the canvas.
    pub fn on_image_loaded(self) -> CaptionStage {
        CaptionStage::ImageLoaded
    }

    /// Guarded generate transition.
    pub fn try_generate(self) -> MemeframeResult<CaptionStage> {
        match self {
            CaptionStage::ImageLoaded => Ok(CaptionStage::Captioned),
            _ => Err(MemeframeError::validation(
                "generate requires a loaded, uncaptioned image",
            )),
        }
    }

    /// Guarded clear transition.
    pub fn try_clear(self) -> MemeframeResult<CaptionStage> {
        match self {
            CaptionStage::Captioned => Ok(CaptionStage::ImageLoaded),
            _ => Err(MemeframeError::validation("clear requires a caption")),
        }
    }

    /// Read-aloud does not change stage; this guards its precondition.
    pub fn check_read_aloud(self) -> MemeframeResult<()> {
        match self {
            CaptionStage::Captioned => Ok(()),
            _ => Err(MemeframeError::validation("read aloud requires a caption")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
