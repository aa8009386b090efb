//! Memeframe composes a captioned image onto a fixed-size canvas.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: `Frame + ContentSize -> Placement` (aspect-preserving scale
//!    and centering offsets, letterboxed rather than cropped)
//! 2. **Prepare**: `CaptionDoc -> PreparedDoc` (decode the image, shape the
//!    caption text; all IO front-loaded)
//! 3. **Compose**: `PreparedDoc -> FrameRGBA` via a [`CaptionSurface`]
//!    (letterbox fill, fitted image, stroked-and-filled caption stamps)
//! 4. **Read aloud** (optional): the caption text handed to a
//!    [`SpeechSynth`] with a roster voice and a `[0, 1]` volume
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: fitting and composing are pure and stable
//!   for a given input; no IO happens past [`PreparedDoc::prepare`].
//! - **Single-threaded, event-driven**: [`StudioController`] owns all
//!   mutable application state and applies platform events synchronously,
//!   last write wins.
//! - **Premultiplied RGBA8** end-to-end: surfaces output premultiplied
//!   pixels.
#![forbid(unsafe_code)]

mod app;
mod assets;
mod composition;
mod fit;
mod foundation;
mod render;
mod speech;

pub use app::controller::{LoadToken, StudioController};
pub use app::state::{CaptionStage, ControlStates};
pub use assets::decode::decode_image;
pub use assets::store::{
    PreparedDoc, PreparedImage, PreparedText, TextBrushRgba8, TextLayoutEngine, normalize_rel_path,
};
pub use composition::model::{CaptionDoc, CaptionStyle};
pub use fit::solver::compute_placement;
pub use foundation::core::{Affine, Canvas, ContentSize, Frame, Placement, Point, Rect, Vec2};
pub use foundation::error::{MemeframeError, MemeframeResult};
pub use render::FrameRGBA;
pub use render::cpu::CpuSurface;
pub use render::pipeline::{
    CaptionSlot, caption_origin, render_base_frame, render_captioned_frame,
};
pub use render::surface::{CaptionStamp, CaptionSurface};
pub use speech::roster::{Voice, VoiceRoster};
pub use speech::synth::{NullSynth, SpeechSynth, Utterance};
pub use speech::volume::{VolumeLevel, VolumeTier};
