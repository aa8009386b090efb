use crate::foundation::error::{MemeframeError, MemeframeResult};

/// One speech request: the caption text plus delivery parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Utterance {
    /// Text to read aloud.
    pub text: String,
    /// Roster voice name, or `None` for the capability's own default.
    pub voice_name: Option<String>,
    /// Linear volume in `[0, 1]`.
    pub volume01: f64,
}

impl Utterance {
    pub fn new(
        text: impl Into<String>,
        voice_name: Option<String>,
        volume01: f64,
    ) -> MemeframeResult<Self> {
        if !volume01.is_finite() || !(0.0..=1.0).contains(&volume01) {
            return Err(MemeframeError::validation(format!(
                "utterance volume must be in [0, 1], got {volume01}"
            )));
        }
        Ok(Self {
            text: text.into(),
            voice_name,
            volume01,
        })
    }
}

/// External text-to-speech capability.
///
/// Implementations hold at most one active utterance; callers cancel before
/// starting a new one (the controller enforces cancel-then-speak).
pub trait SpeechSynth {
    fn speak(&mut self, utterance: &Utterance) -> MemeframeResult<()>;

    fn cancel_current(&mut self);
}

/// No-op speech capability for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSynth;

impl SpeechSynth for NullSynth {
    fn speak(&mut self, _utterance: &Utterance) -> MemeframeResult<()> {
        Ok(())
    }

    fn cancel_current(&mut self) {}
}

#[cfg(test)]
#[path = "../../tests/unit/speech/synth.rs"]
mod tests;
