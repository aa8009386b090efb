use crate::{
    app::state::{CaptionStage, ControlStates},
    fit::solver::compute_placement,
    foundation::core::{ContentSize, Frame, Placement},
    foundation::error::MemeframeResult,
    speech::{
        roster::{Voice, VoiceRoster},
        synth::{SpeechSynth, Utterance},
        volume::{VolumeLevel, VolumeTier},
    },
};

/// Identifies one image-load attempt. A newer token supersedes all older
/// ones; decode completions carrying a stale token are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Top-level application state: the single current image, caption text,
/// voice roster, volume and workflow stage, owned in one place and mutated
/// only through the named event handlers below.
///
/// Everything here is single-threaded and synchronous; the platform layer
/// delivers its asynchronous notifications (decode completion, roster
/// change, clicks) by calling the matching handler. State is last-write-wins
/// throughout, never queued or merged.
pub struct StudioController {
    frame: Frame,
    stage: CaptionStage,
    load_seq: u64,
    content: Option<ContentSize>,
    top_text: String,
    bottom_text: String,
    roster: VoiceRoster,
    volume: VolumeLevel,
    synth: Box<dyn SpeechSynth>,
}

impl StudioController {
    pub fn new(frame: Frame, synth: Box<dyn SpeechSynth>) -> Self {
        Self {
            frame,
            stage: CaptionStage::Empty,
            load_seq: 0,
            content: None,
            top_text: String::new(),
            bottom_text: String::new(),
            roster: VoiceRoster::new(),
            volume: VolumeLevel::default(),
            synth,
        }
    }

    /// The user picked a (new) file. Returns the token the eventual decode
    /// completion must present; any load still in flight is superseded.
    pub fn on_upload_changed(&mut self) -> LoadToken {
        self.load_seq += 1;
        LoadToken(self.load_seq)
    }

    /// A picked file finished decoding. Stale completions (superseded by a
    /// later upload) return `None` and leave all state untouched; the
    /// freshest one replaces the current content wholesale and yields the
    /// placement to draw it at.
    #[tracing::instrument(skip(self))]
    pub fn on_image_decoded(
        &mut self,
        token: LoadToken,
        size: ContentSize,
    ) -> Option<Placement> {
        if token.0 != self.load_seq {
            return None;
        }
        self.content = Some(size);
        self.stage = self.stage.on_image_loaded();
        Some(compute_placement(self.frame, size))
    }

    pub fn on_top_text_changed(&mut self, text: impl Into<String>) {
        self.top_text = text.into();
    }

    pub fn on_bottom_text_changed(&mut self, text: impl Into<String>) {
        self.bottom_text = text.into();
    }

    /// Generate was clicked: stamp the captions (stage transition only; the
    /// caller re-renders via the pipeline).
    pub fn on_generate_clicked(&mut self) -> MemeframeResult<()> {
        self.stage = self.stage.try_generate()?;
        Ok(())
    }

    /// Clear was clicked: back to the blank-but-loaded-image state.
    pub fn on_clear_clicked(&mut self) -> MemeframeResult<()> {
        self.stage = self.stage.try_clear()?;
        Ok(())
    }

    /// Read-aloud was clicked: cancel any active utterance, then submit the
    /// concatenated caption text with the selected voice and volume.
    #[tracing::instrument(skip(self))]
    pub fn on_read_aloud_clicked(&mut self) -> MemeframeResult<()> {
        self.stage.check_read_aloud()?;

        let mut text = String::with_capacity(self.top_text.len() + self.bottom_text.len());
        text.push_str(&self.top_text);
        text.push_str(&self.bottom_text);

        let voice_name = self.roster.selected().map(|v| v.name.clone());
        let utterance = Utterance::new(text, voice_name, self.volume.normalized())?;

        self.synth.cancel_current();
        self.synth.speak(&utterance)
    }

    /// The provider's roster changed; rebuild the selection list from
    /// scratch. Safe to call repeatedly with the same snapshot.
    pub fn on_roster_changed(&mut self, voices: &[Voice]) {
        self.roster.repopulate(voices);
    }

    /// The user picked a voice by name.
    pub fn on_voice_selected(&mut self, name: &str) -> bool {
        self.roster.select(name)
    }

    /// The volume slider moved. Returns the icon tier for the new value.
    pub fn on_volume_changed(&mut self, volume: VolumeLevel) -> VolumeTier {
        self.volume = volume;
        volume.tier()
    }

    pub fn stage(&self) -> CaptionStage {
        self.stage
    }

    pub fn controls(&self) -> ControlStates {
        self.stage.controls()
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Natural size of the current image, if one has loaded.
    pub fn content(&self) -> Option<ContentSize> {
        self.content
    }

    /// Placement of the current image, computed fresh (never cached).
    pub fn placement(&self) -> Option<Placement> {
        self.content
            .map(|content| compute_placement(self.frame, content))
    }

    pub fn top_text(&self) -> &str {
        &self.top_text
    }

    pub fn bottom_text(&self) -> &str {
        &self.bottom_text
    }

    pub fn roster(&self) -> &VoiceRoster {
        &self.roster
    }

    pub fn volume(&self) -> VolumeLevel {
        self.volume
    }
}

impl std::fmt::Debug for StudioController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioController")
            .field("stage", &self.stage)
            .field("load_seq", &self.load_seq)
            .field("content", &self.content)
            .field("volume", &self.volume)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
