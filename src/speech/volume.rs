use crate::foundation::error::{MemeframeError, MemeframeResult};

/// Integer volume in `0..=100`, the unit the volume slider reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    pub fn new(value: u8) -> MemeframeResult<Self> {
        if value > 100 {
            return Err(MemeframeError::validation(format!(
                "volume must be in 0..=100, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Linear normalization to `[0, 1]`, the unit speech capabilities take.
    pub fn normalized(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Discrete tier driving the volume icon swap.
    pub fn tier(self) -> VolumeTier {
        match self.0 {
            0 => VolumeTier::Mute,
            1..=33 => VolumeTier::Low,
            34..=66 => VolumeTier::Medium,
            _ => VolumeTier::High,
        }
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(100)
    }
}

/// Icon tier for the volume control. Purely visual; audio scaling always
/// uses [`VolumeLevel::normalized`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VolumeTier {
    Mute,
    Low,
    Medium,
    High,
}

impl VolumeTier {
    /// Index into the `volume-level-{n}` icon set.
    pub fn icon_index(self) -> u8 {
        match self {
            VolumeTier::Mute => 0,
            VolumeTier::Low => 1,
            VolumeTier::Medium => 2,
            VolumeTier::High => 3,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/volume.rs"]
mod tests;
