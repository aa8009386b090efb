/// One entry in the externally provided voice roster.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Voice {
    /// Stable voice name, the key used to select a voice for an utterance.
    pub name: String,
    /// BCP-47 style language tag reported by the provider.
    pub language: String,
    /// Whether the provider marks this voice as its default.
    pub is_default: bool,
}

impl Voice {
    /// Human-readable selection label: `"Name (lang)"`, with a `-- DEFAULT`
    /// suffix on the provider default.
    pub fn display_label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.language);
        if self.is_default {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

/// The enumerable, dynamically updated list of available speech voices.
///
/// The provider pushes a fresh snapshot on every change notification;
/// [`VoiceRoster::repopulate`] rebuilds the list from scratch each time, so
/// repeated notifications with the same snapshot are idempotent. The current
/// selection does NOT survive repopulation: it resets to the provider
/// default (or the first entry). That reset is documented behavior, not a
/// bug to paper over.
#[derive(Clone, Debug, Default)]
pub struct VoiceRoster {
    entries: Vec<Voice>,
    selected: Option<usize>,
}

impl VoiceRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all entries with `voices`, dropping duplicate names (first
    /// occurrence wins) and resetting the selection.
    pub fn repopulate(&mut self, voices: &[Voice]) {
        self.entries.clear();
        for voice in voices {
            if self.entries.iter().any(|v| v.name == voice.name) {
                continue;
            }
            self.entries.push(voice.clone());
        }

        self.selected = if self.entries.is_empty() {
            None
        } else {
            Some(
                self.entries
                    .iter()
                    .position(|v| v.is_default)
                    .unwrap_or(0),
            )
        };
    }

    pub fn entries(&self) -> &[Voice] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&Voice> {
        self.selected.map(|idx| &self.entries[idx])
    }

    /// Select the entry named `name`. Returns false (selection unchanged)
    /// when no such entry exists.
    pub fn select(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|v| v.name == name) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/roster.rs"]
mod tests;
