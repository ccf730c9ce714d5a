use std::sync::{Arc, Mutex};

use crate::moderation::{ContentModerator, ModerationConfig, ProfanityOracle, WordList};

pub(super) fn moderator() -> ContentModerator {
    ContentModerator::new(Arc::new(WordList::embedded()), ModerationConfig::default())
}

pub(super) fn moderator_with(oracle: Arc<dyn ProfanityOracle>) -> ContentModerator {
    ContentModerator::new(oracle, ModerationConfig::default())
}

pub(super) fn long_comment(chars: usize) -> String {
    let sentence = "The clinic staff were kind and the wait was short. ";
    sentence.chars().cycle().take(chars).collect()
}

/// Oracle stub that records every text it is asked about.
#[derive(Default)]
pub(super) struct RecordingOracle {
    pub(super) seen: Mutex<Vec<String>>,
    pub(super) flag_everything: bool,
}

impl RecordingOracle {
    pub(super) fn flagging() -> Self {
        Self {
            flag_everything: true,
            ..Self::default()
        }
    }

    pub(super) fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("oracle mutex poisoned").clone()
    }
}

impl ProfanityOracle for RecordingOracle {
    fn contains_profanity(&self, text: &str) -> bool {
        self.seen
            .lock()
            .expect("oracle mutex poisoned")
            .push(text.to_string());
        self.flag_everything
    }

    fn censor(&self, text: &str) -> String {
        text.to_string()
    }
}
