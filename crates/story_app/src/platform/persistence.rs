use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use story_core::PreferenceStore;
use story_engine::AtomicFileWriter;
use story_logging::{story_error, story_info, story_warn};

const STATE_FILENAME: &str = ".story_search_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

/// Preference store backed by a RON file in `dir`.
///
/// Every `set` rewrites the file atomically. Read and write failures are
/// logged and never surface to the caller.
pub(crate) struct FilePreferenceStore {
    dir: PathBuf,
    state: PersistedState,
}

impl FilePreferenceStore {
    pub(crate) fn open(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            state: load_state(dir),
        }
    }

    fn save(&self) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&self.state, pretty) {
            Ok(text) => text,
            Err(err) => {
                story_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write(STATE_FILENAME, &content) {
            story_error!("Failed to write preferences to {:?}: {}", self.dir, err);
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.state.preferences.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.state
            .preferences
            .insert(key.to_string(), value.to_string());
        self.save();
    }
}

fn load_state(dir: &Path) -> PersistedState {
    let path = dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return PersistedState::default();
        }
        Err(err) => {
            story_warn!("Failed to read preferences from {:?}: {}", path, err);
            return PersistedState::default();
        }
    };

    match ron::from_str(&content) {
        Ok(state) => {
            story_info!("Loaded preferences from {:?}", path);
            state
        }
        Err(err) => {
            story_warn!("Failed to parse preferences from {:?}: {}", path, err);
            PersistedState::default()
        }
    }
}
