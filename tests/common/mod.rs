use std::sync::Mutex;

use once_cell::sync::Lazy;
use subfolio::config::PreferencesManager;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated preferences manager backed by a unique directory.
pub fn setup_preferences_manager() -> PreferencesManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    PreferencesManager::with_base_dir(base).expect("create preferences manager for temp dir")
}
