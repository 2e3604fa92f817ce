//! Java runtime discovery

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Pick the Java executable used to start the game.
///
/// An explicit path wins; otherwise `$JAVA_HOME/bin/java` when it exists,
/// falling back to `java` resolved through `PATH` at spawn time.
pub fn java_executable(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(java_home) = std::env::var_os("JAVA_HOME") {
        let candidate = java_in_home(Path::new(&java_home));
        if candidate.is_file() {
            return candidate;
        }
        tracing::debug!(candidate = %candidate.display(), "JAVA_HOME has no java binary");
    }

    PathBuf::from(format!("java{EXE_SUFFIX}"))
}

fn java_in_home(java_home: &Path) -> PathBuf {
    java_home.join("bin").join(format!("java{EXE_SUFFIX}"))
}
