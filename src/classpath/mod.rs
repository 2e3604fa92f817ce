//! Classpath assembly for a game install
//!
//! The classpath starts with the vanilla version jar, followed by every jar
//! under `libraries/` in lexicographic path order. Callers prepend injected
//! entries (the loader) so the JVM resolves their classes first.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{
    Result, SledgeError,
    fs::read_failed,
    launch::version_jar_not_found,
};

/// `<install>/versions/<version>/<version>.jar`
pub fn version_jar_path(install_dir: &Path, version: &str) -> PathBuf {
    install_dir
        .join("versions")
        .join(version)
        .join(format!("{version}.jar"))
}

/// Ordered set of absolute classpath entries
#[derive(Debug, Default, Clone)]
pub struct ClasspathSet {
    entries: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl ClasspathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns false if it was already present
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.entries.push(path);
        true
    }

    /// Put an entry ahead of all others, moving it if already present
    pub fn prepend(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if self.seen.contains(&path) {
            self.entries.retain(|entry| entry != &path);
        } else {
            self.seen.insert(path.clone());
        }
        self.entries.insert(0, path);
    }

    #[allow(dead_code)]
    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    /// Join with the platform path separator for `-cp`
    pub fn join(&self) -> Result<OsString> {
        std::env::join_paths(&self.entries).map_err(|e| SledgeError::IoError {
            message: format!("Cannot build classpath: {e}"),
        })
    }
}

/// Build the classpath for `version` under `install_dir`.
///
/// Fails if the version jar is missing. A missing `libraries/` directory
/// simply contributes no entries.
pub fn build(install_dir: &Path, version: &str) -> Result<ClasspathSet> {
    let version_jar = version_jar_path(install_dir, version);
    if !version_jar.is_file() {
        return Err(version_jar_not_found(&version_jar, version));
    }

    let mut classpath = ClasspathSet::new();
    classpath.insert(absolute(&version_jar)?);

    let libraries_dir = install_dir.join("libraries");
    if libraries_dir.is_dir() {
        let jars = discover_jars(&libraries_dir)?;
        tracing::debug!(
            libraries = %libraries_dir.display(),
            count = jars.len(),
            "scanned libraries"
        );
        for jar in jars {
            classpath.insert(jar);
        }
    }

    Ok(classpath)
}

/// Every `.jar` file below `dir`, absolute and sorted
fn discover_jars(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut jars = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            read_failed(&path, e)
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "jar") && path.is_file() {
            jars.push(absolute(path)?);
        }
    }
    jars.sort();
    jars.dedup();
    Ok(jars)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| read_failed(path, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_fixtures::GameDir;

    #[test]
    fn test_missing_version_jar_is_not_found() {
        let game = GameDir::new();
        let err = build(game.root(), "1.21.4").unwrap_err();
        let expected = version_jar_path(game.root(), "1.21.4");
        assert!(matches!(err, SledgeError::VersionJarNotFound { .. }));
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_version_jar_only_without_libraries() {
        let game = GameDir::new().with_version_jar("1.21.4");
        let classpath = build(game.root(), "1.21.4").unwrap();
        assert_eq!(classpath.len(), 1);
        assert_eq!(
            classpath.iter().next().unwrap(),
            game.join("versions/1.21.4/1.21.4.jar")
        );
    }

    #[test]
    fn test_libraries_sorted_after_version_jar() {
        let game = GameDir::new()
            .with_version_jar("1.21.4")
            .with_library("org/zeta/z/1.0/z-1.0.jar")
            .with_library("com/alpha/a/2.0/a-2.0.jar")
            .with_library("com/alpha/a/1.0/a-1.0.jar")
            .with_library("com/alpha/a/1.0/a-1.0.pom")
            .with_library("net/beta/README.txt");

        let classpath = build(game.root(), "1.21.4").unwrap();
        let entries: Vec<_> = classpath.iter().map(Path::to_path_buf).collect();

        assert_eq!(
            entries,
            vec![
                game.join("versions/1.21.4/1.21.4.jar"),
                game.join("libraries/com/alpha/a/1.0/a-1.0.jar"),
                game.join("libraries/com/alpha/a/2.0/a-2.0.jar"),
                game.join("libraries/org/zeta/z/1.0/z-1.0.jar"),
            ]
        );
    }

    #[test]
    fn test_same_file_name_in_different_dirs_kept_once_each() {
        let game = GameDir::new()
            .with_version_jar("1.21")
            .with_library("a/lib.jar")
            .with_library("a/nested/lib.jar")
            .with_library("b/lib.jar");

        let classpath = build(game.root(), "1.21").unwrap();
        assert_eq!(classpath.len(), 4);
        let unique: HashSet<_> = classpath.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_directory_named_like_jar_is_skipped() {
        let game = GameDir::new()
            .with_version_jar("1.21")
            .with_library("weird.jar/inner.jar");

        let classpath = build(game.root(), "1.21").unwrap();
        let entries: Vec<_> = classpath.iter().map(Path::to_path_buf).collect();
        assert_eq!(
            entries,
            vec![
                game.join("versions/1.21/1.21.jar"),
                game.join("libraries/weird.jar/inner.jar"),
            ]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ClasspathSet::new();
        assert!(set.insert("/a.jar"));
        assert!(!set.insert("/a.jar"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_prepend_moves_existing_entry_to_front() {
        let mut set = ClasspathSet::new();
        set.insert("/a.jar");
        set.insert("/b.jar");
        set.prepend("/loader.jar");
        set.prepend("/b.jar");

        let entries: Vec<_> = set.iter().map(Path::to_path_buf).collect();
        assert_eq!(
            entries,
            vec![
                PathBuf::from("/b.jar"),
                PathBuf::from("/loader.jar"),
                PathBuf::from("/a.jar")
            ]
        );
        assert!(set.contains(Path::new("/loader.jar")));
    }

    #[test]
    fn test_join_uses_platform_separator() {
        let mut set = ClasspathSet::new();
        set.insert("/a.jar");
        set.insert("/b.jar");
        let joined = set.join().unwrap();
        let separator = if cfg!(windows) { ";" } else { ":" };
        assert_eq!(joined, OsString::from(format!("/a.jar{separator}/b.jar")));
    }
}
