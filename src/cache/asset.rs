//! Remote artifacts the launcher injects into the game
//!
//! Each [`Asset`] knows its Maven coordinate, where it lives in the remote
//! repository, its deterministic cache file name and where it is installed
//! under the game's `libraries/` tree.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Default artifact repository
pub const DEFAULT_REPOSITORY_URL: &str = "https://jitpack.io";

/// Maven group shared by every artifact
pub const GROUP: &str = "com.github.Astera-Solutions";

/// Pinned agent release
pub const AGENT_VERSION: &str = "agent-v1.0.0";

/// Pinned API release
pub const API_VERSION: &str = "v1.0.0";

const AGENT_ARTIFACT: &str = "SledgeMC-Agent";
const API_ARTIFACT: &str = "Sledge-API";
const LOADER_ARTIFACT: &str = "SledgeMC-Loader";

/// A named remote resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    /// Java agent, fixed version
    Agent,
    /// Modding API, fixed version
    Api,
    /// Loader built for one host version
    Loader { version: String },
}

impl Asset {
    pub fn loader(version: impl Into<String>) -> Self {
        Asset::Loader {
            version: version.into(),
        }
    }

    /// Maven artifact id
    pub fn artifact(&self) -> &'static str {
        match self {
            Asset::Agent => AGENT_ARTIFACT,
            Asset::Api => API_ARTIFACT,
            Asset::Loader { .. } => LOADER_ARTIFACT,
        }
    }

    /// Artifact version
    pub fn version(&self) -> &str {
        match self {
            Asset::Agent => AGENT_VERSION,
            Asset::Api => API_VERSION,
            Asset::Loader { version } => version,
        }
    }

    /// File name inside the cache root; distinct per loader version
    pub fn cache_file_name(&self) -> String {
        match self {
            Asset::Agent => format!("sledge-{AGENT_VERSION}.jar"),
            Asset::Api => format!("sledge-api-{API_VERSION}.jar"),
            Asset::Loader { version } => format!("sledge-loader-{version}.jar"),
        }
    }

    /// `<artifact>-<version>.jar`
    pub fn jar_name(&self) -> String {
        format!("{}-{}.jar", self.artifact(), self.version())
    }

    /// `group:artifact:version`
    pub fn coordinate(&self) -> String {
        format!("{GROUP}:{}:{}", self.artifact(), self.version())
    }

    /// Group, artifact and version as relative path segments
    fn relative_dir(&self) -> PathBuf {
        let mut dir: PathBuf = GROUP.split('.').collect();
        dir.push(self.artifact());
        dir.push(self.version());
        dir
    }

    /// Download URL under a repository base
    pub fn url(&self, repository: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            repository.trim_end_matches('/'),
            GROUP.replace('.', "/"),
            self.artifact(),
            self.version(),
            self.jar_name()
        )
    }

    /// Install location under a `libraries/` directory
    pub fn library_path(&self, libraries_dir: &Path) -> PathBuf {
        libraries_dir.join(self.relative_dir()).join(self.jar_name())
    }

    /// Library descriptor for a launch profile
    pub fn library_entry(&self) -> Value {
        json!({ "name": self.coordinate() })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Agent => write!(f, "agent"),
            Asset::Api => write!(f, "api"),
            Asset::Loader { version } => write!(f, "loader@{version}"),
        }
    }
}
