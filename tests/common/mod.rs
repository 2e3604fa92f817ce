//! Common test utilities for Sledge integration tests
//!
//! - [`RepositoryServer`]: a local Maven-style repository on `127.0.0.1`
//! - [`TestEnv`]: temp game directory, cache and config wired into the binary

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use assert_cmd::Command;
use tempfile::TempDir;
use tiny_http::{Response, Server, StatusCode};

const GROUP_PATH: &str = "com/github/Astera-Solutions";

/// Repository path of the loader for `version`
pub fn loader_path(version: &str) -> String {
    format!("/maven/{GROUP_PATH}/SledgeMC-Loader/{version}/SledgeMC-Loader-{version}.jar")
}

pub fn agent_path() -> String {
    format!("/maven/{GROUP_PATH}/SledgeMC-Agent/agent-v1.0.0/SledgeMC-Agent-agent-v1.0.0.jar")
}

pub fn api_path() -> String {
    format!("/maven/{GROUP_PATH}/Sledge-API/v1.0.0/Sledge-API-v1.0.0.jar")
}

/// Local artifact repository serving fixed bytes per path
pub struct RepositoryServer {
    server: Arc<Server>,
    base_url: String,
    requests: Arc<AtomicUsize>,
    thread: Option<JoinHandle<()>>,
}

impl RepositoryServer {
    pub fn start(files: Vec<(String, Vec<u8>)>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind test server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Test server has no IP address");
        let base_url = format!("http://{addr}/maven");

        let files: HashMap<String, Vec<u8>> = files.into_iter().collect();
        let requests = Arc::new(AtomicUsize::new(0));

        let thread = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    requests.fetch_add(1, Ordering::SeqCst);
                    let response = match files.get(request.url()) {
                        Some(bytes) => Response::from_data(bytes.clone()),
                        None => Response::from_string("not found").with_status_code(StatusCode(404)),
                    };
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url,
            requests,
            thread: Some(thread),
        }
    }

    /// Loader, agent and API for `version`
    pub fn full(version: &str) -> Self {
        Self::start(vec![
            (loader_path(version), b"loader-bytes".to_vec()),
            (agent_path(), b"agent-bytes".to_vec()),
            (api_path(), b"api-bytes".to_vec()),
        ])
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for RepositoryServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Isolated environment for one invocation of the binary
pub struct TestEnv {
    pub temp: TempDir,
    /// Minecraft directory
    pub game: PathBuf,
    pub cache: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let game = temp.path().join(".minecraft");
        std::fs::create_dir_all(&game).expect("Failed to create game directory");
        Self {
            cache: temp.path().join("cache"),
            config: temp.path().join("config").join("config.json"),
            game,
            temp,
        }
    }

    /// `sledge` with cache, config and repository pointed into this env
    #[allow(deprecated)]
    pub fn cmd(&self, repository: Option<&RepositoryServer>) -> Command {
        let mut cmd = Command::cargo_bin("sledge").expect("sledge binary not built");
        cmd.env("SLEDGE_CONFIG", &self.config)
            .env("SLEDGE_CACHE_DIR", &self.cache)
            .env_remove("RUST_LOG")
            .env_remove("JAVA_HOME");
        match repository {
            Some(server) => cmd.env("SLEDGE_REPOSITORY_URL", server.url()),
            // Nothing listens here
            None => cmd.env("SLEDGE_REPOSITORY_URL", "http://127.0.0.1:9/maven"),
        };
        cmd
    }

    pub fn write(&self, relative: &str, bytes: &[u8]) {
        let path = self.game.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, bytes).expect("Failed to write file");
    }

    pub fn with_version_jar(self, version: &str) -> Self {
        self.write(&format!("versions/{version}/{version}.jar"), b"vanilla-jar");
        self
    }

    pub fn with_descriptor(self, version: &str, json: &str) -> Self {
        self.write(
            &format!("versions/{version}/{version}.json"),
            json.as_bytes(),
        );
        self
    }

    pub fn game_path(&self, relative: &str) -> PathBuf {
        self.game.join(relative)
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).expect("Failed to read JSON file");
        serde_json::from_str(&content).expect("Invalid JSON")
    }

    pub fn saved_config(&self) -> serde_json::Value {
        self.read_json(&self.config)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
