//! Launch through the binary with a scripted Java runtime

mod common;

use common::{RepositoryServer, TestEnv, loader_path};
use predicates::prelude::*;

#[test]
fn test_missing_version_jar_names_path() {
    let env = TestEnv::new();
    let server = RepositoryServer::start(vec![(loader_path("1.21.4"), b"loader".to_vec())]);
    let game = env.game.display().to_string();
    let jar = env.game_path("versions/1.21.4/1.21.4.jar");

    env.cmd(Some(&server))
        .args(["launch", "1.21.4", "--dir", game.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Version JAR not found: {}",
            jar.display()
        )))
        .stderr(predicate::str::contains("Please run vanilla Minecraft 1.21.4 first."));

    assert!(!env.game_path("mods").exists());
    assert_eq!(server.requests(), 0);
}

#[test]
fn test_missing_install_dir_fails() {
    let env = TestEnv::new();
    let missing = env.temp.path().join("nowhere");

    env.cmd(None)
        .args(["launch", "1.21.4", "--dir", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Minecraft directory not found"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn fake_java(env: &TestEnv) -> PathBuf {
        let script = env.temp.path().join("java");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"game started with $# args\"\necho \"warning on stderr\" 1>&2\nexit 0\n",
        )
        .unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();
        script
    }

    #[test]
    fn test_launch_relays_game_output() {
        let env = TestEnv::new().with_version_jar("1.21.4");
        let server = RepositoryServer::start(vec![(loader_path("1.21.4"), b"loader".to_vec())]);
        let java = fake_java(&env);
        let game = env.game.display().to_string();

        env.cmd(Some(&server))
            .args([
                "launch",
                "1.21.4",
                "--dir",
                game.as_str(),
                "--java",
                java.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created mods directory"))
            .stdout(predicate::str::contains("Full Command: "))
            .stdout(predicate::str::contains("sledgemc.dev.loader.SledgeBootstrap"))
            .stdout(predicate::str::contains("Minecraft launched with PID: "))
            .stdout(predicate::str::contains("game started with 16 args"))
            .stdout(predicate::str::contains("warning on stderr"))
            .stdout(predicate::str::contains("Minecraft exited with code 0"));

        let mods = env.game_path("mods");
        assert!(mods.is_dir());
        assert_eq!(std::fs::read_dir(&mods).unwrap().count(), 0);
        assert!(env.cache.join("sledge-loader-1.21.4.jar").is_file());

        let saved = env.saved_config();
        assert_eq!(saved["lastVersion"], "1.21.4");
        assert_eq!(saved["modsDir"], mods.display().to_string());
    }

    #[test]
    fn test_launch_uses_configured_java() {
        let env = TestEnv::new().with_version_jar("1.21.4");
        let server = RepositoryServer::start(vec![(loader_path("1.21.4"), b"loader".to_vec())]);
        let java = fake_java(&env);
        let game = env.game.display().to_string();
        let mods = env.temp.path().join("my-mods").display().to_string();

        env.cmd(None)
            .args(["config", "set", "javaPath", java.to_str().unwrap()])
            .assert()
            .success();
        env.cmd(None)
            .args(["config", "set", "installDir", game.as_str()])
            .assert()
            .success();
        env.cmd(None)
            .args(["config", "set", "modsDir", mods.as_str()])
            .assert()
            .success();
        env.cmd(None)
            .args(["config", "set", "lastVersion", "1.21.4"])
            .assert()
            .success();

        env.cmd(Some(&server))
            .arg("launch")
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Full Command: {}",
                java.display()
            )));
        assert!(std::path::Path::new(&mods).is_dir());
    }
}
