//! Launch profile installation
//!
//! Installs `<Brand>-<version>` next to the vanilla version so the official
//! launcher lists it:
//!
//! ```text
//! <install>/versions/SledgeMC-<v>/
//! ├── SledgeMC-<v>.jar     loader copy, stands in for the version jar
//! └── SledgeMC-<v>.json    vanilla descriptor with injected libraries
//! <install>/libraries/com/github/Astera-Solutions/<artifact>/<version>/<artifact>-<version>.jar
//! ```
//!
//! The loader is required. Agent and API are auxiliary: by default their
//! failures are recorded in the [`InstallReport`] and installation goes on;
//! with [`InstallOptions::strict`] they abort it.

pub mod descriptor;
pub mod report;

use std::fs;
use std::path::{Path, PathBuf};

use crate::brand::{BOOTSTRAP_CLASS, LOG_PREFIX, profile_name, validate_version};
use crate::cache::{Asset, AssetCache};
use crate::error::{
    Result,
    fs::write_failed,
    install::{auxiliary_failed, loader_failed},
    launch::install_dir_not_found,
};
use crate::sink::LogSink;

pub use report::{InstallReport, InstallStep, StepOutcome};

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Treat agent/API failures as fatal
    pub strict: bool,
}

/// Installs launch profiles into a game directory
#[derive(Debug)]
pub struct ProfileInstaller<'a> {
    cache: &'a AssetCache,
    options: InstallOptions,
}

impl<'a> ProfileInstaller<'a> {
    pub fn new(cache: &'a AssetCache) -> Self {
        Self {
            cache,
            options: InstallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InstallOptions) -> Self {
        self.options = options;
        self
    }

    /// Install the profile for `version` into `install_dir`
    pub fn install(
        &self,
        install_dir: &Path,
        version: &str,
        sink: &LogSink,
    ) -> Result<InstallReport> {
        validate_version(version)?;
        if !install_dir.is_dir() {
            return Err(install_dir_not_found(install_dir));
        }

        let name = profile_name(version);
        let versions_dir = install_dir.join("versions");
        let profile_dir = versions_dir.join(&name);
        let libraries_dir = install_dir.join("libraries");
        let mut report = InstallReport::new(&name, &profile_dir);

        sink.line(format!("Installing {name}..."));
        fs::create_dir_all(&profile_dir).map_err(|e| write_failed(&profile_dir, e))?;
        report.record(InstallStep::ProfileDir, StepOutcome::Done);

        // Loader: library entry plus the profile's version jar
        let loader = Asset::loader(version);
        let cached = self
            .cache
            .ensure(&loader, sink)
            .map_err(|e| loader_failed(version, e))?;
        let library = loader.library_path(&libraries_dir);
        install_file(&cached, &library).map_err(|e| loader_failed(version, e))?;
        install_file(&cached, &report.jar_path()).map_err(|e| loader_failed(version, e))?;
        sink.line(format!("{LOG_PREFIX} Loader installed to: {}", library.display()));
        report.record(InstallStep::Loader, StepOutcome::Done);

        for (step, asset) in [(InstallStep::Agent, Asset::Agent), (InstallStep::Api, Asset::Api)] {
            let outcome = match self.install_library(&asset, &libraries_dir, sink) {
                Ok(path) => {
                    sink.line(format!("{LOG_PREFIX} {asset} installed to: {}", path.display()));
                    StepOutcome::Done
                }
                Err(e) if self.options.strict => {
                    return Err(auxiliary_failed(step, e.to_string()));
                }
                Err(e) => {
                    tracing::warn!(%step, error = %e, "auxiliary install step failed");
                    sink.line(format!("{LOG_PREFIX} Failed to install {asset}: {e}"));
                    StepOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.record(step, outcome);
        }

        let vanilla_path = versions_dir.join(version).join(format!("{version}.json"));
        let vanilla = descriptor::read_vanilla(&vanilla_path, version)?;
        let injected = vec![
            loader.library_entry(),
            Asset::Agent.library_entry(),
            Asset::Api.library_entry(),
        ];
        let profile =
            descriptor::derive_profile(vanilla, &name, BOOTSTRAP_CLASS, injected, &vanilla_path)?;

        let descriptor_path = report.descriptor_path();
        let json = serde_json::to_string_pretty(&profile)
            .map_err(|e| write_failed(&descriptor_path, e))?;
        fs::write(&descriptor_path, json).map_err(|e| write_failed(&descriptor_path, e))?;
        sink.line(format!(
            "{LOG_PREFIX} Profile written to: {}",
            descriptor_path.display()
        ));
        report.record(InstallStep::Descriptor, StepOutcome::Done);

        Ok(report)
    }

    fn install_library(
        &self,
        asset: &Asset,
        libraries_dir: &Path,
        sink: &LogSink,
    ) -> Result<PathBuf> {
        let cached = self.cache.ensure(asset, sink)?;
        let target = asset.library_path(libraries_dir);
        install_file(&cached, &target)?;
        Ok(target)
    }
}

/// Copy `source` to `target`, creating parent directories
fn install_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
    }
    fs::copy(source, target).map_err(|e| write_failed(target, e))?;
    Ok(())
}
