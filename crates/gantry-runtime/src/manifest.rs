//! YAML manifest loading
//!
//! Blueprints can be declared in YAML manifests instead of code. A manifest
//! holds a list of blueprints, each with an optional when-guard and the bean
//! definitions it contributes.
//!
//! ```yaml
//! blueprints:
//!   - id: web
//!     when:
//!       all:
//!         - property: server.enabled
//!           value: true
//!     beans:
//!       - name: http_server
//!         provider: web::HttpServer
//!       - name: fallback_logger
//!         provider: log::StdoutLogger
//!         when:
//!           phase: register_bean
//!           not:
//!             - property: logging.custom
//!               op: exists
//! ```

use crate::builtin::WhenCondition;
use gantry_core::condition::{ConfigurationPhase, WhenClause};
use gantry_core::definition::{BeanDefinition, Blueprint};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result type alias for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Errors that can occur while loading manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Invalid path provided
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Serde model of a manifest file
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Declared blueprints
    #[serde(default)]
    pub blueprints: Vec<BlueprintSpec>,
}

/// A blueprint declaration
#[derive(Debug, Deserialize)]
pub struct BlueprintSpec {
    /// Unique blueprint ID
    pub id: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional class-level guard
    #[serde(default)]
    pub when: Option<GuardSpec>,

    /// Bean declarations
    #[serde(default)]
    pub beans: Vec<BeanSpec>,
}

/// A bean declaration
#[derive(Debug, Deserialize)]
pub struct BeanSpec {
    /// Unique bean name
    pub name: String,

    /// Provider identifier
    pub provider: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional guard
    #[serde(default)]
    pub when: Option<GuardSpec>,
}

/// A declarative guard: a when-clause with an optional explicit phase
#[derive(Debug, Deserialize)]
pub struct GuardSpec {
    /// Phase the guard should be evaluated in
    #[serde(default)]
    pub phase: Option<ConfigurationPhase>,

    /// The clause itself
    #[serde(flatten)]
    pub clause: WhenClause,
}

impl GuardSpec {
    fn into_condition(self) -> WhenCondition {
        match self.phase {
            Some(phase) => WhenCondition::with_phase(self.clause, phase),
            None => WhenCondition::new(self.clause),
        }
    }
}

impl Manifest {
    /// Convert the manifest into blueprint definitions
    pub fn into_blueprints(self) -> Vec<Blueprint> {
        self.blueprints
            .into_iter()
            .map(BlueprintSpec::into_blueprint)
            .collect()
    }
}

impl BlueprintSpec {
    fn into_blueprint(self) -> Blueprint {
        let mut blueprint = Blueprint::new(self.id);
        if let Some(description) = self.description {
            blueprint = blueprint.with_description(description);
        }
        if let Some(guard) = self.when {
            blueprint = blueprint.guarded_by(Arc::new(guard.into_condition()));
        }
        for bean in self.beans {
            blueprint = blueprint.with_bean(bean.into_bean());
        }
        blueprint
    }
}

impl BeanSpec {
    fn into_bean(self) -> BeanDefinition {
        let mut bean = BeanDefinition::new(self.name, self.provider);
        if let Some(description) = self.description {
            bean = bean.with_description(description);
        }
        if let Some(guard) = self.when {
            bean = bean.guarded_by(Arc::new(guard.into_condition()));
        }
        bean
    }
}

/// Parse a manifest from YAML text
pub fn parse_manifest(yaml: &str) -> ManifestResult<Vec<Blueprint>> {
    let manifest: Manifest = serde_yaml::from_str(yaml)?;
    Ok(manifest.into_blueprints())
}

/// Load a manifest from a YAML file
pub fn load_manifest(path: impl AsRef<Path>) -> ManifestResult<Vec<Blueprint>> {
    let path = path.as_ref();
    debug!("Loading manifest from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Load all manifests from a directory (all .yaml and .yml files, sorted).
///
/// Files that fail to load are skipped with a warning.
pub fn load_manifest_dir(dir: impl AsRef<Path>) -> ManifestResult<Vec<Blueprint>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ManifestError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext == "yaml" || ext == "yml" {
                    paths.push(path);
                }
            }
        }
    }
    paths.sort();

    let mut blueprints = Vec::new();
    let mut error_count = 0;
    for path in &paths {
        match load_manifest(path) {
            Ok(mut loaded) => blueprints.append(&mut loaded),
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        warn!(
            "Loaded {} manifests with {} errors from: {}",
            paths.len() - error_count,
            error_count,
            dir.display()
        );
    } else {
        info!("Loaded {} manifests from: {}", paths.len(), dir.display());
    }

    Ok(blueprints)
}
