//! Named Profile Registry
//!
//! Central, thread-safe lookup of [`ScoringConfig`]s by name. The built-in
//! profiles under `profiles/` are embedded at compile time; deployments can
//! add their own from a directory of JSON files or register them directly.
//!
//! A profile's name is its file stem: `profiles/quiet_study.json` registers
//! as `quiet_study`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use include_dir::{include_dir, Dir};

use crate::{config::ScoringConfig, SchemaError};

static BUILTIN_PROFILES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/profiles");

/// Thread-safe registry of named scoring configs
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<String, ScoringConfig>>,
}

fn poisoned() -> SchemaError {
    SchemaError::Io("Lock poisoned".to_string())
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding the built-in profiles
    pub fn with_defaults() -> Result<Self, SchemaError> {
        let registry = Self::new();
        registry.load_defaults()?;
        Ok(registry)
    }

    /// Register a validated config under a new name
    pub fn register(&self, name: &str, config: ScoringConfig) -> Result<(), SchemaError> {
        config
            .validate()
            .map_err(|e| SchemaError::Validation(format!("{}: {}", name, e)))?;

        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        if profiles.contains_key(name) {
            return Err(SchemaError::Validation(format!(
                "Profile {} already registered",
                name
            )));
        }
        profiles.insert(name.to_string(), config);
        Ok(())
    }

    /// Register or overwrite a config
    pub fn upsert(&self, name: &str, config: ScoringConfig) -> Result<(), SchemaError> {
        config
            .validate()
            .map_err(|e| SchemaError::Validation(format!("{}: {}", name, e)))?;
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        profiles.insert(name.to_string(), config);
        Ok(())
    }

    /// Remove a config, returning it
    pub fn remove(&self, name: &str) -> Result<ScoringConfig, SchemaError> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned())?;
        profiles
            .remove(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get a config by name
    pub fn get(&self, name: &str) -> Result<ScoringConfig, SchemaError> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        profiles
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Result<Vec<String>, SchemaError> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        let mut names: Vec<String> = profiles.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Number of registered configs
    pub fn len(&self) -> Result<usize, SchemaError> {
        let profiles = self.profiles.read().map_err(|_| poisoned())?;
        Ok(profiles.len())
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> Result<bool, SchemaError> {
        Ok(self.len()? == 0)
    }

    /// Register the built-in profiles
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        for file in BUILTIN_PROFILES.files() {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let name = profile_name(path)?;
            let json = file
                .contents_utf8()
                .ok_or_else(|| SchemaError::Parse(format!("{}: not UTF-8", name)))?;
            let config = ScoringConfig::from_json_str(json)
                .map_err(|e| SchemaError::Parse(format!("{}: {}", name, e)))?;
            self.register(&name, config)?;
        }
        Ok(())
    }

    /// Register every `*.json` file in a directory
    ///
    /// Files that fail to parse or validate are skipped with a warning.
    /// Returns the names that were registered.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<String>, SchemaError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| SchemaError::Io(format!("{}: {}", dir.display(), e)))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = Vec::new();
        for path in paths {
            let name = profile_name(&path)?;
            match ScoringConfig::from_path(&path).and_then(|c| self.upsert(&name, c)) {
                Ok(()) => loaded.push(name),
                Err(e) => log::warn!("skipping profile {}: {}", path.display(), e),
            }
        }
        Ok(loaded)
    }
}

fn profile_name(path: &Path) -> Result<String, SchemaError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| SchemaError::Validation(format!("bad profile file name: {}", path.display())))
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global registry with the built-in profiles loaded
    pub static ref GLOBAL_REGISTRY: ProfileRegistry = {
        let registry = ProfileRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::error!("failed to load built-in profiles: {}", e);
        }
        registry
    };
}
