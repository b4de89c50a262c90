use crate::common::{DomainError, DomainResult};
use crate::domains::routing::ports::FloorPlanSource;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "FLOORPLAN_DATA_DIR";

/// Resolve the floor-plan data directory.
/// Precedence: explicit value -> FLOORPLAN_DATA_DIR -> ./resources/floorplans -> /usr/share/floorplan-nav/floorplans
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Ok(v) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(v);
    }
    let cwd_default = Path::new("resources/floorplans");
    if cwd_default.exists() {
        return cwd_default.to_path_buf();
    }
    PathBuf::from("/usr/share/floorplan-nav/floorplans")
}

/// Reads `<base>/<name>` floor-plan documents from disk.
pub struct FilesystemFloorPlanSource {
    base: PathBuf,
}

impl FilesystemFloorPlanSource {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self {
            base: resolve_data_dir(base),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Documents available under the data directory, sorted by name.
    pub fn list(&self) -> DomainResult<Vec<String>> {
        let entries = fs::read_dir(&self.base)
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", self.base.display(), e)))?;
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
            .filter_map(|p| p.file_name().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl FloorPlanSource for FilesystemFloorPlanSource {
    fn load_raw(&self, name: &str) -> DomainResult<String> {
        let path = self.base.join(name);
        fs::read_to_string(&path)
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", path.display(), e)))
    }
}
