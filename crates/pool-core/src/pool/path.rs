//! Pool file resolution.

use pool_common::paths::{global_pool_path, project_pool_path};
use pool_common::{PoolError, Result, PROJECT_MARKER_DIR};
use std::path::{Path, PathBuf};

/// Pick the pool file to read.
///
/// An explicit path always wins. Otherwise, when `project_root` contains a
/// `.claude` directory the project pool is used if it exists; in every other
/// case the pool under `home` is used.
pub fn resolve_pool_path(
    explicit: Option<&Path>,
    project_root: &Path,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if project_root.join(PROJECT_MARKER_DIR).exists() {
        let project = project_pool_path(project_root);
        if project.exists() {
            return Ok(project);
        }
    }

    home.map(global_pool_path).ok_or(PoolError::HomeUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.jsonl");
        let resolved = resolve_pool_path(Some(&explicit), tmp.path(), None).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn test_project_pool_preferred_when_present() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let pool = project_pool_path(project.path());
        fs::create_dir_all(pool.parent().unwrap()).unwrap();
        fs::write(&pool, "").unwrap();

        let resolved = resolve_pool_path(None, project.path(), Some(home.path())).unwrap();
        assert_eq!(resolved, pool);
    }

    #[test]
    fn test_marker_without_pool_falls_back_to_home() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join(".claude")).unwrap();

        let resolved = resolve_pool_path(None, project.path(), Some(home.path())).unwrap();
        assert_eq!(resolved, global_pool_path(home.path()));
    }

    #[test]
    fn test_no_marker_uses_home() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        let resolved = resolve_pool_path(None, project.path(), Some(home.path())).unwrap();
        assert_eq!(resolved, global_pool_path(home.path()));
    }

    #[test]
    fn test_missing_home_is_an_error() {
        let project = TempDir::new().unwrap();
        let err = resolve_pool_path(None, project.path(), None).unwrap_err();
        assert!(matches!(err, PoolError::HomeUnavailable));
    }
}
