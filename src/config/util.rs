//! Config file discovery.

use std::path::{Path, PathBuf};

/// Look for `config_name` in cwd and each of its ancestors.
///
/// ```text
/// /home/user/book/_site/chapter/  <- cwd
/// /home/user/book/decor.toml      <- found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// [`find_config_file`] starting at `start`. Absolute names are not searched.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("_site").join("chapter");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("decor.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("decor.toml")).unwrap();
        assert_eq!(found, dir.path().join("decor.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-decor.toml")).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file_from(dir.path(), &path).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
