use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::Mode;
use crate::error::{AppError, AppResult};

const APP_DIR: &str = "memos";
const RESOURCES_DIR: &str = "resources";

#[cfg(unix)]
const PROD_DATA_DIR: &str = "/var/opt/memos";

/// Directories relative paths are resolved against.
#[derive(Debug, Clone)]
pub struct AppPaths {
    working_dir: PathBuf,
    exe_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let working_dir = std::env::current_dir().map_err(|err| {
            AppError::PathResolution(format!("unable to resolve working directory: {err}"))
        })?;
        let exe = std::env::current_exe().map_err(|err| {
            AppError::PathResolution(format!("unable to resolve executable path: {err}"))
        })?;
        let exe_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                AppError::PathResolution("executable has no parent directory".to_string())
            })?;

        Ok(Self::new(working_dir, exe_dir))
    }

    pub fn new(working_dir: impl Into<PathBuf>, exe_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            exe_dir: exe_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn exe_dir(&self) -> &Path {
        &self.exe_dir
    }

    pub fn absolutize(&self, path: &Path) -> AppResult<PathBuf> {
        if !self.working_dir.is_absolute() {
            return Err(AppError::PathResolution(format!(
                "working directory {} is not absolute",
                self.working_dir.display()
            )));
        }
        Ok(absolutize(path, &self.working_dir))
    }

    /// Resolves `data` next to the executable when relative, drops trailing
    /// separators, and requires the result to be an existing directory.
    pub fn check_data_dir(&self, data: &Path) -> AppResult<PathBuf> {
        let data_dir = if data.is_absolute() {
            strip_trailing_separators(data)
        } else {
            let beside_exe = self.exe_dir.join(data);
            self.absolutize(&beside_exe)?
        };

        match fs::metadata(&data_dir) {
            Ok(meta) if meta.is_dir() => Ok(data_dir),
            Ok(_) => Err(AppError::DataDirectoryUnavailable {
                path: data_dir,
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            }),
            Err(source) => Err(AppError::DataDirectoryUnavailable {
                path: data_dir,
                source,
            }),
        }
    }
}

#[cfg(unix)]
pub fn default_prod_data_dir() -> AppResult<PathBuf> {
    Ok(PathBuf::from(PROD_DATA_DIR))
}

#[cfg(not(unix))]
pub fn default_prod_data_dir() -> AppResult<PathBuf> {
    let data_root = dirs::data_local_dir().ok_or_else(|| {
        AppError::PathResolution("unable to resolve local data directory".to_string())
    })?;
    Ok(data_root.join(APP_DIR))
}

fn resources_dir(data: &Path) -> PathBuf {
    data.join(RESOURCES_DIR)
}

/// Creates `<data>/resources` and any missing parents; existing is fine.
pub fn ensure_resources_dir(data: &Path) -> AppResult<PathBuf> {
    let dir = resources_dir(data);
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;

        builder.mode(0o755);
    }

    builder
        .create(&dir)
        .map_err(|source| AppError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
    Ok(dir)
}

pub fn dsn(data: &Path, mode: Mode) -> String {
    format!("{}/{APP_DIR}_{mode}.db", data.display())
}

/// Joins a relative `path` onto `base` and collapses `.`, `..` and repeated
/// separators without touching the filesystem.
fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

fn strip_trailing_separators(path: &Path) -> PathBuf {
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutizes_relative_paths() {
        let base = Path::new("/srv/app");
        assert_eq!(
            absolutize(Path::new("./mydata"), base),
            Path::new("/srv/app/mydata")
        );
        assert_eq!(absolutize(Path::new("../data/"), base), Path::new("/srv/data"));
        assert_eq!(absolutize(Path::new(""), base), Path::new("/srv/app"));
    }

    #[test]
    fn cleans_absolute_paths() {
        let base = Path::new("/ignored");
        assert_eq!(
            absolutize(Path::new("/var//opt/./memos/"), base),
            Path::new("/var/opt/memos")
        );
        assert_eq!(absolutize(Path::new("/../.."), base), Path::new("/"));
    }

    #[test]
    fn strips_trailing_separators() {
        assert_eq!(
            strip_trailing_separators(Path::new("/data///")),
            Path::new("/data")
        );
        assert_eq!(strip_trailing_separators(Path::new("/")), Path::new("/"));
    }

    #[test]
    fn formats_dsn_per_mode() {
        let data = Path::new("/var/opt/memos");
        assert_eq!(dsn(data, Mode::Prod), "/var/opt/memos/memos_prod.db");
        assert_eq!(dsn(data, Mode::Demo), "/var/opt/memos/memos_demo.db");
    }

    #[test]
    fn rejects_relative_working_dir() {
        let paths = AppPaths::new("relative", "/bin");
        assert!(matches!(
            paths.absolutize(Path::new("data")),
            Err(AppError::PathResolution(_))
        ));
    }

    #[test]
    fn check_data_dir_resolves_relative_beside_exe() {
        let root = tempfile::tempdir().expect("tempdir");
        fs::create_dir(root.path().join("data")).expect("create data dir");
        let paths = AppPaths::new("/", root.path());

        let resolved = paths
            .check_data_dir(Path::new("data"))
            .expect("data dir should exist beside exe");
        assert_eq!(resolved, root.path().join("data"));
    }

    #[test]
    fn check_data_dir_rejects_missing_and_files() {
        let root = tempfile::tempdir().expect("tempdir");
        let file = root.path().join("plain.txt");
        fs::write(&file, "x").expect("write file");
        let paths = AppPaths::new(root.path(), root.path());

        let missing = root.path().join("missing");
        match paths.check_data_dir(&missing) {
            Err(AppError::DataDirectoryUnavailable { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected unavailable data dir, got {other:?}"),
        }

        assert!(matches!(
            paths.check_data_dir(&file),
            Err(AppError::DataDirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn ensure_resources_dir_is_idempotent() {
        let root = tempfile::tempdir().expect("tempdir");
        let data = root.path().join("nested/data");

        let first = ensure_resources_dir(&data).expect("first create");
        let second = ensure_resources_dir(&data).expect("second create");
        assert_eq!(first, second);
        assert!(first.is_dir());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = fs::metadata(&first).expect("metadata").permissions().mode();
            assert_eq!(mode & 0o7022, 0);
        }
    }
}
