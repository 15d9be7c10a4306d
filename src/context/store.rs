use super::{ContextError, ContextResult, KubeConfig, LoadError, PersistError};
use crate::config::kubeconfig;
use directories::BaseDirs;
use log::debug;
use std::{
    env,
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

/// Loads and persists one kubeconfig document.
pub trait ConfigStore {
    fn path(&self) -> &Path;

    fn load(&self) -> ContextResult<KubeConfig>;

    /// Replaces the stored document. On failure the previous file is left
    /// as it was.
    fn persist(&self, config: &KubeConfig) -> ContextResult<()>;
}

/// Kubeconfig on the local file system.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Picks the kubeconfig path: `explicit`, then `KUBECONFIG`, then
    /// `~/.kube/config`.
    pub fn resolve(explicit: Option<PathBuf>) -> ContextResult<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        resolve_path(explicit, env::var_os(kubeconfig::ENV_VAR), home).map(Self::with_path)
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_error(&self, source: LoadError) -> ContextError {
        ContextError::Load {
            path: self.path.clone(),
            source,
        }
    }

    fn persist_error(&self, source: PersistError) -> ContextError {
        ContextError::Persist {
            path: self.path.clone(),
            source,
        }
    }

    /// Writes through symlinks so a linked kubeconfig stays linked.
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

impl ConfigStore for FileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ContextResult<KubeConfig> {
        debug!("Loading kubeconfig from {}", self.path.display());

        let contents =
            fs::read_to_string(&self.path).map_err(|err| self.load_error(err.into()))?;

        KubeConfig::from_yaml(&contents).map_err(|err| self.load_error(err))
    }

    fn persist(&self, config: &KubeConfig) -> ContextResult<()> {
        let data = config
            .to_yaml()
            .map_err(|err| self.persist_error(err.into()))?;

        let target = self.target();
        debug!("Writing kubeconfig to {}", target.display());

        write_atomic(&target, data.as_bytes()).map_err(|err| self.persist_error(err.into()))
    }
}

fn resolve_path(
    explicit: Option<PathBuf>,
    env_value: Option<OsString>,
    home: Option<PathBuf>,
) -> ContextResult<PathBuf> {
    if let Some(path) = explicit {
        debug!("Using kubeconfig from --kubeconfig: {}", path.display());
        return Ok(path);
    }

    // KUBECONFIG may hold a list of files; only the first one is used.
    if let Some(value) = env_value {
        if let Some(path) = env::split_paths(&value).find(|p| !p.as_os_str().is_empty()) {
            debug!(
                "Using kubeconfig from {}: {}",
                kubeconfig::ENV_VAR,
                path.display()
            );
            return Ok(path);
        }
    }

    home.map(|home| home.join(kubeconfig::DIR_NAME).join(kubeconfig::FILE_NAME))
        .ok_or(ContextError::ConfigNotFound)
}

/// Writes `data` next to `target` and renames it into place. The temporary
/// file is removed if any later step fails.
fn write_atomic(target: &Path, data: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path(target);
    let file = create_temp(target, &tmp_path)?;

    let result = write_then_rename(file, target, &tmp_path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

/// Creates the temporary file private to the owner, then gives it the
/// target's permissions. Nothing is written yet.
fn create_temp(target: &Path, tmp_path: &Path) -> io::Result<File> {
    let file = open_private(tmp_path)?;

    match copy_permissions(target, &file) {
        Ok(()) => Ok(file),
        Err(err) => {
            drop(file);
            let _ = fs::remove_file(tmp_path);
            Err(err)
        }
    }
}

fn copy_permissions(target: &Path, file: &File) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => file.set_permissions(metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

fn write_then_rename(
    mut file: File,
    target: &Path,
    tmp_path: &Path,
    data: &[u8],
) -> io::Result<()> {
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, target)
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(kubeconfig::FILE_NAME));
    name.push(format!(".{}.tmp", process::id()));
    target.with_file_name(name)
}

#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
