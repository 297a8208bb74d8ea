//! File-backed storage for per-region master keys.
//!
//! Each region owns one file, `<root>/<region>.key`, holding raw key bytes.
//! A missing file is created with fresh random bytes on first use. New keys
//! are written to a hidden temporary file first and then linked into place,
//! so a key file is either absent or complete.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::util::random_bytes;

/// Sub-directory of the per-user data directory used by
/// [`KeyStore::default_location`].
pub const KEY_DIRECTORY: &str = "private-keys";

/// Directory of region key files.
#[derive(Clone, Debug)]
pub struct KeyStore {
    root: PathBuf,
}

impl KeyStore {
    /// Uses `root` as the key directory. Nothing is touched until a key is
    /// loaded.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `<local data dir>/private-keys`.
    ///
    /// The data directory is the first of `LOCALAPPDATA`, `XDG_DATA_HOME` or
    /// `HOME/.local/share` that is set and non-empty.
    pub fn default_location() -> Result<Self, StoreError> {
        let non_empty = |name: &str| env::var_os(name).filter(|value| !value.is_empty());

        let data_dir = non_empty("LOCALAPPDATA")
            .map(PathBuf::from)
            .or_else(|| non_empty("XDG_DATA_HOME").map(PathBuf::from))
            .or_else(|| non_empty("HOME").map(|home| Path::new(&home).join(".local").join("share")))
            .ok_or(StoreError::NoDataDirectory)?;

        Ok(Self::new(data_dir.join(KEY_DIRECTORY)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the key file for `region`.
    pub fn key_path(&self, region: &str) -> Result<PathBuf, StoreError> {
        validate_region(region)?;
        Ok(self.root.join(format!("{region}.key")))
    }

    /// Returns the key stored for `region`, creating a random one of
    /// `key_size` bytes if there is none yet.
    ///
    /// An empty key file counts as missing and is replaced. An existing key
    /// of any other size is an error; it is never replaced.
    ///
    /// Concurrent first calls for the same region all return the same key.
    pub fn load_or_create(&self, region: &str, key_size: usize) -> Result<Vec<u8>, StoreError> {
        let path = self.key_path(region)?;

        match fs::read(&path) {
            Ok(key) if key.is_empty() => {
                warn!(path = %path.display(), "replacing empty region key file");
                self.create(region, path, key_size, Publish::Replace)
            }
            Ok(key) => check_length(path, key, key_size),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.create(region, path, key_size, Publish::NoClobber)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Writes a fresh key to a temporary file in `root`, then moves it to
    /// `path`. Readers of `path` never observe a partially written key.
    fn create(
        &self,
        region: &str,
        path: PathBuf,
        key_size: usize,
        publish: Publish,
    ) -> Result<Vec<u8>, StoreError> {
        fs::create_dir_all(&self.root)?;

        let key = random_bytes(key_size)?;
        let tmp = self.root.join(format!(
            ".{region}.key.{}-{}.tmp",
            process::id(),
            hex::encode(random_bytes(8)?)
        ));

        if let Err(err) = write_new_file(&tmp, &key) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        let published = match publish {
            Publish::NoClobber => fs::hard_link(&tmp, &path),
            Publish::Replace => fs::rename(&tmp, &path),
        };
        let _ = fs::remove_file(&tmp);

        match published {
            Ok(()) if publish == Publish::Replace => {
                // Another caller may have replaced the same empty file.
                let stored = fs::read(&path)?;
                info!(path = %path.display(), key_size, "recreated region key");
                check_length(path, stored, key_size)
            }
            Ok(()) => {
                info!(path = %path.display(), key_size, "created region key");
                Ok(key)
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "region key created concurrently");
                let existing = fs::read(&path)?;
                check_length(path, existing, key_size)
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Publish {
    /// Fail with `AlreadyExists` if the key file appeared meanwhile.
    NoClobber,
    /// Atomically overwrite an unusable key file.
    Replace,
}

fn write_new_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn check_length(path: PathBuf, key: Vec<u8>, key_size: usize) -> Result<Vec<u8>, StoreError> {
    if key.len() != key_size {
        return Err(StoreError::KeyLength {
            path,
            expected: key_size,
            actual: key.len(),
        });
    }

    debug!(path = %path.display(), key_size, "loaded region key");
    Ok(key)
}

/// Accepts non-empty names over `[A-Za-z0-9._-]` other than `.` and `..`.
fn validate_region(region: &str) -> Result<(), StoreError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');

    if region.is_empty() || region == "." || region == ".." || !region.chars().all(allowed) {
        return Err(StoreError::InvalidRegion(region.to_owned()));
    }

    Ok(())
}
