use std::{
    borrow::Cow,
    fs,
    io::{
        self,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use nix::unistd;

use crate::error::{
    Error,
    Result,
};

/// Where the kernel exposes the device hierarchy.
pub const SYSFS_DEVICES: &str = "/sys/devices";

pub const BRIGHTNESS: &str = "brightness";
pub const MAX_BRIGHTNESS: &str = "max_brightness";

/// Reads a small attribute file, stripping trailing spaces, tabs and newlines.
///
/// Leading and interior whitespace is left alone.
pub fn read_trimmed(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw.trim_end_matches(&[' ', '\t', '\n'][..]).to_string())
}

/// Writes `value` verbatim, without a trailing newline.
///
/// The file has to exist already; attribute files are never created. An empty
/// value is refused before the file is opened, since a zero-length write
/// changes nothing. Range checking is left to the kernel, which rejects bad
/// values with an I/O error. The descriptor is closed explicitly so a failing
/// close is reported too.
pub fn write_value(path: &Path, value: &str) -> Result<()> {
    let err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if value.is_empty() {
        return Err(err(io::Error::new(io::ErrorKind::InvalidInput, "empty value")));
    }

    let mut file = fs::OpenOptions::new().write(true).truncate(true).open(path).map_err(err)?;
    file.write_all(value.as_bytes()).map_err(err)?;
    unistd::close(file).map_err(|errno| err(errno.into()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub path: PathBuf,
}

impl Device {
    #[inline]
    pub fn new(path: PathBuf) -> Device {
        Self { path }
    }

    /// Last path component, borrowed from `path`.
    #[inline]
    pub fn basename(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
    }

    /// Basename, or the full path when `verbose`.
    #[inline]
    pub fn display_name(&self, verbose: bool) -> Cow<'_, str> {
        if verbose {
            self.path.to_string_lossy()
        } else {
            self.basename()
        }
    }

    #[inline]
    pub fn attribute_path(&self, attr: &str) -> PathBuf {
        self.path.join(attr)
    }

    #[inline]
    pub fn read_attribute(&self, attr: &str) -> Result<String> {
        read_trimmed(&self.attribute_path(attr))
    }
}

/// Walks `root` depth first and returns every directory that directly holds a
/// regular file called `brightness`, in discovery order.
///
/// Entries are visited in whatever order the directory listing yields them, so
/// indices are only as stable as the filesystem's readdir order. Symlinks are
/// never followed, which keeps each directory to a single visit.
///
/// Any directory that can't be listed fails the whole scan. A partial list
/// would shift indices and point a later write at the wrong device.
pub fn scan(root: &Path) -> Result<Vec<Device>> {
    log::debug!("scanning {} for {} attributes", root.display(), BRIGHTNESS);
    let devices = scan_dir(root)?;
    log::debug!("found {} device(s)", devices.len());
    Ok(devices)
}

fn scan_dir(dir: &Path) -> Result<Vec<Device>> {
    let err = |source: io::Error| Error::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut ret = Vec::new();
    let mut recorded = false;
    for entry in fs::read_dir(dir).map_err(err)? {
        let entry = entry.map_err(err)?;
        let file_type = entry.file_type().map_err(err)?;

        if file_type.is_dir() {
            ret.extend(scan_dir(&entry.path())?);
        } else if file_type.is_file() && entry.file_name() == BRIGHTNESS && !recorded {
            log::debug!("found device {}", dir.display());
            ret.push(Device::new(dir.to_path_buf()));
            recorded = true;
        }
    }

    Ok(ret)
}
