use std::{
    io,
    path::PathBuf,
};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read ({})", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to ({})", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to scan ({})", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not match '{0}' with a device name")]
    NotFound(String),

    /// Numeric selector outside `1..=len`. `index` is kept as written.
    #[error("id {index} out of range (1..={len})")]
    OutOfRange { index: String, len: usize },

    #[error(transparent)]
    Privilege(#[from] PrivilegeError),

    #[error("missing second parameter (brightness value)")]
    MissingArgument,

    #[error("no devices found")]
    NoDevices,
}

#[derive(Error, Debug)]
pub enum PrivilegeError {
    #[error("insufficient privileges to assume uid {uid}")]
    Elevate {
        uid: nix::unistd::Uid,
        #[source]
        source: nix::Error,
    },

    // leaving the process elevated is worse than a failed write
    #[error("failed to drop privileges back to uid {uid}")]
    Restore {
        uid: nix::unistd::Uid,
        #[source]
        source: nix::Error,
    },
}
