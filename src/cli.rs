use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{
        Error,
        Result,
    },
    sysfs::SYSFS_DEVICES,
};

/// List backlight-style devices, or change one's brightness.
///
/// Without arguments every device under the hardware tree is listed as
/// `index name brightness max_brightness`. `chlight 1 1000` sets device 1 to
/// 1000; `chlight kbd 3` sets the first device with "kbd" in its name to 3.
#[derive(Parser, Debug)]
#[clap(name = "chlight", allow_negative_numbers = true)]
pub struct Args {
    /// Show full device paths instead of names
    #[clap(short, long)]
    pub verbose: bool,

    /// Hardware tree to search for brightness attributes
    #[clap(long, env = "CHLIGHT_ROOT", default_value = SYSFS_DEVICES, value_parser)]
    pub root: PathBuf,

    /// Device index (1-based) or part of its name
    #[clap(value_parser)]
    pub selector: Option<String>,

    /// Brightness to write, passed to the kernel as is
    #[clap(value_parser)]
    pub value: Option<String>,

    #[clap(hide = true, value_parser)]
    pub rest: Vec<String>,
}

/// Settings fixed once arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Write { selector: String, value: String },
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }

    pub fn mode(&self) -> Result<Mode> {
        match (&self.selector, &self.value) {
            (None, _) => Ok(Mode::List),
            (Some(_), None) => Err(Error::MissingArgument),
            (Some(selector), Some(value)) => Ok(Mode::Write {
                selector: selector.clone(),
                value: value.clone(),
            }),
        }
    }
}
