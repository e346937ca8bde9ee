// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::defs::{CONFIG_FILE_DEFAULT, SERIAL_NUMBER_FILE};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_serial_number_file")]
    pub serial_number_file: PathBuf,
    /// Pins the bootloader identifier instead of reading `ro.bootloader`.
    #[serde(default)]
    pub bootloader: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

/// Where [`Config::load_or_default`] took its values from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    /// The file is there but unusable; defaults were used instead.
    Fallback(PathBuf, anyhow::Error),
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn default_serial_number_file() -> PathBuf {
    PathBuf::from(SERIAL_NUMBER_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial_number_file: default_serial_number_file(),
            bootloader: None,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).context("failed to read config file")?;
        let config: Config = toml::from_str(&content).context("failed to parse config file")?;
        Ok(config)
    }

    /// A missing file is not an error; an unreadable or malformed one is
    /// reported through [`ConfigSource::Fallback`].
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> (Self, ConfigSource) {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(e) if is_not_found(&e) => (Self::default(), ConfigSource::Defaults),
            Err(e) => (Self::default(), ConfigSource::Fallback(path.to_path_buf(), e)),
        }
    }

    pub fn load_default() -> (Self, ConfigSource) {
        Self::load_or_default(CONFIG_FILE_DEFAULT)
    }

    pub fn merge_with_cli(
        &mut self,
        serial_number_file: Option<PathBuf>,
        bootloader: Option<String>,
        verbose: bool,
    ) {
        if let Some(path) = serial_number_file {
            self.serial_number_file = path;
        }
        if let Some(bootloader) = bootloader {
            self.bootloader = Some(bootloader);
        }
        if verbose {
            self.verbose = true;
        }
    }
}
