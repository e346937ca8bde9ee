// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod dry_run;
mod memory;
pub mod prop_file;
#[cfg(target_os = "android")]
mod system;

use anyhow::Result;

pub use dry_run::DryRun;
pub use memory::MemoryProperties;
#[cfg(target_os = "android")]
pub use system::SystemProperties;

/// Key/value view of the host property area.
///
/// `update` and `add` mirror the two primitives init exposes to vendor
/// code: rewrite an existing entry, or append a new one.
pub trait PropertyStore {
    fn get(&self, name: &str) -> Option<String>;

    /// Returns `false` without touching the store when `name` is absent.
    fn update(&mut self, name: &str, value: &str) -> Result<bool>;

    fn add(&mut self, name: &str, value: &str) -> Result<()>;

    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.update(name, value)? {
            self.add(name, value)?;
        }
        Ok(())
    }
}

impl<S: PropertyStore + ?Sized> PropertyStore for &mut S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn update(&mut self, name: &str, value: &str) -> Result<bool> {
        (**self).update(name, value)
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        (**self).add(name, value)
    }
}
