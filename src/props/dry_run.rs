// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use anyhow::Result;

use super::PropertyStore;

/// Reads through to `inner`, keeps every write in an overlay.
pub struct DryRun<S> {
    inner: S,
    overlay: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
}

impl<S: PropertyStore> DryRun<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            overlay: BTreeMap::new(),
            writes: Vec::new(),
        }
    }

    /// Writes in the order they were issued, including repeated keys.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn record(&mut self, name: &str, value: &str) {
        log::debug!("dry-run: {name}={value}");
        self.overlay.insert(name.to_string(), value.to_string());
        self.writes.push((name.to_string(), value.to_string()));
    }
}

impl<S: PropertyStore> PropertyStore for DryRun<S> {
    fn get(&self, name: &str) -> Option<String> {
        self.overlay
            .get(name)
            .cloned()
            .or_else(|| self.inner.get(name))
    }

    fn update(&mut self, name: &str, value: &str) -> Result<bool> {
        if self.get(name).is_none() {
            return Ok(false);
        }
        self.record(name, value);
        Ok(true)
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        self.record(name, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::MemoryProperties;

    #[test]
    fn writes_never_reach_inner_store() {
        let base: MemoryProperties = [("ro.product.device", "trlte")].into_iter().collect();
        let mut dry = DryRun::new(base.clone());

        assert!(dry.update("ro.product.device", "tblte").unwrap());
        assert!(!dry.update("ro.product.odm.device", "tblte").unwrap());
        dry.set("ro.build.product", "tblte").unwrap();

        assert_eq!(dry.get("ro.product.device").as_deref(), Some("tblte"));
        assert_eq!(dry.get("ro.build.product").as_deref(), Some("tblte"));
        assert_eq!(
            dry.writes(),
            [
                ("ro.product.device".to_string(), "tblte".to_string()),
                ("ro.build.product".to_string(), "tblte".to_string()),
            ]
        );
        assert_eq!(dry.into_inner(), base);
    }
}
