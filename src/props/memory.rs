// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use anyhow::{Result, ensure};

use super::PropertyStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryProperties {
    props: BTreeMap<String, String>,
}

impl MemoryProperties {
    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyStore for MemoryProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.props.get(name).cloned()
    }

    fn update(&mut self, name: &str, value: &str) -> Result<bool> {
        match self.props.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        ensure!(!name.is_empty(), "empty property name");
        ensure!(
            !self.props.contains_key(name),
            "property {name} already exists"
        );
        self.props.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
