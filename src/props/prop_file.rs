// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! build.prop style snapshots (`key=value` per line) for host-side runs.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::MemoryProperties;

pub fn parse(content: &str) -> MemoryProperties {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<MemoryProperties> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read property file {}", path.display()))?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::props::PropertyStore;

    #[test]
    fn parse_skips_comments_and_junk() {
        let props = parse(
            "# begin build properties\n\
             ro.bootloader=N915FXXU1DQH2\n\
             \n\
             ro.product.device = trlte \n\
             not a property\n\
             =orphan\n\
             ro.empty=\n\
             ro.url=http://a=b\n",
        );

        assert_eq!(props.len(), 4);
        assert_eq!(props.get("ro.bootloader").as_deref(), Some("N915FXXU1DQH2"));
        assert_eq!(props.get("ro.product.device").as_deref(), Some("trlte"));
        assert_eq!(props.get("ro.empty").as_deref(), Some(""));
        assert_eq!(props.get("ro.url").as_deref(), Some("http://a=b"));
    }

    #[test]
    fn later_lines_win() {
        let props = parse("ro.a=1\nro.a=2\n");
        assert_eq!(props.get("ro.a").as_deref(), Some("2"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ro.bootloader=N915VVRU2CQE1").unwrap();

        let props = load(file.path()).unwrap();
        assert_eq!(props.get("ro.bootloader").as_deref(), Some("N915VVRU2CQE1"));
        assert!(load(file.path().with_extension("missing")).is_err());
    }
}
