// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    about = "Sets per-variant build properties for the Galaxy Note Edge (tblte)",
    version
)]
pub struct Cli {
    #[arg(long, help = "Config file (default: /vendor/etc/init_tblte.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Factory serial number file")]
    pub serial_file: Option<PathBuf>,

    #[arg(long, help = "Use this bootloader identifier instead of ro.bootloader")]
    pub bootloader: Option<String>,

    #[arg(long, help = "Read properties from a build.prop style file")]
    pub props: Option<PathBuf>,

    #[arg(long, help = "Print the writes instead of performing them")]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the known variants in match order
    Variants {
        #[arg(long)]
        json: bool,
    },
    /// Show which variant a bootloader identifier selects
    Detect { bootloader: String },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_a_boot_run() {
        let cli = Cli::try_parse_from(["init_tblte"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert!(cli.props.is_none());
    }

    #[test]
    fn parses_dry_run_against_snapshot() {
        let cli = Cli::try_parse_from([
            "init_tblte",
            "--props",
            "build.prop",
            "--dry-run",
            "--bootloader",
            "N915R4TYU1CQC1",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.props, Some(PathBuf::from("build.prop")));
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.bootloader.as_deref(), Some("N915R4TYU1CQC1"));
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["init_tblte", "variants", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Variants { json: true })));

        let cli = Cli::try_parse_from(["init_tblte", "detect", "N915VVRU2CQE1"]).unwrap();
        match cli.command {
            Some(Command::Detect { bootloader }) => assert_eq!(bootloader, "N915VVRU2CQE1"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
