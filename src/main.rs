// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod cli;
mod conf;
mod defs;
mod ext;
mod loader;
mod props;
mod variant;

use std::path::Path;

use anyhow::{Context, Result};
use mimalloc::MiMalloc;

use crate::{
    cli::{Cli, Command},
    conf::config::{Config, ConfigSource},
    loader::LoadReport,
    props::{DryRun, PropertyStore},
    variant::{VARIANTS, Variant},
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// An explicit `--config` must load; the default location may be absent.
fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let config = Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    Ok(Config::load_default())
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => {
            log::info!("Using default configuration (no config file found)");
        }
        ConfigSource::Fallback(path, err) => {
            log::warn!("Ignoring config {}: {err:#}", path.display());
        }
    }
}

#[cfg(target_os = "android")]
fn init_logger(verbose: bool) {
    use crate::defs::LOG_TAG;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(LOG_TAG),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logger(verbose: bool) {
    use std::io::Write;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}

fn print_variants(json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(VARIANTS)?;
        println!("{json}");
        return Ok(());
    }

    for variant in VARIANTS {
        let carrier = variant
            .carrier
            .as_ref()
            .map(|c| format!("{} ({})", c.alpha, c.numeric))
            .unwrap_or_default();
        println!(
            "{:<8}{:<10}{:<11}{:<10}{carrier}",
            variant.bootloader_prefix, variant.device, variant.model, variant.name
        );
    }
    Ok(())
}

fn print_detect(bootloader: &str) -> Result<()> {
    match Variant::detect(bootloader) {
        Some(variant) => {
            let json = serde_json::to_string_pretty(variant)?;
            println!("{json}");
        }
        None => println!("{bootloader}: no matching variant"),
    }
    Ok(())
}

/// Goes to stderr so stdout stays a plain `key=value` stream.
fn print_report(report: &LoadReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    eprintln!("{json}");
    Ok(())
}

fn run_loader<S: PropertyStore>(mut store: S, config: &Config, dry_run: bool) -> (S, LoadReport) {
    let report = if dry_run {
        let mut dry = DryRun::new(&mut store);
        let report = loader::load_variant_overrides(&mut dry, config);
        for (name, value) in dry.writes() {
            println!("{name}={value}");
        }
        report
    } else {
        loader::load_variant_overrides(&mut store, config)
    };
    (store, report)
}

#[cfg(target_os = "android")]
fn run_on_device(config: &Config, dry_run: bool) -> Result<()> {
    let (_, report) = run_loader(props::SystemProperties, config, dry_run);
    if dry_run {
        print_report(&report)?;
    }
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn run_on_device(_config: &Config, _dry_run: bool) -> Result<()> {
    anyhow::bail!("no system property area on this platform, pass --props <file>")
}

fn run(cli: Cli, mut config: Config) -> Result<()> {
    config.merge_with_cli(cli.serial_file, cli.bootloader, cli.verbose);

    match cli.command {
        Some(Command::Variants { json }) => return print_variants(json),
        Some(Command::Detect { bootloader }) => return print_detect(&bootloader),
        None => {}
    }

    if let Some(path) = cli.props {
        let store = props::prop_file::load(&path)?;
        if store.is_empty() {
            log::warn!("{} holds no properties", path.display());
        } else {
            log::debug!("{} properties loaded from {}", store.len(), path.display());
        }

        let (store, report) = run_loader(store, &config, cli.dry_run);
        if !cli.dry_run {
            for (name, value) in store.iter() {
                println!("{name}={value}");
            }
        }
        return print_report(&report);
    }

    run_on_device(&config, cli.dry_run)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let loaded = load_config(cli.config.as_deref());
    let verbose = cli.verbose || loaded.as_ref().is_ok_and(|(c, _)| c.verbose);
    init_logger(verbose);

    let result = loaded.and_then(|(config, source)| {
        log_config_source(&source);
        run(cli, config)
    });

    if let Err(e) = &result {
        log::error!("init_tblte failed");
        for cause in e.chain() {
            log::error!("{cause:#}");
        }
    }
    result
}
