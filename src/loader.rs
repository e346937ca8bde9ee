// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    conf::config::Config,
    defs::{
        PROP_BOOTLOADER, PROP_BUILD_DESCRIPTION, PROP_BUILD_PRODUCT, PROP_OPERATOR_ALPHA,
        PROP_OPERATOR_NUMERIC, PROP_PRODUCT_DEVICE, PROP_PRODUCT_PREFIX, PROP_SERIALNO,
        RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER, SUFFIX_DEVICE, SUFFIX_FINGERPRINT, SUFFIX_MODEL,
        SUFFIX_NAME,
    },
    ext::ResultExt,
    props::PropertyStore,
    variant::Variant,
};

#[derive(Debug, Serialize)]
pub struct LoadReport {
    pub bootloader: String,
    pub serial_number: Option<String>,
    pub variant: Option<&'static Variant>,
    pub device: String,
}

fn try_override<S: PropertyStore + ?Sized>(
    store: &mut S,
    name: &str,
    value: &str,
    add: bool,
) -> Result<()> {
    if !store.update(name, value)? && add {
        store.add(name, value)?;
    }
    Ok(())
}

/// Rewrites `name` in place, or creates it when absent and `add` is set.
pub fn override_property<S: PropertyStore + ?Sized>(
    store: &mut S,
    name: &str,
    value: &str,
    add: bool,
) {
    try_override(store, name, value, add)
        .with_context(|| format!("failed to override {name}"))
        .log_if_error();
}

/// `ro.product.<source><prop>`, only if the build already defines it.
pub fn set_ro_product_prop<S: PropertyStore + ?Sized>(
    store: &mut S,
    source: &str,
    prop: &str,
    value: &str,
) {
    let prop_name = format!("{PROP_PRODUCT_PREFIX}{source}{prop}");
    override_property(store, &prop_name, value, false);
}

pub fn read_serial_number<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(content) => Some(String::from_utf8_lossy(&content).trim().to_string()),
        Err(e) => {
            log::debug!("serial number unavailable ({}): {e}", path.display());
            None
        }
    }
}

pub fn apply_variant<S: PropertyStore + ?Sized>(store: &mut S, variant: &Variant) {
    for source in RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER {
        set_ro_product_prop(store, source, SUFFIX_FINGERPRINT, variant.fingerprint);
        set_ro_product_prop(store, source, SUFFIX_DEVICE, variant.device);
        set_ro_product_prop(store, source, SUFFIX_MODEL, variant.model);
        set_ro_product_prop(store, source, SUFFIX_NAME, variant.name);
    }

    override_property(store, PROP_BUILD_DESCRIPTION, variant.description, true);
    override_property(store, PROP_BUILD_PRODUCT, variant.product, true);

    if let Some(carrier) = &variant.carrier {
        store
            .set(PROP_OPERATOR_ALPHA, carrier.alpha)
            .with_context(|| format!("failed to set {PROP_OPERATOR_ALPHA}"))
            .log_if_error();
        store
            .set(PROP_OPERATOR_NUMERIC, carrier.numeric)
            .with_context(|| format!("failed to set {PROP_OPERATOR_NUMERIC}"))
            .log_if_error();
    }
}

pub fn load_variant_overrides<S: PropertyStore + ?Sized>(
    store: &mut S,
    config: &Config,
) -> LoadReport {
    let bootloader = match &config.bootloader {
        Some(bootloader) => bootloader.clone(),
        None => store.get_or(PROP_BOOTLOADER, ""),
    };

    let serial_number = read_serial_number(&config.serial_number_file);
    if let Some(serial_number) = &serial_number {
        override_property(store, PROP_SERIALNO, serial_number, true);
    }

    let variant = Variant::detect(&bootloader);
    match variant {
        Some(variant) => {
            log::debug!(
                "bootloader {bootloader} matches {} ({})",
                variant.bootloader_prefix,
                variant.name
            );
            apply_variant(store, variant);
        }
        None => log::debug!("bootloader {bootloader:?} matches no known variant"),
    }

    let device = store.get_or(PROP_PRODUCT_DEVICE, "");
    log::info!("Found bootloader {bootloader}. Setting build properties for {device}.");

    LoadReport {
        bootloader,
        serial_number,
        variant,
        device,
    }
}
