// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub const SERIAL_NUMBER_FILE: &str = "/efs/FactoryApp/serial_no";

pub const CONFIG_FILE_DEFAULT: &str = "/vendor/etc/init_tblte.toml";

#[cfg(target_os = "android")]
pub const LOG_TAG: &str = "init_tblte";

pub const PROP_BOOTLOADER: &str = "ro.bootloader";
pub const PROP_SERIALNO: &str = "ro.serialno";
pub const PROP_PRODUCT_PREFIX: &str = "ro.product.";
pub const PROP_PRODUCT_DEVICE: &str = "ro.product.device";
pub const PROP_BUILD_DESCRIPTION: &str = "ro.build.description";
pub const PROP_BUILD_PRODUCT: &str = "ro.build.product";
pub const PROP_OPERATOR_ALPHA: &str = "ro.cdma.home.operator.alpha";
pub const PROP_OPERATOR_NUMERIC: &str = "ro.cdma.home.operator.numeric";

/// Sources under which `ro.product.*` may be queried, in the order
/// build/tools/releasetools/ota_from_target_files.py consults them, with a
/// trailing "." and the bare entry first.
pub const RO_PRODUCT_PROPS_DEFAULT_SOURCE_ORDER: &[&str] = &[
    "",
    "product.",
    "product_services.",
    "odm.",
    "vendor.",
    "system.",
];

pub const SUFFIX_FINGERPRINT: &str = "fingerprint";
pub const SUFFIX_DEVICE: &str = "device";
pub const SUFFIX_MODEL: &str = "model";
pub const SUFFIX_NAME: &str = "name";
