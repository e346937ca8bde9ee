// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Carrier {
    pub alpha: &'static str,
    pub numeric: &'static str,
}

/// One regional/carrier SKU of the Note Edge. Every string is copied
/// verbatim from the stock firmware of that SKU.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Variant {
    pub bootloader_prefix: &'static str,
    pub fingerprint: &'static str,
    pub device: &'static str,
    pub model: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub product: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
}

impl Variant {
    pub fn matches(&self, bootloader: &str) -> bool {
        bootloader.starts_with(self.bootloader_prefix)
    }

    /// First entry of [`VARIANTS`] whose prefix starts `bootloader`.
    pub fn detect(bootloader: &str) -> Option<&'static Self> {
        VARIANTS.iter().find(|variant| variant.matches(bootloader))
    }
}

// Order is significant: "N915F" is tested before "N915FY".
pub static VARIANTS: &[Variant] = &[
    // tbltexx
    Variant {
        bootloader_prefix: "N915F",
        fingerprint: "samsung/tblte/tblte:6.0.1/MMB29M/N915FXXS1DQH2:user/release-keys",
        device: "tblte",
        model: "SM-N915F",
        name: "tblte",
        description: "tblte-user 6.0.1 MMB29M N915FXXS1DQH2 release-keys",
        product: "tblte",
        carrier: None,
    },
    // tbltexx
    Variant {
        bootloader_prefix: "N915FY",
        fingerprint: "samsung/tbltebtu/tblte:6.0.1/MMB29M/N915FYXXS1DQH2:user/release-keys",
        device: "tblte",
        model: "SM-N915FY",
        name: "tbltebtu",
        description: "tbltebtu-user 6.0.1 MMB29M N915FYXXS1DQH2 release-keys",
        product: "tblte",
        carrier: None,
    },
    // tbltedt
    Variant {
        bootloader_prefix: "N915G",
        fingerprint: "samsung/tbltedt/tblte:6.0.1/MMB29M/N915GDTS1DQE1:user/release-keys",
        device: "tblte",
        model: "SM-N915G",
        name: "tbltedt",
        description: "tbltedt-user 6.0.1 MMB29M N915GDTS1DQE1 release-keys",
        product: "tblte",
        carrier: None,
    },
    Variant {
        bootloader_prefix: "N915P",
        fingerprint: "samsung/tbltespr/tblte:6.0.1/MMB29M/N915PVPS4DQC1:user/release-keys",
        device: "tbltespr",
        model: "SM-N915P",
        name: "tbltespr",
        description: "tbltespr-user 6.0.1 MMB29M N915PVPS4DQC1 release-keys",
        product: "tbltespr",
        carrier: Some(Carrier {
            alpha: "Sprint",
            numeric: "310120",
        }),
    },
    Variant {
        bootloader_prefix: "N915R4",
        fingerprint: "samsung/tblteusc/tblte:6.0.1/MMB29M/N915R4TYS1CQC1:user/release-keys",
        device: "tblteusc",
        model: "SM-N915R4",
        name: "tblteusc",
        description: "tblteusc-user 6.0.1 MMB29M N915R4TYS1CQC1 release-keys",
        product: "tblteusc",
        carrier: Some(Carrier {
            alpha: "U.S. Cellular",
            numeric: "311580",
        }),
    },
    Variant {
        bootloader_prefix: "N915T",
        fingerprint: "samsung/tbltetmo/tblte:6.0.1/MMB29M/N915TUVS2EQE2:user/release-keys",
        device: "tbltetmo",
        model: "SM-N915T",
        name: "tbltetmo",
        description: "tbltetmo-user 6.0.1 MMB29M N915TUVS2EQE2 release-keys",
        product: "tbltetmo",
        carrier: None,
    },
    Variant {
        bootloader_prefix: "N915V",
        fingerprint: "Verizon/tbltevzw/tblte:6.0.1/MMB29M/N915VVRS2CQE1:user/release-keys",
        device: "tbltevzw",
        model: "SM-N915V",
        name: "tbltevzw",
        description: "tbltevzw-user 6.0.1 MMB29M N915VVRS2CQE1 release-keys",
        product: "tbltevzw",
        carrier: Some(Carrier {
            alpha: "Verizon",
            numeric: "311480",
        }),
    },
    Variant {
        bootloader_prefix: "N915W8",
        fingerprint: "samsung/tbltecan/tblte:6.0.1/MMB29M/N915W8VLS1DQD1:user/release-keys",
        device: "tbltecan",
        model: "SM-N915W8",
        name: "tbltecan",
        description: "tbltecan-user 6.0.1 MMB29M N915W8VLS1DQD1 release-keys",
        product: "tbltecan",
        carrier: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn shadowed_by_earlier(index: usize) -> bool {
        VARIANTS[..index]
            .iter()
            .any(|earlier| VARIANTS[index].bootloader_prefix.starts_with(earlier.bootloader_prefix))
    }

    #[test]
    fn eight_variants_in_firmware_order() {
        let prefixes: Vec<_> = VARIANTS.iter().map(|v| v.bootloader_prefix).collect();
        assert_eq!(
            prefixes,
            ["N915F", "N915FY", "N915G", "N915P", "N915R4", "N915T", "N915V", "N915W8"]
        );
    }

    #[test]
    fn only_fy_is_shadowed() {
        let shadowed: Vec<_> = (0..VARIANTS.len())
            .filter(|&i| shadowed_by_earlier(i))
            .map(|i| VARIANTS[i].bootloader_prefix)
            .collect();
        assert_eq!(shadowed, ["N915FY"]);
    }

    #[test]
    fn detect_picks_first_match() {
        for (index, variant) in VARIANTS.iter().enumerate() {
            if shadowed_by_earlier(index) {
                continue;
            }
            let bootloader = format!("{}XXU1DQH2", variant.bootloader_prefix);
            assert_eq!(Variant::detect(&bootloader), Some(variant));
            assert_eq!(Variant::detect(variant.bootloader_prefix), Some(variant));
        }

        let fy = Variant::detect("N915FYXXU1DQH2").unwrap();
        assert_eq!(fy.bootloader_prefix, "N915F");
        assert_eq!(fy.model, "SM-N915F");
    }

    #[test]
    fn detect_is_case_sensitive_prefix() {
        assert_eq!(Variant::detect(""), None);
        assert_eq!(Variant::detect("n915fxxu1dqh2"), None);
        assert_eq!(Variant::detect("N915"), None);
        assert_eq!(Variant::detect("XN915F"), None);
        assert_eq!(Variant::detect("N910FXXU1DQH2"), None);
    }

    #[test]
    fn fingerprint_and_description_agree() {
        for variant in VARIANTS {
            let build_id = variant
                .fingerprint
                .strip_suffix(":user/release-keys")
                .and_then(|rest| rest.rsplit('/').next())
                .unwrap();
            assert!(build_id.starts_with(variant.bootloader_prefix));
            let tail = format!(
                "/{}/tblte:6.0.1/MMB29M/{build_id}:user/release-keys",
                variant.name
            );
            assert!(variant.fingerprint.ends_with(&tail));
            assert_eq!(
                variant.description,
                format!("{}-user 6.0.1 MMB29M {build_id} release-keys", variant.name)
            );
            assert_eq!(variant.model, format!("SM-{}", variant.bootloader_prefix));
        }
    }

    #[test]
    fn carriers_only_on_cdma_variants() {
        let carriers: Vec<_> = VARIANTS
            .iter()
            .filter_map(|v| v.carrier.as_ref().map(|c| (v.bootloader_prefix, c.alpha, c.numeric)))
            .collect();
        assert_eq!(
            carriers,
            [
                ("N915P", "Sprint", "310120"),
                ("N915R4", "U.S. Cellular", "311580"),
                ("N915V", "Verizon", "311480"),
            ]
        );
    }
}
