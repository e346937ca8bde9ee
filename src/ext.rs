// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Display;

use log::warn;

/// Boot-time writes must never abort the run; failures end up in the log.
pub trait ResultExt {
    fn log_if_error(self);
}

impl<T, E: Display> ResultExt for Result<T, E> {
    fn log_if_error(self) {
        if let Err(err) = self {
            warn!("{err:#}");
        }
    }
}
