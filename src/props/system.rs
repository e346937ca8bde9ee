// Copyright 2026 init_tblte Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::{CStr, CString, c_void};

use anyhow::{Context, Result, ensure};
use libc::{c_char, c_int, c_uint};

use super::PropertyStore;

#[repr(C)]
struct PropInfo {
    _opaque: [u8; 0],
}

type ReadCallback = unsafe extern "C" fn(
    cookie: *mut c_void,
    name: *const c_char,
    value: *const c_char,
    serial: u32,
);

unsafe extern "C" {
    fn __system_property_find(name: *const c_char) -> *const PropInfo;
    fn __system_property_read_callback(
        pi: *const PropInfo,
        callback: ReadCallback,
        cookie: *mut c_void,
    );
    fn __system_property_update(pi: *mut PropInfo, value: *const c_char, len: c_uint) -> c_int;
    fn __system_property_add(
        name: *const c_char,
        namelen: c_uint,
        value: *const c_char,
        valuelen: c_uint,
    ) -> c_int;
}

unsafe extern "C" fn read_value(
    cookie: *mut c_void,
    _name: *const c_char,
    value: *const c_char,
    _serial: u32,
) {
    let slot = unsafe { &mut *cookie.cast::<Option<String>>() };
    if !value.is_null() {
        let value = unsafe { CStr::from_ptr(value) };
        *slot = Some(value.to_string_lossy().into_owned());
    }
}

fn c_string(what: &str, s: &str) -> Result<CString> {
    CString::new(s).with_context(|| format!("{what} contains NUL: {s:?}"))
}

fn c_len(s: &CString) -> Result<c_uint> {
    c_uint::try_from(s.as_bytes().len()).context("property too long")
}

/// The bionic property area. Writes only succeed from init, which maps the
/// area read-write before vendor code runs.
pub struct SystemProperties;

impl SystemProperties {
    fn find(name: &CString) -> *const PropInfo {
        unsafe { __system_property_find(name.as_ptr()) }
    }
}

impl PropertyStore for SystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        let name = CString::new(name).ok()?;
        let pi = Self::find(&name);
        if pi.is_null() {
            return None;
        }

        let mut value: Option<String> = None;
        unsafe {
            __system_property_read_callback(
                pi,
                read_value,
                (&raw mut value).cast::<c_void>(),
            );
        }
        value
    }

    fn update(&mut self, name: &str, value: &str) -> Result<bool> {
        let c_name = c_string("property name", name)?;
        let c_value = c_string("property value", value)?;

        let pi = Self::find(&c_name);
        if pi.is_null() {
            return Ok(false);
        }

        let len = c_len(&c_value)?;
        let ret = unsafe { __system_property_update(pi.cast_mut(), c_value.as_ptr(), len) };
        ensure!(ret == 0, "__system_property_update({name}) returned {ret}");
        Ok(true)
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        let c_name = c_string("property name", name)?;
        let c_value = c_string("property value", value)?;

        let ret = unsafe {
            __system_property_add(
                c_name.as_ptr(),
                c_len(&c_name)?,
                c_value.as_ptr(),
                c_len(&c_value)?,
            )
        };
        ensure!(ret == 0, "__system_property_add({name}) returned {ret}");
        Ok(())
    }
}
