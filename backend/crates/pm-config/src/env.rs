//! `PM_*` overrides. A variable that is set wins over config.toml.

use std::env;
use std::str::FromStr;

use log::warn;

fn read(var: &str) -> Option<String> {
    env::var(var).ok()
}

pub(crate) fn override_string(var: &str, target: &mut String) {
    if let Some(value) = read(var) {
        *target = value;
    }
}

pub(crate) fn override_optional(var: &str, target: &mut Option<String>) {
    if let Some(value) = read(var) {
        *target = Some(value);
    }
}

/// `true` and `1` switch on, any other value switches off.
pub(crate) fn override_flag(var: &str, target: &mut bool) {
    if let Some(value) = read(var) {
        *target = matches!(value.trim(), "true" | "1");
    }
}

/// Unparseable values are reported and leave the target alone.
pub(crate) fn override_parsed<T: FromStr>(var: &str, target: &mut T) {
    let Some(value) = read(var) else {
        return;
    };

    match value.trim().parse() {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!("Ignoring {}={:?}: not a valid value", var, value),
    }
}
