//! Input path resolution.

use std::path::PathBuf;

/// Environment variable overriding the field schema location.
pub const FIELD_SCHEMA_ENV_VAR: &str = "EPR_FIELD_SCHEMA";
/// Environment variable overriding the protocol document location.
pub const PROTOCOLS_ENV_VAR: &str = "EPR_PROTOCOLS";

pub const DEFAULT_FIELD_SCHEMA_FILE: &str = "AEPR_Attributes.json";
pub const DEFAULT_PROTOCOLS_FILE: &str = "JRCALC_Protocols.json";

/// Get the field schema path.
///
/// Resolution order:
/// 1. `explicit` (command-line argument)
/// 2. `EPR_FIELD_SCHEMA` environment variable
/// 3. `AEPR_Attributes.json` in the working directory
pub fn field_schema_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve(explicit, FIELD_SCHEMA_ENV_VAR, DEFAULT_FIELD_SCHEMA_FILE)
}

/// Get the protocol document path.
///
/// Same resolution order as [`field_schema_path`], using `EPR_PROTOCOLS`
/// and `JRCALC_Protocols.json`.
pub fn protocols_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve(explicit, PROTOCOLS_ENV_VAR, DEFAULT_PROTOCOLS_FILE)
}

fn resolve(explicit: Option<PathBuf>, env_var: &str, default_file: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default_file),
    }
}
