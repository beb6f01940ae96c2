//! Resolves the build-time logging flags and exposes them to the crate as cfgs.
//!
//! Flags come from the crate's Cargo features and from `LOGGING_DEFINES`.
//! The resolver sources are compiled here as well, so the cfgs emitted below
//! and the library's `ACTIVE_LEVELS` constant come from the same code.

use std::env;

#[allow(dead_code)]
#[path = "src/define.rs"]
mod define;
#[allow(dead_code)]
#[path = "src/level_set.rs"]
mod level_set;
#[allow(dead_code)]
#[path = "src/resolver.rs"]
mod resolver;
#[allow(dead_code)]
#[path = "src/severity.rs"]
mod severity;

use define::Define;
use resolver::{BuildFlags, resolve};
use severity::SeverityLevel;

const DEFINES_ENV: &str = "LOGGING_DEFINES";

const SHARED_SOURCES: [&str; 4] = [
    "src/define.rs",
    "src/level_set.rs",
    "src/resolver.rs",
    "src/severity.rs",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for source in SHARED_SOURCES {
        println!("cargo:rerun-if-changed={source}");
    }
    println!("cargo:rerun-if-env-changed={DEFINES_ENV}");

    declare_cfgs();

    let mut flags = flags_from_features();
    if let Some(list) = env::var_os(DEFINES_ENV) {
        let list = list
            .to_str()
            .unwrap_or_else(|| panic!("{DEFINES_ENV} is not valid UTF-8"));
        let from_env = BuildFlags::parse_list(list)
            .unwrap_or_else(|error| panic!("{DEFINES_ENV}: {error}"));
        flags = from_env.defines().fold(flags, BuildFlags::with);
    }

    for define in flags.defines() {
        println!("cargo:rustc-cfg={}", define_cfg(define));
    }
    if flags.is_default() {
        println!("cargo:rustc-cfg=logging_default_defines");
    }
    for level in resolve(&flags) {
        println!("cargo:rustc-cfg={}", active_cfg(level));
    }
}

fn flags_from_features() -> BuildFlags {
    Define::ALL
        .into_iter()
        .filter(|define| feature_enabled(define.feature()))
        .fold(BuildFlags::new(), BuildFlags::with)
}

fn feature_enabled(feature: &str) -> bool {
    let var = format!(
        "CARGO_FEATURE_{}",
        feature.to_ascii_uppercase().replace('-', "_")
    );
    env::var_os(var).is_some()
}

fn define_cfg(define: Define) -> String {
    format!("logging_define_{}", define.name().to_ascii_lowercase())
}

fn active_cfg(level: SeverityLevel) -> String {
    format!("logging_active_{}", level.name().to_ascii_lowercase())
}

fn declare_cfgs() {
    for define in Define::ALL {
        println!("cargo:rustc-check-cfg=cfg({})", define_cfg(define));
    }
    for level in SeverityLevel::ALL {
        println!("cargo:rustc-check-cfg=cfg({})", active_cfg(level));
    }
    println!("cargo:rustc-check-cfg=cfg(logging_default_defines)");
}
