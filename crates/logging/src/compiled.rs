//! crates/logging/src/compiled.rs
//! The configuration this copy of the crate was compiled with.

use crate::define::Define;
use crate::level_set::LevelSet;
use crate::resolver::{BuildFlags, resolve};
use crate::severity::SeverityLevel;

use SeverityLevel::{Critical, Debug, Error, Info, Warning};

const fn set_if(flags: BuildFlags, enabled: bool, define: Define) -> BuildFlags {
    if enabled { flags.with(define) } else { flags }
}

/// Flags the build script collected from Cargo features and `LOGGING_DEFINES`.
pub const BUILD_FLAGS: BuildFlags = {
    let flags = BuildFlags::new();
    let flags = set_if(flags, cfg!(logging_define_no_logging), Define::NoLogging);
    let flags = set_if(flags, cfg!(logging_define_debug), Define::Debug);
    let flags = set_if(flags, cfg!(logging_define_log_everything), Define::LogEverything);
    let flags = set_if(flags, cfg!(logging_define_no_debug_logging), Define::Suppress(Debug));
    let flags = set_if(flags, cfg!(logging_define_no_info_logging), Define::Suppress(Info));
    let flags = set_if(flags, cfg!(logging_define_no_warning_logging), Define::Suppress(Warning));
    let flags = set_if(flags, cfg!(logging_define_no_error_logging), Define::Suppress(Error));
    let flags = set_if(flags, cfg!(logging_define_no_critical_logging), Define::Suppress(Critical));
    let flags = set_if(flags, cfg!(logging_define_use_debug_logger), Define::Seed(Debug));
    let flags = set_if(flags, cfg!(logging_define_use_info_logger), Define::Seed(Info));
    let flags = set_if(flags, cfg!(logging_define_use_warning_logger), Define::Seed(Warning));
    let flags = set_if(flags, cfg!(logging_define_use_error_logger), Define::Seed(Error));
    set_if(flags, cfg!(logging_define_use_critical_logger), Define::Seed(Critical))
};

/// Severities whose entry points produce output in this build.
///
/// Fixed for the lifetime of the binary; there is no runtime switch.
pub const ACTIVE_LEVELS: LevelSet = resolve(&BUILD_FLAGS);

impl SeverityLevel {
    /// Reports whether this level's entry points produce output in this build.
    #[must_use]
    pub const fn is_active(self) -> bool {
        ACTIVE_LEVELS.contains(self)
    }
}
