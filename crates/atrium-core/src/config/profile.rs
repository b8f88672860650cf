use std::fmt;
use std::sync::OnceLock;

use log::LevelFilter;

/// Runtime profile the process runs under.
///
/// The profile is pinned process-wide the first time [`activate`] is called.
/// Every later call is a no-op that returns the pinned value, so the hook is
/// safe to invoke more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    /// Development behavior: verbose logging, module graph dump on validate.
    Development,
    /// Production behavior: info-level logging cap, no diagnostics dump.
    Production,
}

impl RuntimeProfile {
    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeProfile::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeProfile::Development)
    }
}

impl fmt::Display for RuntimeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeProfile::Development => write!(f, "development"),
            RuntimeProfile::Production => write!(f, "production"),
        }
    }
}

static ACTIVE_PROFILE: OnceLock<RuntimeProfile> = OnceLock::new();

/// Pin the runtime profile for the rest of the process lifetime.
///
/// Only the first call has any effect. The returned value is the profile
/// that is actually active, which may differ from `profile` if another call
/// won the race.
pub fn activate(profile: RuntimeProfile) -> RuntimeProfile {
    let active = *ACTIVE_PROFILE.get_or_init(|| {
        apply(profile);
        profile
    });
    if active != profile {
        log::debug!("runtime profile already pinned to {}, ignoring {}", active, profile);
    }
    active
}

/// The active profile. Falls back to development when nothing was pinned.
pub fn active() -> RuntimeProfile {
    ACTIVE_PROFILE
        .get()
        .copied()
        .unwrap_or(RuntimeProfile::Development)
}

/// Whether a profile has been pinned yet.
pub fn is_pinned() -> bool {
    ACTIVE_PROFILE.get().is_some()
}

/// One-time side effects of the chosen profile.
fn apply(profile: RuntimeProfile) {
    if profile.is_production() {
        // Production runs never emit debug or trace records, regardless of
        // what the logger implementation was configured with.
        log::set_max_level(LevelFilter::Info);
        log::info!("production profile active");
    } else {
        log::debug!("development profile active");
    }
}
