//! Identification of the executing build

use crate::{NAME, VERSION};

/// Build profile the binary was compiled with.
pub fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

/// Full identifier, e.g. `fibbench 0.1.0 (linux x86_64, release)`.
pub fn runtime_identifier() -> String {
    format!(
        "{} {} ({} {}, {})",
        NAME,
        VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH,
        build_profile()
    )
}

/// Short identifier used in the summary: the version alone.
pub fn short_identifier() -> &'static str {
    VERSION
}
