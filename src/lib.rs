#![doc(test(attr(deny(warnings))))]

//! Controller for the device virtual-account edit wizard: step transitions,
//! readiness guards, exit confirmation and the redirect once the edit is
//! confirmed, driven by store snapshots and talking back through injected
//! dispatcher and navigator ports.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod store;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the crate default filter.
pub fn init() {
    init_with_filter(None);
}

/// Initializes global tracing, preferring `directive` over the crate default
/// when `RUST_LOG` is unset.
pub fn init_with_filter(directive: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::debug!("device_va_edit tracing initialized.");
    });
}
