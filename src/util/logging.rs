//! Console logging setup.
//!
//! Under the `csr` feature records go to the browser console through
//! `console_log`. Native builds only set the `log` level filter, so log calls
//! stay cheap no-ops in tests.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::LevelFilter;

/// Install the console logger (browser only) and apply `filter`.
///
/// Safe to call more than once; later calls only change the level.
pub fn init(filter: LevelFilter) {
    #[cfg(feature = "csr")]
    {
        if let Some(level) = filter.to_level() {
            if let Err(e) = console_log::init_with_level(level) {
                log::debug!("console logger already installed: {e}");
            }
        }
    }
    log::set_max_level(filter);
}
