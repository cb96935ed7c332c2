#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn init_applies_level_filter_and_can_repeat() {
    init(LevelFilter::Warn);
    assert_eq!(log::max_level(), LevelFilter::Warn);

    init(LevelFilter::Debug);
    assert_eq!(log::max_level(), LevelFilter::Debug);
}
