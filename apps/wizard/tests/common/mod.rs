#![allow(dead_code)]

use std::time::Duration;

use wizard::GameConfig;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    wizard_test_support::logging::init();
}

pub fn quick_config(seed: u64) -> GameConfig {
    GameConfig::default()
        .with_seed(seed)
        .with_deal_pause(Duration::ZERO)
}
