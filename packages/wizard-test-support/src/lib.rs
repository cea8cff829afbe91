//! Test support for the wizard engine
//!
//! Front-ends and strategies with fully scripted or recorded behavior, plus the
//! shared logging initialization used by every test binary.

pub mod logging;
pub mod recording;
pub mod scripted;

pub use recording::{FrontendEvent, RecordingFrontend};
pub use scripted::{computer_seats, ScriptedStrategy};
