pub mod logging;

pub use logging::{debug, is_enabled, DebugPrinter, DEBUG_ENV};
