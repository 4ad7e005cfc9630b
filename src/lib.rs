pub mod utils;

pub use utils::{debug, DebugPrinter};
