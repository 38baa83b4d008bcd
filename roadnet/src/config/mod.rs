mod import;

pub use import::{ImportConfiguration, Verbosity};
