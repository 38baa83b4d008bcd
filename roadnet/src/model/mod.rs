mod cli_error;
pub mod graph;
pub mod shp;

pub use cli_error::CliError;
