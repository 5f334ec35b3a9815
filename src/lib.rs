pub mod catalog;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod style;
pub mod writer;

pub use cli::Cli;
pub use error::ExportError;
