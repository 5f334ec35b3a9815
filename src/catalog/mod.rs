pub mod builtin;
pub mod config;
pub mod types;

pub use builtin::*;
pub use config::*;
pub use types::*;
