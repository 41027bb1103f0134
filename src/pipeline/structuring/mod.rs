pub mod types;
pub mod header;
pub mod entry;
pub mod parser;

pub use types::*;
pub use header::*;
pub use entry::*;
pub use parser::*;
