pub mod range;
pub mod report;

pub use range::*;
pub use report::*;
