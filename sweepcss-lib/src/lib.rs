pub mod error;
mod lines;
pub mod naming;
pub mod optimize;
pub mod refine;
pub mod report;
pub mod split;

pub use error::SweepError;
pub use report::Report;
