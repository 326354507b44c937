pub mod dataset;
pub mod launch;

pub use dataset::{LaunchDataset, PayloadDomain};
pub use launch::{LaunchRecord, Outcome};
