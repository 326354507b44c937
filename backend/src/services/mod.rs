//! Chart bindings.
//!
//! Each binding is a pure function of the shared dataset and the current
//! control values. Nothing here mutates the dataset or holds state between
//! calls, so repeated calls with the same input return equal specs.

pub mod pie;
pub mod scatter;



pub use pie::success_pie_chart;
pub use scatter::payload_scatter_chart;
