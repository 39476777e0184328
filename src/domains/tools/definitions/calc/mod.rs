//! Arithmetic and greeting tools.

pub mod greet;
pub mod sum;

pub use greet::{GreetParams, GreetTool};
pub use sum::{SumParams, SumTool};
