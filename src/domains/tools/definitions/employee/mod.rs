//! Employee directory tools.

pub mod list;

pub use list::{Employee, EmployeeListTool};
