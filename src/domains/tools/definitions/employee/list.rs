//! Employee listing tool.
//!
//! Returns the same fixed directory on every call.

use rmcp::model::CallToolResult;
use serde::Serialize;
use tracing::info;

use super::super::{NoParams, ToolDefinition};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::response::value_result;

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: &'static str,
    pub age: u32,
}

const EMPLOYEES: &[Employee] = &[
    Employee {
        name: "Ali Yılmaz",
        age: 18,
    },
    Employee {
        name: "Ayşe Demir",
        age: 22,
    },
    Employee {
        name: "Mehmet Kaya",
        age: 18,
    },
    Employee {
        name: "Zeynep Şahin",
        age: 30,
    },
];

/// Lists every employee with name and age.
pub struct EmployeeListTool;

impl EmployeeListTool {
    pub fn employees() -> &'static [Employee] {
        EMPLOYEES
    }
}

impl ToolDefinition for EmployeeListTool {
    const NAME: &'static str = "employee.list";
    const DESCRIPTION: &'static str = "Returns all employees (name, age).";

    type Params = NoParams;

    fn execute(_params: &NoParams, _ctx: &ToolContext) -> CallToolResult {
        info!("Listing {} employees", EMPLOYEES.len());
        value_result(Self::employees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::response::payload;

    #[test]
    fn test_employee_list_is_fixed() {
        let ctx = ToolContext::new();
        let first = payload(&EmployeeListTool::execute(&NoParams::default(), &ctx));
        let second = payload(&EmployeeListTool::execute(&NoParams::default(), &ctx));
        assert_eq!(first, second);

        let employees = first.as_array().unwrap();
        assert_eq!(employees.len(), 4);
        assert_eq!(employees[0]["name"], "Ali Yılmaz");
        assert_eq!(employees[3]["age"], 30);
    }
}
