//! The shared **contract** for departments.
//!
//! Every concrete department (see [`it`] and [`accounting`]) holds a
//! [`DepartmentBase`] and implements [`Department`]. Only [`Department::describe`]
//! must be written by each variant; the employee roster behaviour is provided
//! here and may be overridden.
//!
//! **Architectural Note:**
//! Code that works with "any department" should take `&dyn Department` (or a
//! generic bound) and never match on the concrete type.
//!
//! The roster of a department can only grow through [`Department::add_employee`],
//! so a variant's hiring rules cannot be skipped from outside this crate:
//!
//! ```compile_fail
//! use roster_core::department::{AccountingDepartment, BaseAccess, Department};
//!
//! let mut accounting = AccountingDepartment::lock();
//! accounting.base_mut(BaseAccess(())).push_employee("Geo");
//! ```

use std::fmt;

pub mod accounting;
pub mod it;

pub use accounting::AccountingDepartment;
pub use it::ItDepartment;

/// Fiscal year shared by every department. Readable without an instance.
pub const FISCAL_YEAR: u16 = 2023;

/// An employee record, as produced by [`create_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
}

/// Builds an employee record without touching any department.
pub fn create_employee(name: &str) -> Employee {
    Employee {
        name: name.to_string(),
    }
}

/// State every department carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentBase {
    id: String,
    name: String,
    employees: Vec<String>,
}

impl DepartmentBase {
    pub(crate) fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            employees: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn employees(&self) -> &[String] {
        &self.employees
    }

    pub(crate) fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn push_employee(&mut self, employee: &str) {
        self.employees.push(employee.to_string());
    }
}

/// Proof of being inside this crate, required for mutable access to a [`DepartmentBase`].
pub struct BaseAccess(());

mod sealed {
    pub trait Sealed {}
}

/// Read-only snapshot of a department roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeInformation<'a> {
    pub count: usize,
    pub employees: &'a [String],
}

impl fmt::Display for EmployeeInformation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.count, self.employees)
    }
}

/// Implemented only by the departments of this crate.
pub trait Department: sealed::Sealed {
    fn base(&self) -> &DepartmentBase;
    fn base_mut(&mut self, access: BaseAccess) -> &mut DepartmentBase;

    /// Identifying line for this department. No default exists.
    fn describe(&self) -> String;

    fn id(&self) -> &str {
        self.base().id()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn set_name(&mut self, name: &str) {
        self.base_mut(BaseAccess(())).rename(name);
    }

    fn employees(&self) -> &[String] {
        self.base().employees()
    }

    fn add_employee(&mut self, employee: &str) {
        self.base_mut(BaseAccess(())).push_employee(employee);
    }

    fn employee_information(&self) -> EmployeeInformation<'_> {
        let employees = self.employees();
        EmployeeInformation {
            count: employees.len(),
            employees,
        }
    }
}
