use super::{BaseAccess, Department, DepartmentBase, sealed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItDepartment {
    base: DepartmentBase,
    pub admins: Vec<String>,
}

impl ItDepartment {
    pub fn new(id: &str, admins: Vec<String>) -> Self {
        Self {
            base: DepartmentBase::new(id, "IT"),
            admins,
        }
    }
}

impl sealed::Sealed for ItDepartment {}

impl Department for ItDepartment {
    fn base(&self) -> &DepartmentBase {
        &self.base
    }

    fn base_mut(&mut self, _: BaseAccess) -> &mut DepartmentBase {
        &mut self.base
    }

    fn describe(&self) -> String {
        format!("IT Department - ID: {}", self.id())
    }
}
