//! The accounting department: a process-wide single instance that keeps an
//! append-only report log.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use roster_common::error::ReportError;
use tracing::{debug, trace};

use super::{BaseAccess, Department, DepartmentBase, sealed};

/// Employee the accounting department refuses to take on.
pub const REJECTED_EMPLOYEE: &str = "Geo";

const ACCOUNTING_ID: &str = "d1";

static INSTANCE: OnceLock<Mutex<AccountingDepartment>> = OnceLock::new();

#[derive(Debug, PartialEq, Eq)]
pub struct AccountingDepartment {
    base: DepartmentBase,
    reports: Vec<String>,
    last_report: Option<String>,
}

impl AccountingDepartment {
    fn new(id: &str, reports: Vec<String>) -> Self {
        let last_report = reports.first().cloned();
        Self {
            base: DepartmentBase::new(id, "Accounting"),
            reports,
            last_report,
        }
    }

    /// Retrieves or initializes the one accounting department of this process.
    pub fn instance() -> &'static Mutex<AccountingDepartment> {
        INSTANCE.get_or_init(|| {
            trace!("creating accounting department {ACCOUNTING_ID}");
            Mutex::new(Self::new(ACCOUNTING_ID, Vec::new()))
        })
    }

    /// Locks [`Self::instance`]. A poisoned lock is recovered, the log is append-only.
    pub fn lock() -> MutexGuard<'static, AccountingDepartment> {
        Self::instance()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_report(&mut self, text: &str) {
        self.reports.push(text.to_string());
        self.last_report = Some(text.to_string());
    }

    pub fn most_recent_report(&self) -> Result<&str, ReportError> {
        self.last_report.as_deref().ok_or(ReportError::EmptyReport)
    }

    pub fn set_most_recent_report(&mut self, value: &str) -> Result<(), ReportError> {
        if value.is_empty() {
            return Err(ReportError::InvalidInput);
        }
        self.add_report(value);
        Ok(())
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }
}

impl sealed::Sealed for AccountingDepartment {}

impl Department for AccountingDepartment {
    fn base(&self) -> &DepartmentBase {
        &self.base
    }

    fn base_mut(&mut self, _: BaseAccess) -> &mut DepartmentBase {
        &mut self.base
    }

    fn describe(&self) -> String {
        format!("Accounting Department - ID: {}", self.id())
    }

    fn add_employee(&mut self, employee: &str) {
        if employee == REJECTED_EMPLOYEE {
            debug!("accounting ignores employee {employee}");
            return;
        }
        self.base.push_employee(employee);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> AccountingDepartment {
        AccountingDepartment::new("t1", Vec::new())
    }

    #[test]
    fn instance_is_shared() {
        let first = AccountingDepartment::instance();
        let second = AccountingDepartment::instance();

        assert!(std::ptr::eq(first, second));
        assert_eq!(AccountingDepartment::lock().id(), ACCOUNTING_ID);
        assert_eq!(AccountingDepartment::lock().name(), "Accounting");
    }

    #[test]
    fn empty_log_has_no_recent_report() {
        assert_eq!(fresh().most_recent_report(), Err(ReportError::EmptyReport));
    }

    #[test]
    fn seeded_log_starts_at_first_report() {
        let dept = AccountingDepartment::new(
            "t2",
            vec![String::from("Q1"), String::from("Q2")],
        );
        assert_eq!(dept.most_recent_report(), Ok("Q1"));
    }

    #[test]
    fn add_report_updates_most_recent() {
        let mut dept = fresh();
        dept.add_report("Did it work?");
        assert_eq!(dept.most_recent_report(), Ok("Did it work?"));

        dept.add_report("Some good soup");
        assert_eq!(dept.most_recent_report(), Ok("Some good soup"));
        assert_eq!(dept.reports(), ["Did it work?", "Some good soup"]);
    }

    #[test]
    fn setter_rejects_empty_value_without_side_effects() {
        let mut dept = fresh();
        dept.add_report("kept");

        assert_eq!(dept.set_most_recent_report(""), Err(ReportError::InvalidInput));
        assert_eq!(dept.reports(), ["kept"]);
        assert_eq!(dept.most_recent_report(), Ok("kept"));
    }

    #[test]
    fn setter_appends_valid_value() {
        let mut dept = fresh();
        assert_eq!(dept.set_most_recent_report("Did it work?"), Ok(()));
        assert_eq!(dept.reports(), ["Did it work?"]);
        assert_eq!(dept.most_recent_report(), Ok("Did it work?"));
    }

    #[test]
    fn geo_is_ignored_others_are_kept() {
        let mut dept = fresh();
        dept.add_employee(REJECTED_EMPLOYEE);
        dept.add_employee("Kallyn");
        dept.add_employee(REJECTED_EMPLOYEE);

        assert_eq!(dept.employees(), ["Kallyn"]);
        assert_eq!(dept.employee_information().count, 1);
    }

    #[test]
    fn describe_names_the_id() {
        assert_eq!(fresh().describe(), "Accounting Department - ID: t1");
    }
}
