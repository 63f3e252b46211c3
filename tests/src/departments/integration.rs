#![cfg(test)]
use roster_common::error::ReportError;
use roster_core::department::{
    AccountingDepartment, Department, FISCAL_YEAR, ItDepartment, create_employee,
};

/// The accounting department is process-wide, so every test that touches it
/// holds the lock for its whole body and only asserts on what it added itself.
#[test]
fn singleton_identity_across_calls() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| AccountingDepartment::instance() as *const _ as usize))
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    let local = AccountingDepartment::instance() as *const _ as usize;
    assert!(addresses.iter().all(|addr| *addr == local));
}

#[test]
fn report_scenario_keeps_insertion_order() {
    let mut accounting = AccountingDepartment::lock();
    let before = accounting.reports().len();

    accounting
        .set_most_recent_report("Did it work?")
        .expect("non-empty report is accepted");
    accounting.add_report("Some good soup");

    assert_eq!(accounting.most_recent_report(), Ok("Some good soup"));
    assert_eq!(
        &accounting.reports()[before..],
        ["Did it work?", "Some good soup"]
    );
}

#[test]
fn empty_report_is_rejected_through_the_singleton() {
    let mut accounting = AccountingDepartment::lock();
    accounting.add_report("baseline");
    let snapshot = accounting.reports().to_vec();

    assert_eq!(
        accounting.set_most_recent_report(""),
        Err(ReportError::InvalidInput)
    );
    assert_eq!(accounting.reports(), snapshot.as_slice());
    assert_eq!(accounting.most_recent_report(), Ok("baseline"));
}

#[test]
fn geo_rule_only_applies_to_accounting() {
    let mut accounting = AccountingDepartment::lock();
    let mut it = ItDepartment::new("d2", vec![String::from("Geo")]);
    let before = accounting.employees().len();

    for dept in [&mut *accounting as &mut dyn Department, &mut it] {
        dept.add_employee("Geo");
    }

    assert_eq!(accounting.employees().len(), before);
    assert_eq!(it.employees(), ["Geo"]);
}

#[test]
fn departments_share_the_fiscal_year_and_describe_themselves() {
    let it = ItDepartment::new("d2", Vec::new());
    let accounting = AccountingDepartment::lock();
    let departments: [&dyn Department; 2] = [&it, &*accounting];

    let descriptions: Vec<String> = departments.iter().map(|d| d.describe()).collect();
    assert_eq!(
        descriptions,
        ["IT Department - ID: d2", "Accounting Department - ID: d1"]
    );
    assert_eq!(FISCAL_YEAR, 2023);
    assert_eq!(create_employee("Geo").name, "Geo");
}

#[test]
fn accounting_roster_only_grows_through_add_employee() {
    let mut accounting = AccountingDepartment::lock();
    let before = accounting.employees().to_vec();

    accounting.add_employee("Geo");
    accounting.set_name("Accounting");
    let dept: &mut dyn Department = &mut *accounting;
    dept.add_employee("Geo");
    let info = dept.employee_information();

    assert_eq!(info.employees, before.as_slice());
    assert!(accounting.employees().iter().all(|name| name != "Geo"));
    assert_eq!(accounting.base().employees(), before.as_slice());
}
