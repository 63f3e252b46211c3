use colored::*;
use tracing::{info, warn};

use crate::terminal::{colors, print::{self, Row}};
use roster_common::config::Config;
use roster_core::department::{
    self, AccountingDepartment, Department, FISCAL_YEAR, ItDepartment,
};

const IT_ID: &str = "d2";
const DEFAULT_REPORTS: [&str; 2] = ["Did it work?", "Some good soup"];
const DEFAULT_EMPLOYEES: [&str; 2] = ["Geo", "Kallyn"];

pub fn departments(reports: Vec<String>, employees: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let reports: Vec<String> = or_defaults(reports, &DEFAULT_REPORTS);
    let employees: Vec<String> = or_defaults(employees, &DEFAULT_EMPLOYEES);

    print::section("shared members", cfg);
    let employee = department::create_employee("Geo");
    print::fields(&[
        ("Employee", format!("{:?}", employee).normal()),
        ("Fiscal year", FISCAL_YEAR.to_string().normal()),
    ]);

    let mut it = ItDepartment::new(IT_ID, vec![String::from("Geo")]);

    let first = AccountingDepartment::instance();
    let second = AccountingDepartment::instance();
    if std::ptr::eq(first, second) {
        info!("accounting instance is shared");
    } else {
        warn!("accounting instance was created twice");
    }
    let mut accounting = AccountingDepartment::lock();

    print::section("accounting reports", cfg);
    file_reports(&mut accounting, &reports)?;
    print::fields(&[("Latest", accounting.most_recent_report()?.bold().green())]);
    if cfg.shows_details() {
        print_reports(&accounting);
    }

    for employee in &employees {
        accounting.add_employee(employee);
        it.add_employee(employee);
    }

    print::section("departments", cfg);
    let departments: [&dyn Department; 2] = [&*accounting, &it];
    for (idx, dept) in departments.iter().enumerate() {
        if idx > 0 {
            print::blank();
        }
        print_department(*dept, idx, cfg);
    }

    print_summary(&departments, accounting.reports().len(), cfg);
    Ok(())
}

fn or_defaults(values: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if values.is_empty() {
        defaults.iter().map(|v| v.to_string()).collect()
    } else {
        values
    }
}

/// The first report goes through the validating setter, the rest are appended.
fn file_reports(accounting: &mut AccountingDepartment, reports: &[String]) -> anyhow::Result<()> {
    let Some((first, rest)) = reports.split_first() else {
        return Ok(());
    };

    accounting.set_most_recent_report(first)?;
    for report in rest {
        accounting.add_report(report);
    }
    Ok(())
}

fn print_reports(accounting: &AccountingDepartment) {
    let labels: Vec<String> = (0..accounting.reports().len())
        .map(|idx| format!("#{idx}"))
        .collect();
    let rows: Vec<Row<'_>> = labels
        .iter()
        .zip(accounting.reports())
        .map(|(label, report)| (label.as_str(), report.color(colors::TEXT_DEFAULT)))
        .collect();

    print::branches(&rows);
}

fn print_department(dept: &dyn Department, idx: usize, cfg: &Config) {
    print::entry(idx, &dept.describe());
    if !cfg.shows_details() {
        return;
    }

    print::branches(&[
        ("Name", dept.name().color(colors::SECONDARY)),
        ("Employees", dept.employee_information().to_string().color(colors::ACCENT)),
    ]);
}

fn print_summary(departments: &[&dyn Department], reports_len: usize, cfg: &Config) {
    let staffed: usize = departments.iter().map(|d| d.employees().len()).sum();
    let staffed: ColoredString = format!("{staffed} employees").bold().green();
    let reports: ColoredString = format!("{reports_len} reports").bold().yellow();
    let output: ColoredString = format!("Roster Complete: {staffed} on file, {reports} logged")
        .color(colors::TEXT_DEFAULT);

    if cfg.shows_headers() {
        print::rule();
        print::centered(&output);
    } else {
        print::blank();
        info!("{output}");
    }
}
