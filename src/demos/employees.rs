//! Creating pipelines over employee records and running every terminal on them.

use super::employee::{nested_names, sample_employees, Employee};
use super::Report;
use crate::pipeline::SourceBuilder;
use anyhow::Result;
use std::collections::BTreeMap;

const RAISE: f64 = 10.0;

pub fn run(report: &mut Report<'_>) -> Result<()> {
    let employees = sample_employees();

    creation(report, &employees)?;

    report.heading("For each")?;
    report
        .pipeline(&employees)
        .try_for_each(|e| report.line(e))?;

    let doubled_ids = report.pipeline([1, 2, 3]).map(|id| id * 2).collect_to_list()?;
    report.heading("Map")?;
    report
        .pipeline(doubled_ids)
        .try_for_each(|id| report.line(id))?;

    let senior = report
        .pipeline(&employees)
        .filter(|e| e.id >= 2)
        .collect_to_list()?;
    report.heading("Filter")?;
    report.pipeline(senior).try_for_each(|e| report.line(e))?;

    let first_high_earner = report
        .pipeline(&employees)
        .filter(|e| e.salary > 100_000.0)
        .find_first()?;
    report.heading("Find first")?;
    match first_high_earner {
        Some(employee) => report.line(employee)?,
        None => report.line("none")?,
    }

    let array = report.pipeline(employees.iter().cloned()).to_array()?;
    report.heading("To array")?;
    report.line(format!("{} employees", array.len()))?;

    let names = report
        .pipeline(nested_names())
        .flat_map(|person| person)
        .collect_to_list()?;
    report.heading("Flat map")?;
    report.pipeline(names).try_for_each(|name| report.line(name))?;

    peek_raises(report, &employees)?;
    partition(report, &employees)?;
    grouping(report, &employees)?;

    Ok(())
}

fn creation(report: &mut Report<'_>, employees: &[Employee]) -> Result<()> {
    report.heading("Creation")?;

    let from_slice = report.pipeline(employees).count()?;
    report.line(format!("from a slice: {}", from_slice))?;

    let from_vec = report.pipeline(employees.to_vec()).count()?;
    report.line(format!("from an owned vec: {}", from_vec))?;

    let from_items = report
        .pipeline([&employees[0], &employees[1], &employees[2]])
        .count()?;
    report.line(format!("from listed items: {}", from_items))?;

    let mut builder = SourceBuilder::new();
    for employee in employees {
        builder.accept(employee);
    }
    let from_builder = builder.build().with_config(report.config().clone()).count()?;
    report.line(format!("from a builder: {}", from_builder))?;

    Ok(())
}

/// Raise every salary, observing each raised record as it passes.
fn peek_raises(report: &mut Report<'_>, employees: &[Employee]) -> Result<()> {
    let mut observed = Vec::new();
    let raised = report
        .pipeline(employees)
        .map(|e| e.with_raise(RAISE))
        .peek(|e| observed.push(e.to_string()))
        .collect_to_list()?;

    report.heading("Peek")?;
    for line in &observed {
        report.line(line)?;
    }
    report.line(format!("collected {} raised employees", raised.len()))?;
    Ok(())
}

fn partition(report: &mut Report<'_>, employees: &[Employee]) -> Result<()> {
    let partition = report
        .pipeline(employees)
        .collect_partitioned_by(|e| e.salary > 200_000.0)?;

    report.heading("Partition by salary > 200000")?;
    for matched in [true, false] {
        let names: Vec<&str> = partition
            .get(matched)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        report.line(format!("{}: [{}]", matched, names.join(", ")))?;
    }
    Ok(())
}

fn grouping(report: &mut Report<'_>, employees: &[Employee]) -> Result<()> {
    let by_salary: BTreeMap<_, _> = report
        .pipeline(employees)
        .collect_grouped_by(|e| e.whole_salary())?
        .into_iter()
        .collect();
    report.heading("Group by salary")?;
    for (salary, group) in &by_salary {
        let names: Vec<&str> = group.iter().map(|e| e.name.as_str()).collect();
        report.line(format!("{}: [{}]", salary, names.join(", ")))?;
    }

    let salaries_by_name: BTreeMap<_, _> = report
        .pipeline(employees)
        .collect_grouped_mapping(|e| e.name.clone(), |e| e.salary)?
        .into_iter()
        .collect();
    report.heading("Salaries by name")?;
    for (name, salaries) in &salaries_by_name {
        let salaries: Vec<String> = salaries.iter().map(|s| format!("{:.1}", s)).collect();
        report.line(format!("{}: [{}]", name, salaries.join(", ")))?;
    }
    Ok(())
}
