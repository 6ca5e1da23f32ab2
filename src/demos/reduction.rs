//! Reductions, de-duplication, sorting and collecting.

use super::Report;
use crate::pipeline::ordering;
use anyhow::Result;
use std::ops::Add;

pub const NUMBERS: [i32; 7] = [2, 3, 3, 34, 54, 1, 12];

pub fn run(report: &mut Report<'_>) -> Result<()> {
    let sum = report.pipeline(NUMBERS).reduce(0, |a, b| a + b)?;
    report.line(format!("Sum = {}", sum))?;

    let min = report
        .pipeline(NUMBERS)
        .reduce_first(|a, b| if a > b { b } else { a })?;
    let max = report
        .pipeline(NUMBERS)
        .reduce_non_empty(|a, b| if a < b { b } else { a })?;
    if let Some(min) = min {
        report.line(format!("Min value is = {}", min))?;
    }
    report.line(format!("Max value is = {}", max))?;

    let sum_of_squares = report
        .pipeline(NUMBERS)
        .map(|x| x * x)
        .reduce(0, <i32 as Add>::add)?;
    report.line(format!("Sum of squares = {}", sum_of_squares))?;

    let sum_of_odd = report
        .pipeline(NUMBERS)
        .filter(|x| x % 2 == 1)
        .reduce(0, <i32 as Add>::add)?;
    report.line(format!("Sum of odd numbers = {}", sum_of_odd))?;

    report.heading("Distinct values")?;
    report
        .pipeline(NUMBERS)
        .distinct()
        .try_for_each(|x| report.line(x))?;

    report.heading("Sorted values")?;
    report
        .pipeline(NUMBERS)
        .sorted()
        .try_for_each(|x| report.line(x))?;

    report.heading("Reverse sorted values")?;
    report
        .pipeline(NUMBERS)
        .sorted_by(ordering::reverse::<i32>)
        .try_for_each(|x| report.line(x))?;

    let doubled = report.pipeline(NUMBERS).map(|x| x * 2).collect_to_list()?;
    report.heading("Doubled values")?;
    report
        .pipeline(doubled)
        .try_for_each(|x| report.line(x))?;

    let evens = report
        .pipeline(NUMBERS)
        .filter(|x| x % 2 == 0)
        .collect_to_list()?;
    report.heading("Even values")?;
    report.pipeline(evens).try_for_each(|x| report.line(x))?;

    Ok(())
}
