//! Printing, filtering and mapping.

use super::Report;
use anyhow::Result;

pub const NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

pub const COURSES: [&str; 6] = ["Spring", "Spring Boot", "API", "PCF", "Azure", "Docker"];

pub fn run(report: &mut Report<'_>) -> Result<()> {
    print_numbers(report, &NUMBERS)?;

    report.heading("Courses containing the word Spring")?;
    report
        .pipeline(COURSES)
        .filter(|course| course.contains("Spring"))
        .try_for_each(|course| report.line(course))?;

    report.heading("Courses with at least 4 letters")?;
    report
        .pipeline(COURSES)
        .filter(|course| course.len() >= 4)
        .try_for_each(|course| report.line(course))?;

    report.heading("Number of characters in each course name")?;
    report
        .pipeline(COURSES)
        .map(str::len)
        .try_for_each(|len| report.line(len))?;

    Ok(())
}

fn print_numbers(report: &mut Report<'_>, numbers: &[i32]) -> Result<()> {
    report.heading("All numbers")?;
    report
        .pipeline(numbers.iter().copied())
        .try_for_each(|n| report.line(n))?;

    report.heading("Even numbers")?;
    report
        .pipeline(numbers.iter().copied())
        .filter(|n| n % 2 == 0)
        .try_for_each(|n| report.line(n))?;

    report.heading("Squares")?;
    report
        .pipeline(numbers.iter().copied())
        .map(|n| n * n)
        .try_for_each(|n| report.line(n))?;

    Ok(())
}
