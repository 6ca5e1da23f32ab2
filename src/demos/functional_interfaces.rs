//! Closures, fn items and boxed trait objects as pipeline functions.
//!
//! A predicate is any `FnMut(&T) -> bool`, a function any `FnMut(T) -> U`, a
//! consumer any `FnMut(T)` and a binary operator any `FnMut(T, T) -> T`.
//! Named fn items and closures can be used interchangeably.

use super::Report;
use anyhow::Result;

pub const NUMBERS: [i32; 7] = [2, 3, 3, 34, 54, 1, 12];

fn is_even(x: &i32) -> bool {
    x % 2 == 0
}

fn square(x: i32) -> i32 {
    x * x
}

fn sum(a: i32, b: i32) -> i32 {
    a + b
}

pub fn run(report: &mut Report<'_>) -> Result<()> {
    let even_predicate = |x: &i32| x % 2 == 0;
    let square_function = |x: i32| x * x;

    report.heading("Even numbers squared (closures)")?;
    let evens_squared = report
        .pipeline(NUMBERS)
        .filter(even_predicate)
        .map(square_function);
    let mut print_consumer = |x: i32| report.line(x);
    evens_squared.try_for_each(&mut print_consumer)?;

    report.heading("Even numbers squared (fn items)")?;
    report
        .pipeline(NUMBERS)
        .filter(is_even)
        .map(square)
        .try_for_each(|x| report.line(x))?;

    report.heading("Even numbers squared (boxed)")?;
    let boxed_predicate: Box<dyn Fn(&i32) -> bool> = Box::new(even_predicate);
    let boxed_function: Box<dyn Fn(i32) -> i32> = Box::new(square);
    report
        .pipeline(NUMBERS)
        .filter(boxed_predicate)
        .map(boxed_function)
        .try_for_each(|x| report.line(x))?;

    let closure_sum = report.pipeline(NUMBERS).reduce(0, |a, b| a + b)?;
    let fn_sum = report.pipeline(NUMBERS).reduce(0, sum)?;
    report.line(format!("Sum with closure = {}", closure_sum))?;
    report.line(format!("Sum with fn item = {}", fn_sum))?;

    Ok(())
}
