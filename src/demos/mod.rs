//! Demonstration programs built on the pipeline.
//!
//! Each demo prints a sequence of small pipelines to a [`Report`]. They cover
//! the same ground as a typical introduction to stream processing: printing,
//! filtering and mapping, reductions, sorting and de-duplication, function
//! values, and working with a simple employee record.

pub mod basics;
pub mod employee;
pub mod employees;
pub mod functional_interfaces;
pub mod reduction;

pub use employee::Employee;

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;
use clap::ValueEnum;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Available demonstrations, in the order `run` executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Demo {
    /// Printing, filtering and mapping numbers and course names
    Basics,
    /// Reductions, distinct, sorting and collecting
    Reduction,
    /// Closures and fn items as predicates, functions and consumers
    FunctionalInterfaces,
    /// Creating and transforming employee records
    Employees,
}

impl Demo {
    pub const ALL: [Demo; 4] = [
        Demo::Basics,
        Demo::Reduction,
        Demo::FunctionalInterfaces,
        Demo::Employees,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Reduction => "reduction",
            Self::FunctionalInterfaces => "functional-interfaces",
            Self::Employees => "employees",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Reduction => "Reduction",
            Self::FunctionalInterfaces => "Functional Interfaces",
            Self::Employees => "Employees",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Basics => "Printing, filtering and mapping numbers and course names",
            Self::Reduction => "Reductions, distinct, sorting and collecting",
            Self::FunctionalInterfaces => "Closures and fn items as pipeline functions",
            Self::Employees => "Creating and transforming employee records",
        }
    }

    pub fn run(self, report: &mut Report<'_>) -> anyhow::Result<()> {
        match self {
            Self::Basics => basics::run(report),
            Self::Reduction => reduction::run(report),
            Self::FunctionalInterfaces => functional_interfaces::run(report),
            Self::Employees => employees::run(report),
        }
    }
}

/// Output sink for demos, plus the pipeline settings they run with.
pub struct Report<'w> {
    out: &'w mut dyn Write,
    color: bool,
    config: PipelineConfig,
}

impl<'w> Report<'w> {
    pub fn new(out: &'w mut dyn Write, color: bool, config: PipelineConfig) -> Self {
        Self { out, color, config }
    }

    /// Uncoloured report with default pipeline settings.
    pub fn plain(out: &'w mut dyn Write) -> Self {
        Self::new(out, false, PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Start a pipeline configured for this report.
    pub fn pipeline<'a, I>(&self, source: I) -> Pipeline<'a, I::Item>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: 'a,
    {
        Pipeline::from_source(source).with_config(self.config.clone())
    }

    pub fn title(&mut self, text: &str) -> io::Result<()> {
        let banner = format!("== {} ==", text);
        if self.color {
            writeln!(self.out, "{}", banner.bold())
        } else {
            writeln!(self.out, "{}", banner)
        }
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.cyan())
        } else {
            writeln!(self.out, "{}", text)
        }
    }

    pub fn line(&mut self, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", value)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

/// Run `demo` into a string without colour. Used by tests.
pub fn render(demo: Demo) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    demo.run(&mut Report::plain(&mut buffer))?;
    Ok(String::from_utf8(buffer)?)
}
