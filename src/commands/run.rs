use crate::config::SeqflowConfig;
use crate::demos::{Demo, Report};
use anyhow::{Context, Result};
use std::io::Write;

/// Run `selection`, or every demo in declaration order, writing to `out`.
pub fn run_demos(
    selection: Option<Demo>,
    config: &SeqflowConfig,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let demos = match selection {
        Some(demo) => vec![demo],
        None => Demo::ALL.to_vec(),
    };
    let mut report = Report::new(out, color, config.pipeline.clone());

    for (index, demo) in demos.into_iter().enumerate() {
        if index > 0 {
            report.blank()?;
        }
        tracing::info!(demo = demo.name(), "running demo");
        report.title(demo.title())?;
        demo.run(&mut report)
            .with_context(|| format!("demo '{}' failed", demo.name()))?;
    }
    Ok(())
}
