use crate::demos::Demo;
use crate::pipeline::Pipeline;
use anyhow::Result;
use std::io::Write;

pub fn list_demos(out: &mut dyn Write) -> Result<()> {
    Pipeline::from_source(Demo::ALL)
        .try_for_each(|demo| writeln!(out, "{:<24}{}", demo.name(), demo.description()))?;
    Ok(())
}
