use crate::command::Location;
use crate::document::read_document;
use crate::index::{collect_entries, render};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Default, Args)]
pub struct Build {
    #[command(flatten)]
    pub location: Location,
}

impl Build {
    /// Regenerate the index file. Returns where it was written and how many entries it has.
    pub fn write(&self) -> Result<(PathBuf, usize)> {
        let input = self.location.input_path();
        let output = self.location.output_path();
        let spec = read_document(&input)?;
        let entries = collect_entries(&spec);
        debug!(n = entries.len(), "Collected index entries");
        fs::write(&output, render(&entries))
            .with_context(|| format!("{}: Failed to write file.", output.display()))?;
        Ok((output, entries.len()))
    }

    pub fn run(self) -> Result<()> {
        let (output, n) = self.write()?;
        println!("Wrote {} ({} entries)", output.display(), n);
        Ok(())
    }
}
