use crate::command::Location;
use crate::document::read_document;
use crate::index::{collect_entries, render};
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::ErrorKind;

/// Verify the index file matches the spec without writing it. Useful in CI.
#[derive(Debug, Default, Args)]
pub struct Check {
    #[command(flatten)]
    pub location: Location,
}

impl Check {
    /// Returns the number of entries when the index is current.
    pub fn verify(&self) -> Result<usize> {
        let input = self.location.input_path();
        let output = self.location.output_path();
        let spec = read_document(&input)?;
        let entries = collect_entries(&spec);
        let expected = render(&entries);
        let actual = match fs::read_to_string(&output) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                bail!("{}: Index file does not exist.", output.display())
            }
            Err(e) => {
                return Err(e).with_context(|| format!("{}: Failed to read file.", output.display()))
            }
        };
        if actual != expected {
            bail!(
                "{}: Index is out of date with {}. Run `oa-index build`.",
                output.display(),
                input.display()
            );
        }
        Ok(entries.len())
    }

    pub fn run(self) -> Result<()> {
        let n = self.verify()?;
        println!("{} is up to date ({} entries)", self.location.output_path().display(), n);
        Ok(())
    }
}
