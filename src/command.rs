mod build;
mod check;

pub use build::*;
pub use check::*;

use clap::Args;
use std::path::PathBuf;

/// Where the spec is read from and the index is written to.
#[derive(Debug, Clone, Args)]
pub struct Location {
    /// Repository root that relative `--input`/`--output` paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// OpenAPI document (JSON, or YAML by extension)
    #[arg(short, long, default_value = "docs/openapi/latest.json")]
    pub input: PathBuf,

    /// Index file to write
    #[arg(short, long, default_value = "docs/openapi/paths.txt")]
    pub output: PathBuf,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: PathBuf::from("docs/openapi/latest.json"),
            output: PathBuf::from("docs/openapi/paths.txt"),
        }
    }
}

impl Location {
    /// Location with the default layout under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_layout() {
        let loc = Location::with_root("/repo");
        assert_eq!(loc.input_path(), PathBuf::from("/repo/docs/openapi/latest.json"));
        assert_eq!(loc.output_path(), PathBuf::from("/repo/docs/openapi/paths.txt"));
    }

    #[test]
    fn test_absolute_paths_ignore_root() {
        let loc = Location {
            root: PathBuf::from("/repo"),
            input: PathBuf::from("/tmp/spec.json"),
            output: PathBuf::from("out/paths.txt"),
        };
        assert_eq!(loc.input_path(), PathBuf::from("/tmp/spec.json"));
        assert_eq!(loc.output_path(), PathBuf::from("/repo/out/paths.txt"));
    }
}
