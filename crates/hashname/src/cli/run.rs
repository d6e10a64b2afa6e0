//! The `run`, `rename`, and `dimensions` commands.

use clap::Args;
use hashname_core::{Config, Processor, ReportWriter};
use std::path::PathBuf;

/// Arguments shared by the stage commands.
#[derive(Args, Debug, Default)]
pub struct DirArgs {
    /// Directory to process (defaults to `general.target_dir`, i.e. `png`)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl DirArgs {
    /// Directory from the command line, else the configured one.
    pub fn resolve(&self, config: &Config) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| config.target_dir())
    }
}

/// Rename files to their hash, then report dimensions.
pub fn execute_run(config: &Config, args: DirArgs) -> anyhow::Result<()> {
    let dir = args.resolve(config);
    tracing::debug!("Target directory: {:?}", dir);

    let processor = Processor::new(config);
    let mut out = ReportWriter::new(std::io::stdout().lock());
    processor.run(&dir, &mut out)?;
    Ok(())
}

/// Run only the hash-rename stage.
pub fn execute_rename(config: &Config, args: DirArgs) -> anyhow::Result<()> {
    let dir = args.resolve(config);
    let processor = Processor::new(config);
    let mut out = ReportWriter::new(std::io::stdout().lock());
    processor.rename(&dir, &mut out)?;
    Ok(())
}

/// Run only the dimension-report stage.
pub fn execute_dimensions(config: &Config, args: DirArgs) -> anyhow::Result<()> {
    let dir = args.resolve(config);
    let processor = Processor::new(config);
    let mut out = ReportWriter::new(std::io::stdout().lock());
    processor.dimensions(&dir, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_png() {
        let args = DirArgs::default();
        assert_eq!(args.resolve(&Config::default()), PathBuf::from("png"));
    }

    #[test]
    fn test_resolve_prefers_argument() {
        let args = DirArgs {
            dir: Some(PathBuf::from("photos")),
        };
        assert_eq!(args.resolve(&Config::default()), PathBuf::from("photos"));
    }

    #[test]
    fn test_execute_rename_on_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"hello world").unwrap();

        let args = DirArgs {
            dir: Some(dir.path().to_path_buf()),
        };
        execute_rename(&Config::default(), args).unwrap();
        assert!(dir
            .path()
            .join("5EB63BBBE01EEED093CB22BB8F5ACDC3.png")
            .exists());
    }

    #[test]
    fn test_execute_run_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let args = DirArgs {
            dir: Some(dir.path().join("missing")),
        };
        let err = execute_run(&Config::default(), args).unwrap_err();
        assert!(err.to_string().contains("read dir failure"));
    }
}
