use super::Host;
use super::config::{Config, DEFAULT_CONFIG_FILE};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::app_err;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `census.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Replace the file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CONFIG_FILE));

    if output.exists() && !args.force {
        return Err(app_err!("'{output}' already exists, use --force to replace it"));
    }

    Config::save_default(&output)?;
    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use std::fs;

    #[test]
    fn test_init_writes_loadable_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("census.toml")).unwrap();
        let mut host = TestHost::default();

        init_config(&mut host, &InitArgs { output: Some(path.clone()), force: false }).unwrap();

        assert!(host.output_str().contains("census.toml"));
        assert_eq!(Config::load(Some(&path)).unwrap().actors.len(), 4);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("census.toml")).unwrap();
        fs::write(&path, "# mine\n").unwrap();
        let mut host = TestHost::default();

        assert!(init_config(&mut host, &InitArgs { output: Some(path.clone()), force: false }).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config(&mut host, &InitArgs { output: Some(path.clone()), force: true }).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }
}
