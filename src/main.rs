use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::error;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};
use sticker_manifest::{GeneratorConfig, ManifestBuilder, resolve_base_dir};

mod cli;

const EXIT_DIRECTORY_NOT_FOUND: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        cli.log_level.into(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let base_dir = resolve_base_dir(cli.base_dir.clone())?;
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::discover(&base_dir),
    };
    let config = cli.apply(config);

    let builder = ManifestBuilder::new(config.to_layout(&base_dir)?, config.allow_list());
    builder.announce();

    match builder.build() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_directory_not_found() => {
            error!("{err}");
            Ok(ExitCode::from(EXIT_DIRECTORY_NOT_FOUND))
        }
        Err(err) => Err(err).context("sticker manifest generation failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn cli_for(base_dir: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["sticker-manifest", "--base-dir", base_dir.to_str().unwrap()];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    fn same_code(actual: ExitCode, expected: ExitCode) -> bool {
        format!("{actual:?}") == format!("{expected:?}")
    }

    #[test]
    fn success_writes_manifest_and_exits_zero() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sticker")).unwrap();
        fs::write(dir.path().join("sticker/a.png"), "x").unwrap();

        let code = run(cli_for(dir.path(), &[])).unwrap();

        assert!(same_code(code, ExitCode::SUCCESS));
        assert_eq!(
            fs::read_to_string(dir.path().join("images.json")).unwrap(),
            "[\n    \"a.png\"\n]"
        );
    }

    #[test]
    fn missing_source_directory_exits_two_without_writing() {
        let dir = tempdir().unwrap();

        let code = run(cli_for(dir.path(), &[])).unwrap();

        assert!(same_code(code, ExitCode::from(EXIT_DIRECTORY_NOT_FOUND)));
        assert!(!dir.path().join("images.json").exists());
    }

    #[test]
    fn invalid_source_name_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(run(cli_for(dir.path(), &["--source-dir", "../x"])).is_err());
    }

    #[test]
    fn explicit_config_that_fails_to_load_is_fatal() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sticker")).unwrap();
        let absent = dir.path().join("absent.json");

        let result = run(cli_for(dir.path(), &["--config", absent.to_str().unwrap()]));

        assert!(result.is_err());
        assert!(!dir.path().join("images.json").exists());
    }

    #[test]
    fn flags_win_over_discovered_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("art")).unwrap();
        fs::write(dir.path().join("art/a.gif"), "x").unwrap();
        fs::write(dir.path().join("art/b.png"), "x").unwrap();
        fs::write(
            dir.path().join("stickers.config.json"),
            r#"{"sourceDir": "art", "extensions": ["gif"], "outputFile": "from-config.json"}"#,
        )
        .unwrap();

        let code = run(cli_for(dir.path(), &["--output-file", "from-flag.json"])).unwrap();

        assert!(same_code(code, ExitCode::SUCCESS));
        assert!(!dir.path().join("from-config.json").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("from-flag.json")).unwrap(),
            "[\n    \"a.gif\"\n]"
        );
    }
}
