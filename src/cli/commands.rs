use crate::cli::args::{Cli, LONG_ABOUT};
use crate::locale::lookup_locale_in;
use crate::settings::Settings;
use crate::store::CountySource;
use crate::utils::constants::{EXIT_FAILED, EXIT_OK, EXIT_SYNTAX};
use crate::writers::{Destination, OutputOptions};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` logs debug events and
/// `--no-warning` (or `warnings = false` in settings) keeps only errors.
pub fn init_logging(cli: &Cli, settings: &Settings) {
    let level = if cli.verbose {
        "debug"
    } else if cli.no_warning || !settings.warnings {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded in a larger program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve the output options from settings, overridden by flags.
pub fn output_options(cli: &Cli, settings: &Settings) -> OutputOptions {
    OutputOptions::new(cli.format.unwrap_or(settings.format))
        .with_header(settings.header && !cli.no_header)
        .with_index(settings.index && !cli.no_index)
}

/// The `--counties` flag wins over the `counties` setting.
pub fn county_source(cli: &Cli, settings: &Settings) -> CountySource {
    match cli.counties.as_ref().or(settings.counties.as_ref()) {
        Some(path) => CountySource::File(path.clone()),
        None => CountySource::Embedded,
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    run_with(cli, Settings::load)
}

/// [`run`] with settings from `load`, which is not called for `help`.
pub fn run_with<F>(cli: &Cli, load: F) -> Result<()>
where
    F: FnOnce() -> crate::error::Result<Settings>,
{
    if cli.wants_help() {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", LONG_ABOUT)?;
        return Ok(());
    }

    let settings = load().context("loading settings")?;
    init_logging(cli, &settings);
    debug!(?settings, "settings loaded");

    let options = output_options(cli, &settings);
    options.validate()?;

    let source = county_source(cli, &settings);
    let result = lookup_locale_in(&cli.locale, &source)
        .with_context(|| format!("looking up {}", cli.locale.join(" ")))?;
    debug!(rows = result.len(), "locale resolved");

    let destination = Destination::from(cli.output.clone());
    let out = destination
        .open()
        .with_context(|| format!("opening output {:?}", destination))?;
    result.write(&options, out)?;

    Ok(())
}

/// Process exit status for a finished run.
pub fn exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_OK,
        Err(_) => EXIT_FAILED,
    }
}

/// Process exit status for a command line rejected by the parser.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
        _ => EXIT_SYNTAX,
    }
}

/// One line with the error chain, or the full debug report with `--debug`.
pub fn error_message(err: &anyhow::Error, debug: bool) -> String {
    if debug {
        format!("{:?}", err)
    } else {
        format!("ERROR [fips]: {:#}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FipsError;
    use crate::writers::OutputFormat;
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from(["fips", "--no-header", "CA"]).unwrap();
        let settings = Settings {
            format: OutputFormat::Csv,
            ..Settings::default()
        };

        let options = output_options(&cli, &settings);
        assert_eq!(options.format, OutputFormat::Csv);
        assert!(!options.header);
        assert!(options.index);

        let cli = Cli::try_parse_from(["fips", "-f", "json", "CA"]).unwrap();
        assert_eq!(output_options(&cli, &settings).format, OutputFormat::Json);
    }

    #[test]
    fn test_run_writes_csv_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("alameda.csv");
        let args: Vec<OsString> = vec![
            "fips".into(),
            "-f".into(),
            "csv".into(),
            "-o".into(),
            path.clone().into_os_string(),
            "CA".into(),
            "Alameda".into(),
        ];
        let cli = Cli::try_parse_from(args)?;

        run(&cli)?;

        let text = std::fs::read_to_string(&path)?;
        assert!(text.starts_with("ST,COUNTY,FIPS,LAT,LON,GEOHASH"));
        assert!(text.contains("CA,Alameda,06001,37.647139,-121.912488,9q9q1v"));
        Ok(())
    }

    #[test]
    fn test_run_rejects_header_switch_for_table() {
        let cli = Cli::try_parse_from(["fips", "-f", "table", "--no-header", "CA"]).unwrap();
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_help_ignores_broken_settings() {
        let broken = || -> crate::error::Result<Settings> {
            Err(FipsError::InvalidFormat("unreadable fips.toml".to_string()))
        };

        let cli = Cli::try_parse_from(["fips", "help"]).unwrap();
        let result = run_with(&cli, broken);
        assert_eq!(exit_code(&result), EXIT_OK);

        let cli = Cli::try_parse_from(["fips", "CA"]).unwrap();
        let result = run_with(&cli, broken);
        assert_eq!(exit_code(&result), EXIT_FAILED);
    }

    #[test]
    fn test_county_source_precedence() {
        let settings = Settings {
            counties: Some(PathBuf::from("settings.txt")),
            ..Settings::default()
        };

        let cli = Cli::try_parse_from(["fips", "CA"]).unwrap();
        assert_eq!(county_source(&cli, &Settings::default()), CountySource::Embedded);
        assert_eq!(
            county_source(&cli, &settings),
            CountySource::File(PathBuf::from("settings.txt"))
        );

        let cli = Cli::try_parse_from(["fips", "--counties", "flag.txt", "CA"]).unwrap();
        assert_eq!(
            county_source(&cli, &settings),
            CountySource::File(PathBuf::from("flag.txt"))
        );
    }

    #[test]
    fn test_run_with_county_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let counties = temp_dir.path().join("counties.csv");
        std::fs::write(&counties, "ST,FIPS,COUNTY,LAT,LON\nTX,48201,Harris,29.857273,-95.393037\n")?;
        let output = temp_dir.path().join("harris.csv");

        let args: Vec<OsString> = vec![
            "fips".into(),
            "-f".into(),
            "csv".into(),
            "--counties".into(),
            counties.into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
            "TX".into(),
            "Harris".into(),
        ];
        run(&Cli::try_parse_from(args)?)?;

        let text = std::fs::read_to_string(&output)?;
        assert!(text.contains("TX,Harris,48201,29.857273,-95.393037"));
        Ok(())
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(())), EXIT_OK);
        assert_eq!(exit_code(&Err(anyhow::anyhow!("boom"))), EXIT_FAILED);

        let err = Cli::try_parse_from(["fips", "CA", "Alameda", "Oakland"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), EXIT_SYNTAX);
        let err = Cli::try_parse_from(["fips", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), EXIT_OK);
        let err = Cli::try_parse_from(["fips", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&err), EXIT_OK);
    }

    #[test]
    fn test_error_message() {
        let cli = Cli::try_parse_from(["fips", "ZZ"]).unwrap();
        let err = run(&cli).unwrap_err();

        let line = error_message(&err, false);
        assert!(line.starts_with("ERROR [fips]: looking up ZZ: "));
        assert!(line.contains("not found"));
        assert!(!line.contains('\n'));

        let report = error_message(&err, true);
        assert!(report.starts_with("looking up ZZ"));
        assert!(report.contains("Caused by"));
    }

    #[test]
    fn test_run_unknown_state() {
        let cli = Cli::try_parse_from(["fips", "ZZ"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("ZZ"));
    }
}
