use clap::Parser;
use fips::cli::{error_message, exit_code, parse_exit_code, run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_exit_code(&err));
        }
    };

    let result = run(&cli);
    if let Err(err) = &result {
        eprintln!("{}", error_message(err, cli.debug));
    }
    ExitCode::from(exit_code(&result))
}
