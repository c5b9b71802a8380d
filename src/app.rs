use std::io::{stdin, stdout, BufRead, BufWriter, Write};

use clap::Parser;

use crate::{
    common::{
        command::Command,
        config::{Cli, Config},
        error::AppError,
        logging,
    },
    io::reader,
    worker::session::Session,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::from(Cli::try_parse_from(args)?);
    logging::init_logging(&config.log_filter, config.log_format)?;

    let stdin = stdin();
    let stdout = stdout();
    // Prompts flush the writer, so buffering never hides a prompt.
    run_session(stdin.lock(), BufWriter::new(stdout.lock()), &config)
}

/// Drives the menu until the operator quits or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &Config,
) -> Result<(), AppError> {
    let mut session = Session::from_config(config);
    tracing::info!(
        first_account_number = config.first_account_number,
        timing = config.timing,
        "session started"
    );

    while let Some(command) = reader::read_command(&mut input, &mut output)? {
        if command == Command::Quit {
            break;
        }
        session.process(command, &mut output)?;
    }

    output.flush()?;
    tracing::info!("session ended");
    Ok(())
}
