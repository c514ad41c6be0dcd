use std::io::{self, Read};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::CodecService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let service = CodecService::standard(cli.strict || settings.strict);
    debug!("settings: {:?}, strict: {}", settings, service.is_strict());

    match &cli.command {
        Some(Commands::Encode { text }) => _encode(&service, text),
        Some(Commands::Decode { morse }) => _decode(&service, morse),
        Some(Commands::Lookup { code }) => _lookup(&service, code),
        Some(Commands::Code { character }) => _code(&service, *character),
        Some(Commands::Tree { codes }) => _tree(&service, &settings, *codes),
        Some(Commands::Table) => _table(&service),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

/// Join argument words with single spaces, or read `reader` when there are
/// none (or just `-`). One trailing newline is stripped from read input.
pub fn read_input(parts: &[String], mut reader: impl Read) -> CliResult<String> {
    if !parts.is_empty() && !(parts.len() == 1 && parts[0] == "-") {
        return Ok(parts.join(" "));
    }
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| CliError::io("read stdin", e))?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

#[instrument(skip(service))]
fn _encode(service: &CodecService, text: &[String]) -> CliResult<()> {
    let input = read_input(text, io::stdin())?;
    output::info(&service.encode(&input)?);
    Ok(())
}

#[instrument(skip(service))]
fn _decode(service: &CodecService, morse: &[String]) -> CliResult<()> {
    let input = read_input(morse, io::stdin())?;
    output::info(&service.decode(&input)?);
    Ok(())
}

#[instrument(skip(service))]
fn _lookup(service: &CodecService, code: &str) -> CliResult<()> {
    output::info(&service.lookup(code)?);
    Ok(())
}

#[instrument(skip(service))]
fn _code(service: &CodecService, character: char) -> CliResult<()> {
    output::info(&service.code_for(character)?);
    Ok(())
}

#[instrument(skip(service, settings))]
fn _tree(service: &CodecService, settings: &Settings, codes: bool) -> CliResult<()> {
    let mut options = settings.render_options();
    options.show_codes |= codes;
    print!("{}", service.render(&options));
    Ok(())
}

#[instrument(skip(service))]
fn _table(service: &CodecService) -> CliResult<()> {
    output::header("CHAR  CODE");
    for (code, character) in service.table() {
        output::row(&format!("{character:<4}"), &code);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available"),
        },
    }
    Ok(())
}
