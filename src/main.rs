use clap::Parser;
use std::process::ExitCode;

use kanban::Result;
use kanban::cli::{Cli, Commands, ConfigAction, SourceArgs};
use kanban::commands::{
    cmd_board, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_show,
    should_color,
};
use kanban::config::Config;
use kanban::logging::{LogTarget, init_board_logging, init_logging};
use kanban::source::Source;

fn resolve_source(source: SourceArgs) -> Result<Source> {
    let config = Config::load()?;
    Source::resolve(&config, source.endpoint.as_deref(), source.file)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = match &cli.command {
        Commands::Board { log_file, .. } => init_board_logging(log_file.clone()).map(|_| ()),
        _ => init_logging(LogTarget::Stderr),
    };
    // Reported before the board takes over the terminal
    if let Err(e) = logging {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = match cli.command {
        Commands::Board { source, .. } => match resolve_source(source) {
            Ok(source) => cmd_board(source).await,
            Err(e) => Err(e),
        },
        Commands::Show {
            source,
            group_by,
            display,
            json,
            no_color,
        } => match resolve_source(source) {
            Ok(source) => cmd_show(&source, group_by, display, json, should_color(no_color)).await,
            Err(e) => Err(e),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Path => cmd_config_path(),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
