//! ghctx - main entry point

use clap::{CommandFactory, Parser};
use log::{debug, info};
use std::io::IsTerminal;

use ghctx::{run_command, Cli, Command, ContextStore, GhCli, Session};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout may be evaluated by the shell
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting ghctx v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Init(args) => {
            print!("{}", args.shell.init_script());
            return Ok(());
        }
        Command::Completion(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "ghctx",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        _ => {}
    }

    let store = match &cli.store_dir {
        Some(dir) => ContextStore::with_dir(dir.clone()),
        None => ContextStore::new(),
    };
    debug!("Using context store {}", store.dir().display());

    let tool = GhCli::new();
    let mut session = Session::from_env();
    let cwd = std::env::current_dir()?;

    let result = run_command(cli, &store, &tool, &mut session, &cwd);

    if cli.command.mutates_session() && session.is_modified() {
        // Never echo a token to a terminal
        if std::io::stdout().is_terminal() {
            eprintln!(
                "Warning: shell integration is not loaded, so this shell's environment was not changed.\n\
                 Add 'eval \"$(ghctx init {})\"' to your shell profile.",
                cli.shell
            );
        } else {
            print!("{}", cli.shell.render(&session));
        }
    }

    result
}
