use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use color_print::cformat;
use repolink::browser::open_url;
use repolink::config::{UserConfig, set_config_path};
use repolink::git::{ResolveError, exit_code};
use repolink::path::resolve_start_path;
use repolink::resolve::Resolver;
use repolink::styling::{eprintln, error_message, level_for_verbosity, println, success_message};

mod cli;

use cli::{COMMAND_ID, Cli};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(path) = cli.config.clone() {
        set_config_path(path);
    }

    if let Err(err) = run(cli) {
        // ResolveError formats itself with symbol and hint
        if err.downcast_ref::<ResolveError>().is_some() {
            eprintln!("{err}");
        } else {
            eprintln!("{}", error_message(format!("{err:#}")));
        }
        process::exit(exit_code(&err).unwrap_or(1));
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .format_target(false);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = UserConfig::load()?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let start = resolve_start_path(cli.path.as_deref().unwrap_or(Path::new(".")), &cwd);
    log::debug!("{COMMAND_ID}: resolving {}", start.display());

    let mut resolver = Resolver::from_config(&config);
    if let Some(remote) = cli.remote {
        resolver = resolver.remote(remote);
    }

    let url = resolver.resolve(&start)?;
    println!("{url}");

    if cli.open || config.open {
        open_url(&url, config.browser())?;
        eprintln!("{}", success_message(cformat!("Opened <bold>{url}</>")));
    }

    Ok(())
}
