//! Giftbox CLI - query and edit gifts of sweets
//!
//! Usage: giftbox --gift <FILE> <COMMAND>
//!
//! Commands:
//!   list    List all items in gift order
//!   get     Show one item by id
//!   sugar   List sweets within a sugar weight range
//!   order   List items ordered by a sweet attribute
//!   add     Add an item (merging by sweet)
//!   update  Replace or append an item
//!   delete  Remove an item by id
//!   stats   Show counts, weight and price

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use giftbox::presentation::{Cli, Commands};
use giftbox::{Config, Verbosity};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        warn!("{}", warning);
    }

    let ctx = CommandContext::new(config, cli.json);
    let mut gift = commands::load_gift(&cli.gift)?;

    match cli.command {
        Commands::List => commands::cmd_list(&ctx, &gift),
        Commands::Get { id } => commands::cmd_get(&ctx, &gift, id),
        Commands::Sugar { min, max } => commands::cmd_sugar(&ctx, &gift, min, max),
        Commands::Order { rule } => commands::cmd_order(&ctx, &gift, rule),
        Commands::Add { item } => commands::cmd_add(&ctx, &mut gift, &item),
        Commands::Update { item } => commands::cmd_update(&ctx, &mut gift, &item),
        Commands::Delete { id } => commands::cmd_delete(&ctx, &mut gift, id),
        Commands::Stats => commands::cmd_stats(&ctx, &gift),
    }
}

/// Log to stderr; `RUST_LOG` wins over the configured verbosity
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
