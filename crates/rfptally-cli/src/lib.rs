mod args;
mod handlers;
mod view;
mod writer;

pub use args::Cli;

use anyhow::Result;

/// CLI entry point: a single summarize flow.
pub fn run(cli: Cli) -> Result<()> {
    handlers::summarize::handle(cli)
}
