//! LearnScout CLI — learning-resource discovery for any topic.
//!
//! Fans out to code-hosting, Q&A, article, community, documentation, and
//! course-catalog sources, then ranks the merged results.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
