//! CLI command definitions, routing, and tracing setup.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use learnscout_discovery::{DiscoverOptions, Endpoints, build_client, discover_resources};
use learnscout_shared::{Resource, config_file_path, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// LearnScout — find free learning resources for any topic.
#[derive(Parser)]
#[command(
    name = "learnscout",
    version,
    about = "Search code-hosting, Q&A, documentation, and course sites for learning resources.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Search all sources for learning resources on a topic.
    Search {
        /// Topic to search for (multiple words are joined).
        #[arg(required = true)]
        topic: Vec<String>,

        /// Print results as a JSON array instead of a table.
        #[arg(long)]
        json: bool,

        /// Maximum number of results (overrides config).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "learnscout=info",
        1 => "learnscout=debug",
        _ => "learnscout=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search { topic, json, limit } => cmd_search(&topic.join(" "), json, limit).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_search(topic: &str, json: bool, limit: Option<usize>) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(eyre!("topic must not be empty"));
    }

    let config = load_config()?;

    let mut opts = DiscoverOptions::from(&config.discovery);
    if let Some(limit) = limit {
        opts.max_results = limit;
    }

    let client = build_client(config.discovery.fetch_timeout_secs)?;

    info!(topic, max_results = opts.max_results, "searching for resources");

    let spinner = search_spinner(topic);
    let resources = discover_resources(&client, topic, &Endpoints::default(), &opts).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&resources)?);
    } else {
        print_table(topic, &resources);
    }

    Ok(())
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config file created at {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let path = config_file_path()?;
    let config = load_config()?;

    println!("# {}", path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

/// Spinner shown while the adapters fan out.
fn search_spinner(topic: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message(format!("Searching resources for '{topic}'..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Print results as a readable table.
fn print_table(topic: &str, resources: &[Resource]) {
    println!();
    println!("  Resources for '{topic}':");
    println!();

    for (i, resource) in resources.iter().enumerate() {
        println!(
            "  {:>2}. [{}] {}",
            i + 1,
            resource.resource_type,
            resource.title
        );
        println!("      {}", resource.url);
        if let Some(description) = &resource.description {
            println!("      {description}");
        }
        println!();
    }

    println!("  {} result(s)", resources.len());
}
