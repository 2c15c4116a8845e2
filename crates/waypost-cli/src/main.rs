mod drive;
mod lookup;
mod places;
mod table;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use waypost_core::DisambiguationPolicy;
use waypost_gplaces::{PlacesClient, Resolver};

#[derive(Debug, Parser)]
#[command(name = "waypost")]
#[command(about = "Resolve place names and plan drive times from the terminal")]
struct Cli {
    /// How to handle queries with several plausible matches.
    #[arg(long, value_enum, default_value = "always", global = true)]
    policy: PolicyArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a reviewed catalog of places interactively
    Places,
    /// Compute driving times between validated points
    Drive(drive::DriveArgs),
    /// Resolve a single query and print the outcome
    Lookup(lookup::LookupArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Accept the provider's first match without asking
    Auto,
    /// Ask whenever more than one match exists
    Always,
    /// Accept the first match; review choices on demand later
    OnRequest,
}

impl From<PolicyArg> for DisambiguationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Auto => DisambiguationPolicy::AutoAcceptFirst,
            PolicyArg::Always => DisambiguationPolicy::AlwaysDisambiguate,
            PolicyArg::OnRequest => DisambiguationPolicy::DisambiguateOnRequest,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = waypost_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let client = PlacesClient::new(
        &config.api_key,
        config.request_timeout_secs,
        &config.language,
        config.places_api,
    )?;
    let resolver = Resolver::new(client, cli.policy.into());

    match cli.command {
        Commands::Places => places::run(&resolver).await,
        Commands::Drive(args) => drive::run(&resolver, &args).await,
        Commands::Lookup(args) => lookup::run(&resolver, &args).await,
    }
}
