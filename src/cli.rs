use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use geotogether::{Client, TimePeriod, api::DEFAULT_BASE_URL};
use reqwest::Url;
use tracing::instrument;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current power draw.
    #[clap(name = "live")]
    Live,

    /// Show the vendor-computed usage for the current period.
    #[clap(name = "periodic")]
    Periodic(PeriodicArgs),

    /// Show the usage summed over a calendar period.
    #[clap(name = "historic")]
    Historic(HistoricArgs),
}

#[derive(Parser)]
pub struct ConnectionArgs {
    #[clap(long, short = 'u', env = "GEO_TOGETHER_USERNAME")]
    pub username: String,

    #[clap(long, short = 'p', env = "GEO_TOGETHER_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// System name to query, the first system by default.
    #[clap(long, short = 's', env = "GEO_TOGETHER_SYSTEM")]
    pub system: Option<String>,

    /// Geo Together API base URL.
    #[clap(long = "api-url", env = "GEO_TOGETHER_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

impl ConnectionArgs {
    /// Build the client, log in and resolve the system.
    #[instrument(skip_all, fields(username = %self.username))]
    pub async fn connect(&self) -> Result<Client> {
        let mut client = Client::try_new(self.base_url.clone()).context("failed to build the client")?;
        if !client.authenticate(&self.username, &self.password).await {
            bail!("failed to authenticate as `{}`", self.username);
        }
        client.resolve_system(self.system.as_deref()).await.with_context(|| {
            self.system
                .as_ref()
                .map_or_else(|| "no systems found".to_owned(), |name| format!("no system named `{name}`"))
        })?;
        Ok(client)
    }
}

#[derive(Parser)]
pub struct PeriodicArgs {
    #[clap(long, short = 't', value_enum, ignore_case = true, default_value = "day")]
    pub period: TimePeriod,
}

#[derive(Parser)]
pub struct HistoricArgs {
    #[clap(long, short = 't', value_enum, ignore_case = true, default_value = "day")]
    pub period: TimePeriod,

    /// Number of periods to look back, `0` is the current one.
    #[clap(long, short = 'o', default_value = "0", allow_negative_numbers = true)]
    pub offset: i32,
}
