use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/client.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Account id returned by `register`/`login`.
    pub user_id: Option<i32>,
    /// Symbol printed in front of amounts.
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            user_id: None,
            currency: "₹".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pocket_ledger_client", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:5000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the account id.
    #[arg(long)]
    user_id: Option<i32>,
    /// Log HTTP traffic.
    #[arg(long, short)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, ClapArgs)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    /// Read from the environment or prompted when omitted.
    #[arg(long, env = "LEDGER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account.
    Register(LoginArgs),
    /// Check credentials and print the account id.
    Login(LoginArgs),
    /// Add an expense.
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: String,
        /// YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List expenses.
    List,
    /// Change some fields of an expense.
    Update {
        expense_id: i32,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
    },
    /// Delete an expense.
    Delete { expense_id: i32 },
    /// Per-category totals, total spent and biggest category.
    Summary,
    /// Write the per-category totals as CSV.
    Export {
        #[arg(long, default_value = "expenses_summary.csv")]
        output: String,
    },
}

#[derive(Debug)]
pub struct Invocation {
    pub config: AppConfig,
    pub verbose: bool,
    pub command: Command,
}

pub fn load() -> Result<Invocation> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("LEDGER_CLIENT"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(user_id) = args.user_id {
        settings.user_id = Some(user_id);
    }

    Ok(Invocation {
        config: settings,
        verbose: args.verbose,
        command: args.command,
    })
}
