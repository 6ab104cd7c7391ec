use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swapi_explorer::application::dto::OutputFormat;
use swapi_explorer::config::SettingsOverrides;
use swapi_explorer::shared::error::CatalogError;
use swapi_explorer::shared::Result;

/// Shown whenever a page of characters could not be loaded
pub const LIST_FAILED_MESSAGE: &str = "Failed to load characters. Please try again later.";

/// Shown whenever a character could not be resolved
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load character details. Please try again.";

/// Browse Star Wars characters from the terminal
#[derive(Parser, Debug)]
#[command(name = "swapi-explorer")]
#[command(version)]
#[command(about = "Browse Star Wars characters from the terminal", long_about = None)]
pub struct Args {
    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./swapi-explorer.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root URL of the catalog API
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Where the login flag is stored
    #[arg(long, global = true, value_name = "FILE")]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in; any user name is accepted
    Login {
        /// Name to greet, purely cosmetic
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Log out and forget the session
    Logout,
    /// Show whether you are logged in
    Status,
    /// List one page of characters
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Only characters whose name contains this term
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the full details of one character
    Show {
        /// Character URL, or a numeric id such as 1
        #[arg(value_name = "LOCATOR|ID")]
        target: String,
    },
    /// Interactive grid with search, paging and a detail panel
    Browse,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The flags that take precedence over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.base_url.clone(),
            format: self.format,
            session_file: self.session_file.clone(),
        }
    }
}

/// Turns the `show` argument into a character locator
///
/// A bare number is a character id on the configured catalog; anything else
/// must already be an http(s) URL.
pub fn resolve_character_locator(target: &str, base_url: &str) -> Result<String> {
    let target = target.trim();
    if let Ok(id) = target.parse::<u64>() {
        return Ok(format!("{}/people/{}/", base_url.trim_end_matches('/'), id));
    }
    if target.starts_with("http://") || target.starts_with("https://") {
        return Ok(target.to_string());
    }
    Err(CatalogError::Validation {
        message: format!(
            "'{}' is neither a character id nor a URL\n\n💡 Hint: Use e.g. `swapi-explorer show 1`",
            target
        ),
    }
    .into())
}
