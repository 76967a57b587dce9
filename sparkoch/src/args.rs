//! Command-line arguments and their conversion into `AppConfig`

use std::path::PathBuf;

use clap::builder::{BoolishValueParser, RangedU64ValueParser};
use clap::{Parser, Subcommand, ValueEnum};
use shared::{AppConfig, ParsePolicy};

/// Grocery savings: offers, recipes, stores, shopping list and onboarding
#[derive(Parser, Debug)]
#[command(name = "sparkoch")]
#[command(about = "Browse local offers, recipes and stores and run the onboarding flow")]
pub struct Args {
    /// Directory with offers.json, recipes.json, stores.json and shopping_list.json
    /// (built-in sample data when unset)
    #[arg(long, env = "SPARKOCH_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory backing the local key-value storage
    #[arg(long, env = "SPARKOCH_STORAGE_DIR", default_value = "./storage", global = true)]
    pub storage_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SPARKOCH_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Reject unknown sort keys instead of falling back to relevance
    /// (defaults to strict in debug builds)
    #[arg(
        long,
        env = "SPARKOCH_STRICT",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    pub strict: Option<bool>,

    /// Results per page
    #[arg(long, env = "SPARKOCH_PAGE_SIZE", default_value_t = 6, global = true)]
    pub page_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn to_config(&self) -> AppConfig {
        let parse_policy = match self.strict {
            Some(true) => ParsePolicy::Strict,
            Some(false) => ParsePolicy::Lenient,
            None => ParsePolicy::for_build(),
        };
        AppConfig {
            data_dir: self.data_dir.clone(),
            storage_dir: self.storage_dir.clone(),
            log_level: self.log_level.clone(),
            parse_policy,
            page_size: self.page_size,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Discounted offers at nearby stores
    Offers(ViewArgs),
    /// Recipes built from current offers
    Recipes(ViewArgs),
    /// Nearby stores
    Stores(ViewArgs),
    /// Result counts per value of one filter category
    Counts {
        #[arg(value_enum)]
        kind: ItemKind,
        /// Filter category to count, e.g. `dietary` or `price`
        #[arg(long)]
        category: String,
        /// Active filters as `category=value`; repeatable
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
    /// Offers grouped by store, nearest store first
    Groups {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
    /// Shopping list grouped by store with totals
    List,
    /// Recent searches
    History,
    /// Run a JSON script of onboarding actions
    Onboard {
        #[arg(long)]
        script: PathBuf,
    },
    /// Print the stored profile
    Profile,
}

/// Query parameters shared by the list views
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ViewArgs {
    /// Free-text search
    #[arg(long, default_value = "")]
    pub query: String,

    /// Filters as `category=value`; multi-select values are comma-separated
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Sort key, e.g. `price-low` or `rating`
    #[arg(long)]
    pub sort: Option<String>,

    /// 1-based result page
    #[arg(long, default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub page: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Offers,
    Recipes,
    Stores,
}
