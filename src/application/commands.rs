//! CLI commands and handlers
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::services::{build_price_resolver, GiftService};
use crate::domain::gift::{AggregateResult, CollectionId, GiftAggregator, RawGiftRecord};
use crate::infrastructure::telegram::SnapshotGiftSource;
use crate::shared::errors::AppError;
use crate::shared::types::FetcherConfig;
use crate::shared::utils::{format_floor_price, format_ton};

#[derive(Parser)]
#[command(name = "gift-valuator")]
#[command(version, about = "Telegram gift fetcher with Fragment floor-price valuation")]
pub struct Cli {
    /// Path to config file (defaults to ./Config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the floor price of one gift collection
    Price {
        /// Collection title or slug, e.g. "Neko Helmet"
        collection: String,
    },

    /// Value a raw gift page dumped to JSON
    Aggregate {
        /// JSON array of raw gift records
        #[arg(long)]
        page: PathBuf,
    },

    /// Fetch and value a user's gifts from a snapshot of Telegram responses
    User {
        /// Telegram username, with or without '@'
        username: String,

        /// Snapshot file with users and their gift pages
        #[arg(long)]
        snapshot: PathBuf,

        /// Page offset
        #[arg(long, default_value = "")]
        offset: String,

        /// Page size (overrides config)
        #[arg(long)]
        limit: Option<u32>,
    },
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: FetcherConfig) -> Result<(), AppError> {
        match command {
            Commands::Price { collection } => {
                Self::execute_price_command(&collection, config).await
            }
            Commands::Aggregate { page } => Self::execute_aggregate_command(page, config).await,
            Commands::User {
                username,
                snapshot,
                offset,
                limit,
            } => Self::execute_user_command(&username, snapshot, &offset, limit, config).await,
        }
    }

    /// Execute price command
    async fn execute_price_command(collection: &str, config: FetcherConfig) -> Result<(), AppError> {
        let collection = CollectionId::from_title(collection);
        info!("🔍 Resolving floor price for '{}'...", collection);

        let resolver = build_price_resolver(&config)?;
        let price = resolver.resolve(&collection).await;

        println!("{}: {}", collection, format_floor_price(price));
        Ok(())
    }

    /// Execute aggregate command
    async fn execute_aggregate_command(page: PathBuf, config: FetcherConfig) -> Result<(), AppError> {
        let content = fs::read_to_string(&page).map_err(|e| {
            AppError::SnapshotError(format!("Failed to read {}: {}", page.display(), e))
        })?;
        let raw_gifts: Vec<RawGiftRecord> = serde_json::from_str(&content)
            .map_err(|e| AppError::SnapshotError(format!("Failed to parse gift page: {}", e)))?;
        info!("📦 Loaded {} raw gift records", raw_gifts.len());

        let aggregator = GiftAggregator::new(Arc::new(build_price_resolver(&config)?));
        let result = aggregator.aggregate(&raw_gifts).await;

        Self::print_result(&result)
    }

    /// Execute user command
    async fn execute_user_command(
        username: &str,
        snapshot: PathBuf,
        offset: &str,
        limit: Option<u32>,
        config: FetcherConfig,
    ) -> Result<(), AppError> {
        let source = Arc::new(SnapshotGiftSource::from_file(&snapshot)?);
        let service = GiftService::with_fragment(&config, source.clone(), source)?;
        let limit = limit.unwrap_or(config.gifts.page_limit);

        let result = service.get_user_gifts(username, offset, limit).await?;
        Self::print_result(&result)
    }

    fn print_result(result: &AggregateResult) -> Result<(), AppError> {
        info!(
            "✅ {} gifts, total {} + {} stars",
            result.count,
            format_ton(result.total_cost.ton),
            result.total_cost.stars
        );
        let json = serde_json::to_string_pretty(result)
            .map_err(|e| AppError::Unknown(format!("Failed to serialize result: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
