//! CLI administration tool for news-pipeline.
//!
//! Runs the scheduled jobs by hand and inspects the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Delete articles older than the retention window
//! cargo run --bin admin -- sweep --strategy procedure --days 7
//!
//! # Send push notifications for new articles
//! cargo run --bin admin -- notify
//!
//! # List registered device tokens
//! cargo run --bin admin -- tokens
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `FIREBASE_SERVICE_ACCOUNT` (required for `notify`)

use news_pipeline::application::services::{
    DEFAULT_RETENTION_DAYS, DispatchReport, NotificationService, RetentionService,
    RetentionStrategy,
};
use news_pipeline::config::{self, Config, mask_connection_string};
use news_pipeline::domain::repositories::TokenRepository;
use news_pipeline::infrastructure::messaging::FcmSender;
use news_pipeline::infrastructure::persistence::{PgArticleRepository, PgTokenRepository};
use news_pipeline::utils::text::mask_token;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for operating news-pipeline.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Delete articles older than the retention window
    Sweep {
        /// Delete strategy
        #[arg(short, long, default_value = "filter")]
        strategy: RetentionStrategy,

        /// Retention window in days
        #[arg(short, long, default_value_t = DEFAULT_RETENTION_DAYS)]
        days: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Send push notifications for unannounced articles
    Notify,

    /// List registered device tokens (masked)
    Tokens,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show table counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            strategy,
            days,
            yes,
        } => {
            let pool = connect().await?;
            handle_sweep(&pool, strategy, days, yes).await?
        }
        Commands::Notify => handle_notify().await?,
        Commands::Tokens => {
            let pool = connect().await?;
            handle_tokens(&pool).await?
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?
        }
    }

    Ok(())
}

/// Connects with only the database settings, so commands that do not push
/// work without a service-account key.
async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))
}

/// Runs one retention sweep after showing what it will delete.
///
/// # Flow
///
/// 1. Compute the cutoff from `--days`
/// 2. Count matching articles
/// 3. Confirm (unless `--yes`)
/// 4. Delete with the chosen strategy
async fn handle_sweep(
    pool: &PgPool,
    strategy: RetentionStrategy,
    days: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🧹 Retention Sweep".bright_blue().bold());
    println!();

    if days < 1 {
        anyhow::bail!("--days must be at least 1, got {days}");
    }

    let service = RetentionService::new(
        Arc::new(PgArticleRepository::new(Arc::new(pool.clone()))),
        Duration::days(days),
        strategy,
    );

    let now = Utc::now();
    let cutoff = service.cutoff_at(now);
    let pending = count_older_than(pool, cutoff).await?;

    println!("  Strategy: {}", strategy.to_string().cyan());
    println!(
        "  Cutoff:   {}",
        cutoff
            .to_rfc3339_opts(SecondsFormat::Secs, true)
            .bright_white()
    );
    println!(
        "  Matching: {}",
        pending.to_string().bright_yellow().bold()
    );
    println!();

    if pending == 0 {
        println!("{}", "✅ Nothing to delete".green());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {pending} articles?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let report = service
        .sweep_at(now, strategy)
        .await
        .map_err(|e| anyhow::anyhow!("Sweep failed: {}", e))?;

    println!();
    println!("{}", format!("✅ {}", report.message()).green().bold());

    if let Some(articles) = &report.deleted_articles {
        for article in articles {
            println!(
                "  {} {}",
                article
                    .published_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black(),
                article.title
            );
        }
    }
    println!();

    Ok(())
}

async fn count_older_than(pool: &PgPool, cutoff: DateTime<Utc>) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM news_articles WHERE published_at < $1")
        .bind(cutoff)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Runs one notification dispatch with the full service configuration.
async fn handle_notify() -> Result<()> {
    println!("{}", "📣 Send Notifications".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let pool = Arc::new(connect().await?);

    let sender = FcmSender::new(config.service_account()?, config.translate_timeout())
        .context("Failed to build push sender")?;

    let service = NotificationService::new(
        Arc::new(PgArticleRepository::new(pool.clone())),
        Arc::new(PgTokenRepository::new(pool)),
        Arc::new(sender),
        config.notify_batch_size,
        config.notify_body_chars,
    );

    let report = service
        .dispatch()
        .await
        .map_err(|e| anyhow::anyhow!("Dispatch failed: {}", e))?;

    match &report {
        DispatchReport::Sent(summary) if summary.failed > 0 => {
            println!("{}", format!("⚠️  {}", report.message()).yellow().bold());
        }
        DispatchReport::Sent(_) => {
            println!("{}", format!("✅ {}", report.message()).green().bold());
        }
        DispatchReport::NoArticles | DispatchReport::NoTokens { .. } => {
            println!("{}", format!("ℹ️  {}", report.message()).bright_white());
        }
    }
    println!();

    Ok(())
}

/// Lists device tokens.
///
/// # Output Format
///
/// ```text
/// 📱 Device Tokens
///
///   #   Platform   Token
///   ───────────────────────────────────────
///   1   android    dGhpcyBpcyBh...
///   2   ios        (empty)
/// ```
async fn handle_tokens(pool: &PgPool) -> Result<()> {
    println!("{}", "📱 Device Tokens".bright_blue().bold());
    println!();

    let repo = PgTokenRepository::new(Arc::new(pool.clone()));
    let targets = repo
        .list_targets()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if targets.is_empty() {
        println!("{}", "  No tokens found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<10} {}",
        "#".bright_white().bold(),
        "Platform".bright_white().bold(),
        "Token".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());

    let mut deliverable = 0;
    for (index, target) in targets.iter().enumerate() {
        let token = match target.deliverable_token() {
            Some(token) => {
                deliverable += 1;
                mask_token(token).cyan()
            }
            None => "(empty)".red(),
        };

        println!(
            "  {:<3} {:<10} {}",
            (index + 1).to_string().bright_black(),
            target.platform_label(),
            token
        );
    }

    println!();
    println!(
        "  Total: {} ({} deliverable)",
        targets.len().to_string().bright_white().bold(),
        deliverable.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            for table in ["news_articles", "users_tokens", "video_translations"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await
                    .with_context(|| format!("Failed to count {table}"))?;

                println!(
                    "  {:<20} {}",
                    table,
                    count.to_string().bright_green().bold()
                );
            }

            let pending: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM news_articles WHERE notified = FALSE")
                    .fetch_one(pool)
                    .await?;
            println!(
                "  {:<20} {}",
                "pending notify",
                pending.to_string().bright_yellow().bold()
            );
            println!();
        }
    }

    Ok(())
}
