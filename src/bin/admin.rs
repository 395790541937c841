//! CLI administration tool for blog-api.
//!
//! Inspects the blog database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List published posts, newest first
//! cargo run --bin admin -- posts
//!
//! # Include drafts and pages, most recently edited first
//! cargo run --bin admin -- posts --all
//!
//! # Row counts per resource
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use blog_api::domain::repositories::{PostFilter, PostOrder, PostRepository};
use blog_api::infrastructure::persistence::PgPostRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting the blog database.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List posts
    Posts {
        /// Include drafts and pages, ordered by last edit
        #[arg(short, long)]
        all: bool,

        /// Maximum number of posts to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Posts { all, limit } => list_posts(&pool, all, limit).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints posts through the same repository the API uses.
async fn list_posts(pool: &PgPool, all: bool, limit: usize) -> Result<()> {
    let repo = PgPostRepository::new(Arc::new(pool.clone()));

    let filter = if all {
        PostFilter {
            include_pages: true,
            only_published: false,
            order: PostOrder::UpdatedDesc,
        }
    } else {
        PostFilter::published()
    };

    let posts = repo.list(filter).await?;

    println!("{}", "📝 Posts".bright_blue().bold());
    println!();

    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {:<10} {:<20} {}",
        "ID".bright_white().bold(),
        "STATE".bright_white().bold(),
        "PUBLISHED".bright_white().bold(),
        "SLUG".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for post in posts.iter().take(limit) {
        let state = match (post.is_page, post.is_published) {
            (true, _) => "page".magenta(),
            (false, true) => "published".green(),
            (false, false) => "draft".yellow(),
        };
        let published = post
            .published_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<6} {:<10} {:<20} {}",
            post.id,
            state,
            published.bright_black(),
            post.slug.cyan()
        );
    }

    println!();
    if posts.len() > limit {
        println!(
            "  {}",
            format!("… {} more", posts.len() - limit).bright_black()
        );
        println!();
    }

    Ok(())
}

/// Prints row counts for every resource the API serves.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let published: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM posts WHERE is_published AND NOT is_page",
    )
    .fetch_one(pool)
    .await?;

    let drafts: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM posts WHERE NOT is_published AND NOT is_page",
    )
    .fetch_one(pool)
    .await?;

    let pages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE is_page")
        .fetch_one(pool)
        .await?;

    let tags: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(pool)
        .await?;

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;

    for (label, count) in [
        ("Published posts:", published),
        ("Drafts:", drafts),
        ("Pages:", pages),
        ("Tags:", tags),
        ("Users:", users),
        ("Comments:", comments),
    ] {
        println!(
            "  {:<17}{}",
            label,
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let (name, size): (String, String) = sqlx::query_as(
                "SELECT current_database(), pg_size_pretty(pg_database_size(current_database()))",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Database:   {}", name.bright_white());
            println!("  Size:       {}", size.bright_white());
            println!();
        }
    }

    Ok(())
}
