use anyhow::{Context, Result};
use chrono::{Days, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fintrack::config::Config;
use fintrack::AppState;
use fintrack_core::cache::CacheReport;
use fintrack_core::finance::{
    format_currency, format_signed, Category, TransactionDraft, TransactionType,
    DEFAULT_CATEGORIES,
};
use fintrack_core::notify::Notification;
use fintrack_core::session::User;

/// fintrack - Track personal income and expenses
#[derive(Parser, Debug)]
#[command(name = "fintrack")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed an in-memory store for one user and print their dashboard
    Demo {
        /// Owner id to sign in as
        #[arg(long, default_value = "demo-user", env = "FINTRACK_OWNER")]
        owner: String,

        /// Display name for the signed-in user
        #[arg(long, env = "FINTRACK_NAME")]
        name: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// List the default categories given to new users
    Defaults,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Pretty,
    Json,
}

/// Everything the demo prints.
#[derive(Serialize)]
struct DemoReport {
    owner: String,
    user: String,
    dashboard: fintrack::Dashboard,
    cache: CacheReport,
    notifications: Vec<Notification>,
}

/// Sample month: (category name, type, amount, description, days ago).
const SAMPLE_TRANSACTIONS: [(&str, TransactionType, i64, &str, u64); 7] = [
    ("Salary", TransactionType::Income, 5_500_000, "Monthly salary", 20),
    ("Freelancing", TransactionType::Income, 1_200_000, "Landing page", 12),
    ("Bills & Utilities", TransactionType::Expense, 750_000, "Electricity", 15),
    ("Food & Dining", TransactionType::Expense, 150_000, "Groceries", 9),
    ("Shopping", TransactionType::Expense, 325_000, "Running shoes", 6),
    ("Transportation", TransactionType::Expense, 50_000, "Fuel", 3),
    ("Food & Dining", TransactionType::Expense, 25_000, "Lunch", 1),
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Demo {
            owner,
            name,
            format,
        } => run_demo(owner, name, format).await,
        Command::Defaults => {
            for category in &DEFAULT_CATEGORIES {
                println!(
                    "{:<8} {:<18} {}",
                    category.kind.as_str(),
                    category.name,
                    category.color
                );
            }
            Ok(())
        }
    }
}

async fn run_demo(owner: String, name: Option<String>, format: Format) -> Result<()> {
    let config = Config::from_env();
    tracing::info!(?config, "Starting demo");

    let state = AppState::in_memory(config);
    let mut toasts = state.toasts.subscribe();

    let mut user = User::new(owner.clone(), format!("{owner}@example.com"));
    if let Some(name) = name {
        user = user.with_name(name);
    }
    let display_name = user.display_name().to_string();
    state.sign_in(user);
    state.seeder.onboard(&owner, &state.toasts).await;

    let categories = state.categories.refresh().await?;
    seed_transactions(&state, &categories).await?;

    // Served from the written-through cache
    state.transactions.list(false).await?;

    let mut notifications = Vec::new();
    while let Ok(notification) = toasts.try_recv() {
        notifications.push(notification);
    }

    let report = DemoReport {
        owner,
        user: display_name,
        dashboard: state.dashboard(),
        cache: state.cache_report().await,
        notifications,
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Pretty => print_pretty(&report),
    }

    Ok(())
}

async fn seed_transactions(state: &AppState, categories: &[Category]) -> Result<()> {
    let today = Utc::now().date_naive();

    for (name, kind, amount, description, days_ago) in SAMPLE_TRANSACTIONS {
        let category = categories
            .iter()
            .find(|c| c.name == name)
            .with_context(|| format!("default category {name:?} is missing"))?;
        let date = today
            .checked_sub_days(Days::new(days_ago))
            .unwrap_or(today);

        let draft = match kind {
            TransactionType::Income => TransactionDraft::income(amount, category.id, date),
            TransactionType::Expense => TransactionDraft::expense(amount, category.id, date),
        };
        state
            .transactions
            .create(draft.with_description(description))
            .await?;
    }

    Ok(())
}

fn print_pretty(report: &DemoReport) {
    let summary = &report.dashboard.summary;

    println!("Dashboard for {} ({})", report.user, report.owner);
    println!("  Income    {:>16}", format_currency(summary.total_income));
    println!("  Expenses  {:>16}", format_currency(summary.total_expenses));
    println!("  Balance   {:>16}", format_currency(summary.balance));
    println!("  Savings   {:>15.1}%", summary.savings_rate);
    println!("  Count     {:>16}", summary.transaction_count);

    println!();
    println!("Expenses by category");
    for total in &report.dashboard.expenses_by_category {
        println!("  {:<20} {:>16}", total.name, format_currency(total.amount));
    }

    println!();
    println!("Recent transactions");
    for transaction in &report.dashboard.recent {
        println!(
            "  {} {:<16} {:>17}",
            transaction.date,
            transaction.description,
            format_signed(transaction.kind, transaction.amount)
        );
    }

    println!();
    println!("Cache");
    for (kind, status) in &report.cache.kinds {
        let fetched = status
            .last_fetch_time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<14} data={:<5} fresh={:<5} fetched={}",
            kind.as_str(),
            status.has_data,
            status.is_fresh,
            fetched
        );
    }

    println!();
    println!("Notifications");
    for notification in &report.notifications {
        match &notification.detail {
            Some(detail) => println!(
                "  [{}] {} ({})",
                notification.kind.as_str(),
                notification.message,
                detail
            ),
            None => println!("  [{}] {}", notification.kind.as_str(), notification.message),
        }
    }
}
