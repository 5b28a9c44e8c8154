//! SpendWise CLI
//!
//! Terminal front end for SpendWise:
//! - Sign in, register and sign out
//! - Open any app path through the route guard
//! - Show the dashboard for a period
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spendwise::api::{ApiClient, FinanceApi, TimePeriod};
use spendwise::auth::{AuthFlow, AuthMode, LoginForm, SubmitOutcome};
use spendwise::config::{generate_default_config, Config, LoggingConfig};
use spendwise::dashboard::{
    format_currency, CardTone, DashboardData, DashboardView, Sign, EMPTY_TRANSACTIONS_MESSAGE,
};
use spendwise::router::{settle, Layout, Location, Settled, View, DEFAULT_PATH, NAV_ITEMS};
use spendwise::session::{FileStorage, SessionStore, User};

#[derive(Parser)]
#[command(name = "spendwise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal finance dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Finance API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Full name shown in the greeting
        #[arg(short = 'n', long)]
        full_name: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Open an app path (e.g. /dashboard, /budget, /login?register=true)
    Open {
        path: String,
        /// Period for the dashboard (day, week, month, year)
        #[arg(short = 'P', long, default_value = "month")]
        period: TimePeriod,
    },

    /// Show the dashboard
    Dashboard {
        /// Period (day, week, month, year)
        #[arg(short = 'P', long, default_value = "month")]
        period: TimePeriod,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(file) = cli.session_file {
        config.session.file = Some(file.to_string_lossy().to_string());
    }

    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let api = ApiClient::new(&config.api)?;
    let store = SessionStore::init(FileStorage::new(config.session.file_path()));

    match cli.command {
        Commands::Login { email, password } => {
            let email = text_or_prompt("Email", email)?;
            let password = password_or_prompt(password)?;
            let form = LoginForm::new(email, password);
            authenticate(&api, &store, AuthMode::Login, &form).await?;
        }

        Commands::Register {
            email,
            password,
            full_name,
        } => {
            let full_name = text_or_prompt("Full name", full_name)?;
            let email = text_or_prompt("Email", email)?;
            let password = password_or_prompt(password)?;
            let form = LoginForm::new(email, password).with_full_name(full_name);
            authenticate(&api, &store, AuthMode::Register, &form).await?;
        }

        Commands::Logout => {
            if store.is_authenticated() {
                store.logout();
                println!("Signed out.");
            } else {
                println!("Not signed in.");
            }
        }

        Commands::Whoami => match store.user() {
            Some(user) => print_profile(&user),
            None => {
                println!("Not signed in.");
                println!();
                println!("Sign in with:");
                println!("  spendwise login");
            }
        },

        Commands::Open { path, period } => {
            open(&api, &store, Location::parse(&path), period).await;
        }

        Commands::Dashboard { period } => {
            open(&api, &store, Location::parse(DEFAULT_PATH), period).await;
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spendwise={}", logging.level)));

    let json = logging.is_json();
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

/// Use the given value, or ask for it on the terminal
fn text_or_prompt(label: &str, value: Option<String>) -> anyhow::Result<String> {
    given_or(value, || Input::<String>::new().with_prompt(label).interact_text())
}

/// Use the given password, or read it without echo
fn password_or_prompt(value: Option<String>) -> anyhow::Result<String> {
    given_or(value, || Password::new().with_prompt("Password").interact())
}

fn given_or(
    value: Option<String>,
    ask: impl FnOnce() -> dialoguer::Result<String>,
) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(ask()?),
    }
}

async fn authenticate(
    api: &ApiClient,
    store: &SessionStore<FileStorage>,
    mode: AuthMode,
    form: &LoginForm,
) -> anyhow::Result<()> {
    let flow = AuthFlow::new();

    match flow.submit(api, store, mode, form).await {
        SubmitOutcome::Authenticated { redirect } => {
            if let Some(user) = store.user() {
                println!("Signed in as {}", user.display_name());
            }
            println!();
            open(api, store, Location::parse(redirect), TimePeriod::default()).await;
            Ok(())
        }
        SubmitOutcome::Failed { message } => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        SubmitOutcome::Blocked => bail!("A sign-in is already in progress"),
    }
}

/// Guard `location`, follow redirects and render the resulting view
async fn open<A: FinanceApi>(
    api: &A,
    store: &SessionStore<FileStorage>,
    location: Location,
    period: TimePeriod,
) {
    let requested = location.to_string();
    let settled = settle(location, store.is_authenticated());

    if settled.redirects > 0 {
        println!("{} → {}", requested, settled.location);
        println!();
    }

    match settled.layout {
        Layout::Bare => render_view(api, store, &settled, period).await,
        Layout::Authenticated => {
            print_sidebar(&settled.location);
            println!();
            render_view(api, store, &settled, period).await;
        }
    }
}

async fn render_view<A: FinanceApi>(
    api: &A,
    store: &SessionStore<FileStorage>,
    settled: &Settled,
    period: TimePeriod,
) {
    let view = settled.view;
    println!("{}", view.title());
    println!("{}", "=".repeat(view.title().chars().count()));

    match view {
        View::Login(mode) => {
            let command = match mode {
                AuthMode::Login => "spendwise login",
                AuthMode::Register => "spendwise register",
            };
            println!("Run `{}` to continue.", command);
            println!();
            println!(
                "{} {}: spendwise open '{}'",
                mode.switch_prompt(),
                mode.switch_label(),
                mode.switch_path()
            );
        }
        View::Dashboard => {
            let (Some(token), Some(user)) = (store.token(), store.user()) else {
                return;
            };
            let data = DashboardData::load_or_empty(api, &token, period).await;
            print_dashboard(&DashboardView::build(&data, &user));
        }
        View::Settings => {
            if let Some(message) = view.placeholder_message() {
                println!("{}", message);
                println!();
            }
            let Some(token) = store.token() else {
                return;
            };
            match api.current_user(&token).await {
                Ok(user) => print_profile(&user),
                Err(e) => {
                    tracing::error!("Error fetching profile: {}", e);
                    if let Some(user) = store.user() {
                        print_profile(&user);
                    }
                }
            }
        }
        View::Transactions | View::Budget | View::Analytics => {
            if let Some(message) = view.placeholder_message() {
                println!("{}", message);
            }
        }
    }
}

fn print_sidebar(current: &Location) {
    let items: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if item.is_active(current) {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    println!("SpendWise | {} | Log out", items.join("  "));
}

fn print_profile(user: &User) {
    println!("{:<12} {}", "Name:", user.display_name());
    println!("{:<12} {}", "Email:", user.email);
    if let Some(id) = user.id {
        println!("{:<12} {}", "User ID:", id);
    }
}

fn print_dashboard(view: &DashboardView) {
    println!("{}  ({})", view.greeting, view.period.label());
    println!();

    for card in &view.cards {
        let marker = match card.tone {
            CardTone::Neutral => match view.balance.sign {
                Sign::Positive => "▲",
                Sign::Negative => "▼",
            },
            CardTone::Income => "+",
            CardTone::Expense => "-",
        };
        println!("{:<16} {:>14} {}", card.title, card.formatted(), marker);
    }
    println!("{}", view.balance.label);

    if !view.categories.is_empty() {
        println!();
        println!("Spending by Category");
        println!("{}", "-".repeat(60));
        for slice in &view.categories {
            let bar = "█".repeat((slice.share * 30.0).round() as usize);
            println!(
                "{:<16} {:>12} {:>4}% {}",
                slice.category,
                format_currency(slice.amount),
                slice.percent(),
                bar
            );
        }
    }

    println!();
    println!("Recent Transactions");
    println!("{}", "-".repeat(60));
    if view.recent.is_empty() {
        println!("{}", EMPTY_TRANSACTIONS_MESSAGE);
        return;
    }
    println!(
        "{:<14} {:<20} {:<14} {:>10}",
        "Date", "Description", "Category", "Amount"
    );
    for row in &view.recent {
        println!(
            "{:<14} {:<20} {:<14} {:>10}",
            row.date, row.description, row.category, row.amount
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_value_skips_the_prompt() {
        let value = given_or(Some("s3cret".to_string()), || {
            panic!("prompted although a value was given")
        })
        .unwrap();
        assert_eq!(value, "s3cret");
    }

    #[test]
    fn test_missing_value_uses_the_prompt() {
        let value = given_or(None, || Ok("typed".to_string())).unwrap();
        assert_eq!(value, "typed");
    }

    #[test]
    fn test_prompt_failure_is_reported() {
        let err = given_or(None, || {
            Err(dialoguer::Error::IO(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "not a terminal",
            )))
        })
        .unwrap_err();
        assert!(err.to_string().contains("not a terminal"));
    }

    #[test]
    fn test_password_flag_is_optional() {
        let cli = Cli::try_parse_from(["spendwise", "login", "-e", "a@b.c"]).unwrap();
        match cli.command {
            Commands::Login { email, password } => {
                assert_eq!(email.as_deref(), Some("a@b.c"));
                assert_eq!(password, None);
            }
            _ => panic!("expected login"),
        }
    }
}
