//! Terminal front end
//!
//! Every subcommand performs the same checks and the same single request as
//! the matching web page, and prints what the page would show.

use crate::auth::{LOGIN_FAILED, LOGIN_OK, LOGOUT_OK, REGISTER_FAILED, REGISTER_OK, Session};
use crate::config::{ClientConfig, HISTORY_PAGE_SIZE};
use crate::history::{PageStats, TransactionFilter, describe};
use crate::models::{RegisterRequest, SendRequest};
use crate::rewards::{Availability, CategoryFilter, REDEEM_FAILED, low_stock, redeemed_message};
use crate::storage::FileTokenStore;
use crate::validation::{SEND_FAILED, check_registration, check_send, sent_message, should_search};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Send and redeem tokens of thanks", long_about = None)]
pub struct Args {
    /// Base URL of the token API
    #[arg(long, env = "THANKS_API_URL")]
    pub api_url: Option<String>,
    /// Where the session token is kept between runs
    #[arg(long, env = "THANKS_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        email: String,
        #[arg(long, env = "THANKS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        email: String,
        #[arg(long, env = "THANKS_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Me,
    /// Show the token balance
    Balance,
    /// List transactions
    History {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = HISTORY_PAGE_SIZE)]
        limit: u32,
        #[arg(long, default_value = "ALL", value_parser = parse_transaction_filter)]
        filter: TransactionFilter,
    },
    /// Send tokens to another user
    Send {
        recipient: String,
        amount: i64,
        #[arg(long, short, default_value = "")]
        message: String,
    },
    /// List the reward catalog
    Rewards {
        #[arg(long, default_value = "ALL", value_parser = parse_category_filter)]
        category: CategoryFilter,
    },
    /// Redeem a reward by id
    Redeem { id: String },
    /// Look up users by email
    Search { email: String },
}

fn parse_transaction_filter(raw: &str) -> Result<TransactionFilter, String> {
    TransactionFilter::parse(raw).ok_or_else(|| {
        format!(
            "unknown filter '{}', expected one of: {}",
            raw,
            TransactionFilter::ALL.map(|f| f.id()).join(", ")
        )
    })
}

fn parse_category_filter(raw: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(raw).ok_or_else(|| {
        let ids: Vec<&str> = CategoryFilter::options().iter().map(|c| c.id()).collect();
        format!("unknown category '{}', expected one of: {}", raw, ids.join(", "))
    })
}

pub async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::resolve(args.api_url);
    let store = FileTokenStore::new(args.token_file.unwrap_or_else(FileTokenStore::default_path));
    log::debug!(
        "Using API {} and token file {}",
        config.api_url,
        store.path().display()
    );

    let mut session = Session::new(config, Arc::new(store));
    match execute(args.command, &mut session).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(message) => Err(message.into()),
    }
}

async fn require_session(session: &mut Session) -> Result<(), String> {
    if session.restore().await.is_some() {
        Ok(())
    } else {
        Err("Not signed in, run `thanks login <email>` first".to_string())
    }
}

/// Run one command and return the lines to print, or the message to show
/// as an error.
pub async fn execute(command: Command, session: &mut Session) -> Result<Vec<String>, String> {
    match command {
        Command::Login { email, password } => {
            let user = session
                .login(&email, &password)
                .await
                .map_err(|e| e.user_message(LOGIN_FAILED))?;
            Ok(vec![
                LOGIN_OK.to_string(),
                format!("{} <{}>: {} tokens", user.full_name(), user.email, user.token_balance),
            ])
        }
        Command::Register {
            first_name,
            last_name,
            email,
            password,
            confirm,
        } => {
            check_registration(&password, &confirm)?;
            let request = RegisterRequest {
                first_name,
                last_name,
                email,
                password,
            };
            let user = session
                .register(&request)
                .await
                .map_err(|e| e.user_message(REGISTER_FAILED))?;
            Ok(vec![
                REGISTER_OK.to_string(),
                format!("Signed in as {}", user.full_name()),
            ])
        }
        Command::Logout => {
            session.logout().map_err(|e| e.to_string())?;
            Ok(vec![LOGOUT_OK.to_string()])
        }
        Command::Me => {
            require_session(session).await?;
            let user = session.user().cloned().ok_or("Not signed in")?;
            Ok(vec![
                user.full_name(),
                user.email,
                format!("{} tokens", user.token_balance),
            ])
        }
        Command::Balance => {
            require_session(session).await?;
            let balance = session
                .api()
                .balance()
                .await
                .map_err(|e| e.user_message("Failed to load balance"))?;
            Ok(vec![format!("{} tokens", balance)])
        }
        Command::History {
            page,
            limit,
            filter,
        } => {
            require_session(session).await?;
            let viewer = session.user_id().unwrap_or_default().to_string();
            let history = session
                .api()
                .history(page, limit)
                .await
                .map_err(|e| e.user_message("Failed to load transaction history"))?;

            let stats = PageStats::compute(&history.pagination, &history.transactions, &viewer);
            let mut lines = vec![format!(
                "{} total, {} received, {} purchases on this page",
                stats.total, stats.received, stats.purchases
            )];
            let shown = filter.apply(&history.transactions, &viewer);
            if shown.is_empty() {
                lines.push(filter.empty_message());
            }
            for tx in shown {
                let line = describe(tx, &viewer);
                let mut text = format!("{:>6}  {}  {}", line.amount, line.date, line.headline);
                if let Some(message) = line.message {
                    text.push_str(&format!("  \"{}\"", message));
                }
                lines.push(text);
            }
            lines.push(format!(
                "Page {} of {}",
                history.pagination.current_page.max(page),
                history.pagination.total_pages.max(1)
            ));
            Ok(lines)
        }
        Command::Send {
            recipient,
            amount,
            message,
        } => {
            require_session(session).await?;
            let api = session.api();
            let balance = api
                .balance()
                .await
                .map_err(|e| e.user_message("Failed to load balance"))?;
            check_send(&recipient, amount, balance)?;

            let request = SendRequest {
                recipient_email: recipient.trim().to_string(),
                amount,
                message,
            };
            let response = api
                .send(&request)
                .await
                .map_err(|e| e.user_message(SEND_FAILED))?;
            session.update_balance(response.new_balance);
            Ok(vec![
                sent_message(amount),
                format!("New balance: {} tokens", response.new_balance),
            ])
        }
        Command::Rewards { category } => {
            require_session(session).await?;
            let api = session.api();
            let catalog = api
                .rewards()
                .await
                .map_err(|e| e.user_message(crate::rewards::LOAD_FAILED))?;
            let balance = api
                .balance()
                .await
                .map_err(|e| e.user_message(crate::rewards::LOAD_FAILED))?;

            let mut lines = vec![format!("Your balance: {} tokens", balance)];
            let shown = category.apply(&catalog);
            if shown.is_empty() {
                lines.push(category.empty_message());
            }
            for reward in shown {
                let availability = Availability::of(reward, balance, None);
                let mut text = format!(
                    "[{}] {} ({}) {} tokens, {} left: {}",
                    reward.id,
                    reward.name,
                    reward.category.display_name(),
                    reward.token_cost,
                    reward.stock,
                    availability.label()
                );
                if low_stock(reward) {
                    text.push_str("  (low stock)");
                }
                lines.push(text);
            }
            Ok(lines)
        }
        Command::Redeem { id } => {
            require_session(session).await?;
            let response = session
                .api()
                .redeem(&id)
                .await
                .map_err(|e| e.user_message(REDEEM_FAILED))?;
            session.update_balance(response.new_balance);
            let name = response.transaction.reward_name().unwrap_or(&id).to_string();
            Ok(vec![
                redeemed_message(&name),
                format!("New balance: {} tokens", response.new_balance),
            ])
        }
        Command::Search { email } => {
            if !should_search(&email) {
                return Ok(vec![]);
            }
            require_session(session).await?;
            let users = session
                .api()
                .search_users(&email)
                .await
                .map_err(|e| e.user_message("Failed to search users"))?;
            Ok(users
                .into_iter()
                .map(|u| format!("{}  {}", u.full_name(), u.email))
                .collect())
        }
    }
}
