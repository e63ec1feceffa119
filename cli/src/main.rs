mod legacy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use menu::FoodCategory;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; pass --session-token or set FOOD_SESSION_TOKEN")]
    MissingSessionToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("cannot read {path}: {source}")]
    ReadInput { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{failed} of {attempted} foods failed to import")]
    ImportIncomplete { failed: usize, attempted: usize },
}

#[derive(Parser, Debug)]
#[command(name = "food-cli", about = "Operator CLI for the food-ordering API")]
struct Cli {
    #[arg(long, env = "FOOD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Value of the `session_token` cookie of an admin account.
    #[arg(long, env = "FOOD_SESSION_TOKEN")]
    session_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    session_token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz`.
    Ping,
    Foods(FoodsCommand),
    /// Import a legacy menu export (JSON array) through the admin API.
    ImportLegacy(ImportArgs),
}

#[derive(Args, Debug)]
struct FoodsCommand {
    #[command(subcommand)]
    command: FoodsSubcommand,
}

#[derive(Subcommand, Debug)]
enum FoodsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ImportArgs {
    file: PathBuf,

    /// Map and report rows without creating anything.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        session_token: cli.session_token,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Foods(foods) => run_foods(&ctx, foods).await,
        Command::ImportLegacy(args) => run_import(&ctx, args).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_foods(cli: &CliContext, foods: FoodsCommand) -> Result<(), CliError> {
    match foods.command {
        FoodsSubcommand::List { page, per_page, category } => {
            let mut path = format!("/api/foods?page={page}&per_page={}", menu::clamp_per_page(per_page));
            if let Some(raw) = category {
                let category = raw
                    .parse::<FoodCategory>()
                    .map_err(|_| CliError::UnknownCategory(raw.clone()))?;
                path.push_str("&category=");
                path.push_str(category.as_str());
            }
            let json = api_request(cli, reqwest::Method::GET, &path, None, false).await?;
            print_json(&json)
        }
    }
}

async fn run_import(cli: &CliContext, args: ImportArgs) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&args.file).map_err(|source| CliError::ReadInput {
        path: args.file.clone(),
        source,
    })?;
    let plan = legacy::plan_import(&raw)?;

    for row in &plan.skipped {
        eprintln!("skip #{} {:?}: {}", row.index, row.title, row.reason);
    }

    if args.dry_run {
        for (index, food) in &plan.foods {
            println!(
                "#{index} {} [{}] {}",
                food.name,
                food.category,
                menu::format_price(food.price_cents)
            );
        }
        eprintln!(
            "dry run: {} importable, {} skipped",
            plan.foods.len(),
            plan.skipped.len()
        );
        return Ok(());
    }

    let mut created = 0_usize;
    let mut failed = 0_usize;
    for (index, food) in &plan.foods {
        let body = serde_json::to_value(food)?;
        match api_request(cli, reqwest::Method::POST, "/api/foods", Some(body), true).await {
            Ok(json) => {
                created = created.saturating_add(1);
                let id = json.get("id").and_then(Value::as_str).unwrap_or("?");
                eprintln!("created #{index} {} -> {id}", food.name);
            }
            // Auth failures apply to every remaining row.
            Err(error @ (CliError::MissingSessionToken | CliError::InvalidHeader(_))) => return Err(error),
            Err(CliError::ServerError { status: status @ (401 | 403), message }) => {
                return Err(CliError::ServerError { status, message });
            }
            Err(error) => {
                failed = failed.saturating_add(1);
                eprintln!("failed #{index} {}: {error}", food.name);
            }
        }
    }

    eprintln!(
        "import complete: created={created} failed={failed} skipped={}",
        plan.skipped.len()
    );
    if failed > 0 {
        return Err(CliError::ImportIncomplete { failed, attempted: plan.foods.len() });
    }
    Ok(())
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
    authenticated: bool,
) -> Result<Value, CliError> {
    let mut headers = HeaderMap::new();
    if authenticated {
        let session_token = cli
            .session_token
            .as_deref()
            .ok_or(CliError::MissingSessionToken)?;
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("session_token={session_token}"))?,
        );
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), ToOwned::to_owned);
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
