//! rusty-xe CLI - exchange-rate trends and conversion advice
//!
//! ## Example Usage
//!
//! ```bash
//! # Advice from saved provider responses
//! rusty-xe recommend USD --latest latest.json --history history.json
//!
//! # Advice from live rates (requires the `async` feature)
//! rusty-xe recommend GBP
//!
//! # Trend slopes of several currencies in a historical response
//! rusty-xe slopes history.json --currencies GBP,USD --json
//!
//! # Reciprocal rates of a latest response
//! rusty-xe invert latest.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_xe::advisor::{Advisor, ConvertResponse};
use rusty_xe::config::Config;
use rusty_xe::currency::{normalize_code, Currency};
use rusty_xe::data::{HistoricalRates, HistoryWindow, InMemoryRateProvider, LatestRates};
use rusty_xe::engine::TrendEngine;
use rusty_xe::error::{Result as XeResult, XeError};
use rusty_xe::signal::Signal;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// rusty-xe: exchange-rate trends and conversion advice
#[derive(Parser)]
#[command(name = "rusty-xe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Exchange-rate trends and convert/hold recommendations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend whether to convert a currency into the target now
    Recommend {
        /// Currency to convert from (e.g. USD)
        #[arg(value_name = "CURRENCY")]
        currency: String,

        /// Latest-rates JSON response to use instead of fetching
        #[arg(long, requires = "history")]
        latest: Option<PathBuf>,

        /// Historical-rates JSON response to use instead of fetching
        #[arg(long, requires = "latest")]
        history: Option<PathBuf>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report trend slopes for currencies in a historical response
    Slopes {
        /// Historical-rates JSON response
        #[arg(value_name = "HISTORY_FILE")]
        history: PathBuf,

        /// Comma-separated currency codes (default: tracked currencies)
        #[arg(long, value_delimiter = ',')]
        currencies: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print reciprocal rates of a latest-rates response
    Invert {
        /// Latest-rates JSON response
        #[arg(value_name = "LATEST_FILE")]
        latest: PathBuf,
    },

    /// Show the look-back window used for historical queries
    Window {
        /// Days of history (default from configuration)
        #[arg(short = 'd', long)]
        days: Option<u32>,
    },

    /// Show configuration and build information
    Info,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-xe".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("Endpoint: {}", config.endpoint.dimmed());
    }

    let result = match cli.command {
        Commands::Recommend {
            currency,
            latest,
            history,
            json,
        } => recommend(&config, &currency, latest.zip(history), json),
        Commands::Slopes {
            history,
            currencies,
            json,
        } => report_slopes(&config, &history, currencies, json),
        Commands::Invert { latest } => invert(&latest),
        Commands::Window { days } => show_window(&config, days),
        Commands::Info => show_info(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> XeResult<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn recommend(
    config: &Config,
    currency: &str,
    files: Option<(PathBuf, PathBuf)>,
    json: bool,
) -> XeResult<()> {
    let engine = TrendEngine::new(config.engine);

    let response = match files {
        Some((latest, history)) => {
            let provider = InMemoryRateProvider::from_json_files(&latest, &history)?;
            Advisor::new(provider, engine, config.target_currency, config.lookback_days)
                .convert(currency)?
        }
        None => fetch_and_advise(config, &engine, currency)?,
    };

    print_response(&response, json)
}

#[cfg(feature = "async")]
fn fetch_and_advise(config: &Config, engine: &TrendEngine, currency: &str) -> XeResult<ConvertResponse> {
    use rusty_xe::advisor::advise;
    use rusty_xe::data::sources::ExchangeRatesClient;

    let base = normalize_code(currency)?;
    let client = ExchangeRatesClient::with_config(&config.endpoint, config.http.retry_policy())?;
    let window = HistoryWindow::ending_today(config.lookback_days)?;
    let symbols = [config.target_currency.code()];

    let runtime = tokio::runtime::Runtime::new()?;
    let (latest, historical) = runtime.block_on(async {
        let latest = client.latest_rates(&base, &symbols).await?;
        let historical = client.historical_rates(&base, &symbols, &window).await?;
        Ok::<_, XeError>((latest, historical))
    })?;

    advise(engine, config.target_currency, &base, &latest, &historical)
}

#[cfg(not(feature = "async"))]
fn fetch_and_advise(_config: &Config, _engine: &TrendEngine, _currency: &str) -> XeResult<ConvertResponse> {
    Err(XeError::ConfigError(
        "live rates need the `async` feature; pass --latest and --history instead".to_string(),
    ))
}

fn print_response(response: &ConvertResponse, json: bool) -> XeResult<()> {
    if json {
        println!("{}", serde_json::to_string(response)?);
        return Ok(());
    }

    let signal = match response.recommendation {
        Signal::Convert => response.recommendation.to_string().green().bold(),
        Signal::NoConvert => response.recommendation.to_string().red().bold(),
        Signal::Neutral => response.recommendation.to_string().yellow().bold(),
    };
    println!(
        "1 {} = {} {}",
        response.from.bold(),
        response.rate,
        response.to.bold()
    );
    println!("Recommendation: {}", signal);
    Ok(())
}

fn report_slopes(config: &Config, path: &Path, currencies: Vec<String>, json: bool) -> XeResult<()> {
    let history: HistoricalRates = read_json(path)?;
    let currencies = if currencies.is_empty() {
        Currency::tracked_codes()
    } else {
        currencies
            .iter()
            .map(|c| normalize_code(c))
            .collect::<XeResult<Vec<_>>>()?
    };

    let report = TrendEngine::new(config.engine).trend_report(&history.rates, &currencies);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} observations ({} .. {}), base {}",
        report.observations,
        report.first_date.as_deref().unwrap_or("-"),
        report.last_date.as_deref().unwrap_or("-"),
        history.base.bold()
    );
    for trend in &report.trends {
        let slope = match trend.slope.value() {
            Some(beta) => format!("{:+.10}", beta),
            None => "undetermined".dimmed().to_string(),
        };
        println!("  {:<4} {:>18}  {}", trend.currency.bold(), slope, trend.signal);
    }
    Ok(())
}

fn invert(path: &Path) -> XeResult<()> {
    let latest: LatestRates = read_json(path)?;
    let inverse = TrendEngine::default().invert(&latest.rates);

    let mut codes: Vec<&String> = inverse.keys().collect();
    codes.sort();

    println!("Rates per 1 unit of each currency, in {} ({})", latest.base.bold(), latest.date);
    for code in codes {
        println!("  {:<4} {}", code.bold(), inverse[code]);
    }
    Ok(())
}

fn show_window(config: &Config, days: Option<u32>) -> XeResult<()> {
    let window = HistoryWindow::ending_today(days.unwrap_or(config.lookback_days))?;
    println!("start_at={} end_at={}", window.start_at(), window.end_at());
    Ok(())
}

fn show_info(config: &Config) -> XeResult<()> {
    println!("{}", "rusty-xe".cyan().bold());
    println!("  Version:          {}", env!("CARGO_PKG_VERSION"));
    println!("  Target currency:  {}", config.target_currency);
    println!("  Look-back days:   {}", config.lookback_days);
    println!("  Endpoint:         {}", config.endpoint);
    println!(
        "  Missing rates:    {:?}",
        config.engine.missing_rate_policy
    );
    println!(
        "  Retries:          {} (wait {} ms, max {} ms, timeout {} ms)",
        config.http.retry_count,
        config.http.retry_wait_ms,
        config.http.retry_max_wait_ms,
        config.http.timeout_ms
    );
    println!(
        "  Live rates:       {}",
        if cfg!(feature = "async") { "enabled".green() } else { "disabled".yellow() }
    );
    if let Some(path) = Config::default_path() {
        println!("  Config path:      {}", path.display().to_string().dimmed());
    }
    Ok(())
}
