//! Console demo for the pagepulse widget.
//!
//! Polls the configured analytics endpoint and draws the two lists to
//! stdout. Type a page number (0-based) and press enter to open its
//! referrer view, an empty line to close it, and ctrl-c to quit.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use pagepulse::adapters::ReqwestHttpClient;
use pagepulse::config::WidgetConfig;
use pagepulse::error::FetchError;
use pagepulse::reconciler::{PageListItem, ReferrerListItem};
use pagepulse::traits::RenderSink;
use pagepulse::widget::Widget;

const DEFAULT_VERSION: &str = "v3";
const DEFAULT_PATH: &str = "live/toppages/";
const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Render sink that draws both list regions to stdout.
struct ConsoleRenderSink;

impl RenderSink for ConsoleRenderSink {
    fn on_render_page_list(&self, items: &[PageListItem]) {
        println!();
        println!("Top pages");
        println!("---------");
        if items.is_empty() {
            println!("  (no pages)");
        }
        for (index, item) in items.iter().enumerate() {
            println!("{:>3}. {:>6}  {}", index, item.visitor_count, item.title);
        }
    }

    fn on_render_referrer_list(&self, header: &str, items: &[ReferrerListItem]) {
        println!();
        println!("{}", header);
        for item in items {
            println!("     {:>6}  {}", item.visitor_count, item.domain);
        }
    }

    fn on_clear_referrer_list(&self) {
        println!();
        println!("(referrer view closed)");
    }

    fn on_error(&self, error: &FetchError) {
        eprintln!("error: {}", error.user_message());
    }
}

fn usage() -> String {
    [
        "usage: pagepulse --host <site> --apikey <key> [options]",
        "",
        "options:",
        "  --host <site>         site whose pages are ranked (required)",
        "  --apikey <key>        analytics API key (required)",
        "  --api-version <v>     API version segment (default: v3)",
        "  --path <path>         endpoint path (default: live/toppages/)",
        "  --interval-ms <n>     poll interval in milliseconds (default: 5000)",
    ]
    .join("\n")
}

/// Parse command-line arguments into a widget configuration.
fn parse_config<I>(args: I) -> Result<WidgetConfig, String>
where
    I: Iterator<Item = String>,
{
    let mut host = None;
    let mut api_key = None;
    let mut version = DEFAULT_VERSION.to_string();
    let mut path = DEFAULT_PATH.to_string();
    let mut interval_ms = DEFAULT_INTERVAL_MS;

    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {}", flag))
        };
        match arg.as_str() {
            "--host" => host = Some(value_for("--host")?),
            "--apikey" => api_key = Some(value_for("--apikey")?),
            "--api-version" => version = value_for("--api-version")?,
            "--path" => path = value_for("--path")?,
            "--interval-ms" => {
                interval_ms = value_for("--interval-ms")?
                    .parse()
                    .map_err(|_| "interval-ms must be a positive integer".to_string())?;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    let host = host.ok_or("--host is required")?;
    let api_key = api_key.ok_or("--apikey is required")?;

    WidgetConfig::new(
        host,
        api_key,
        version,
        path,
        Duration::from_millis(interval_ms),
    )
    .map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match parse_config(std::env::args()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };

    let mut widget = Widget::new(
        config,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(ConsoleRenderSink),
    );
    widget.start();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line? {
                Some(input) => {
                    let input = input.trim();
                    if input.is_empty() {
                        widget.clear_pick();
                    } else if let Ok(index) = input.parse::<usize>() {
                        widget.pick(index);
                    } else {
                        println!("type a page number, an empty line, or ctrl-c");
                    }
                }
                None => break,
            },
        }
    }

    widget.stop();
    Ok(())
}
