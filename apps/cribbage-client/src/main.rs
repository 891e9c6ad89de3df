use std::collections::VecDeque;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

use clap::Parser;
use cribbage_client::config::{ClientConfig, LogFormat};
use cribbage_client::console::{
    parse_command, render_error, render_notice, render_table, Command, RenderOptions, HELP,
};
use cribbage_client::domain::CountingRule;
use cribbage_client::{ClientError, Effect, GameFlow, HttpAuthority, SessionDriver};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod telemetry;

#[derive(Parser, Debug)]
#[command(name = "cribbage")]
#[command(about = "Two-player cribbage table kept in step with a remote scoring authority")]
struct Args {
    /// Authority base URL (overrides CRIBBAGE_AUTHORITY_URL)
    #[arg(long)]
    authority_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Playability counting rule: raw or pip
    #[arg(long)]
    counting: Option<CountingRule>,

    /// Name shown at the top of the table
    #[arg(long)]
    player_name: Option<String>,

    /// Log output: pretty or json
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Print card image paths next to card labels
    #[arg(long, default_value_t = false)]
    show_assets: bool,
}

impl Args {
    fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = self.authority_url {
            config.authority.base_url = url;
        }
        if let Some(ms) = self.timeout_ms {
            config.authority.request_timeout = Duration::from_millis(ms);
        }
        if let Some(counting) = self.counting {
            config.counting = counting;
        }
        if let Some(name) = self.player_name {
            config.player_name = name;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let opts = RenderOptions {
        show_assets: args.show_assets,
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(config.log_format);

    let authority = match HttpAuthority::new(&config.authority) {
        Ok(authority) => authority,
        Err(e) => {
            eprintln!("❌ {}", ClientError::from(e));
            std::process::exit(1);
        }
    };
    info!(
        authority = %authority.base_url(),
        counting = config.counting.as_str(),
        "starting cribbage table"
    );

    let mut driver = SessionDriver::new(authority, GameFlow::new(config.counting));
    let mut lines = spawn_stdin_reader();
    let mut queued = VecDeque::new();

    println!("{HELP}");
    let cancel = CancellationToken::new();
    let started = cancellable(driver.start(&cancel), &cancel, &mut lines, &mut queued).await;
    report(started);

    loop {
        print!("{}> ", render_table(driver.flow(), &config.player_name, opts));
        let _ = std::io::stdout().flush();

        let line = match queued.pop_front() {
            Some(line) => line,
            None => match lines.recv().await {
                Some(line) => line,
                None => break,
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_command(&line) {
            Ok(Command::Event(event)) => event,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                println!("{}", render_error(&e));
                continue;
            }
        };

        let cancel = CancellationToken::new();
        let outcome =
            cancellable(driver.drive(event, &cancel), &cancel, &mut lines, &mut queued).await;
        report(outcome);
    }

    info!("leaving the table");
}

/// Runs `work` to completion. A line typed meanwhile cancels the request in
/// flight and is queued to run once the table is restored.
async fn cancellable<F>(
    work: F,
    cancel: &CancellationToken,
    lines: &mut mpsc::Receiver<String>,
    queued: &mut VecDeque<String>,
) -> F::Output
where
    F: Future,
{
    tokio::pin!(work);
    loop {
        tokio::select! {
            out = &mut work => return out,
            next = lines.recv(), if !cancel.is_cancelled() => {
                if let Some(line) = next {
                    queued.push_back(line);
                }
                cancel.cancel();
            }
        }
    }
}

fn report(outcome: Result<Vec<Effect>, ClientError>) {
    match outcome {
        Ok(effects) => {
            for effect in effects {
                match effect {
                    Effect::Notice(notice) => println!("{}", render_notice(&notice)),
                    // Open prompts are printed with the table.
                    Effect::Prompt(_) => {}
                    Effect::Request(request) => warn!(%request, "request left unperformed"),
                }
            }
        }
        Err(e) => println!("{}", render_error(&e)),
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        let mut reader = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match reader.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "stdin read failed");
                    break;
                }
            }
        }
    });
    rx
}
