use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{info, level_filters::LevelFilter};

mod check;
mod collector;
mod config;
mod snmp;

use check::Verdict;
use config::{AppConfig, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let verdict = match Cli::try_parse() {
        Ok(cli) => {
            init_tracing(cli.verbose);
            run(cli).await
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Подробности clap уходят в stderr, в stdout остаётся одна строка
            let _ = e.print();
            Verdict::usage(e.kind().as_str().unwrap_or("invalid command line arguments"))
        }
    };

    info!(status = %verdict.status, "Проверка завершена");
    println!("{}", verdict.message);
    ExitCode::from(verdict.status.exit_code())
}

async fn run(cli: Cli) -> Verdict {
    let config = match AppConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => return Verdict::usage(e),
    };
    info!(agent = %config.target(), version = ?config.version, "Запуск проверки LAG");

    // Паника внутри проверки не должна оставить монитор без вывода
    match tokio::spawn(async move { check::check_agent(&config).await }).await {
        Ok(verdict) => verdict,
        Err(e) => Verdict::unexpected(e),
    }
}

/// Диагностика только в stderr: stdout занят вердиктом
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
