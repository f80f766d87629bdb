use clap::Parser;
use guestlist::config::cli::{Command, PayloadKind};
use guestlist::domain::ports::GuestGateway;
use guestlist::utils::error::ErrorSeverity;
use guestlist::utils::{logger, validation::Validate};
use guestlist::{
    validate_create, validate_update, AppConfig, CliConfig, GuestApiClient, RosterImport,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let app_config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = cli.verbose;
    if cli.json_logs || app_config.json_logs() {
        logger::init_json_logger(verbose, app_config.log_level());
    } else {
        logger::init_cli_logger(verbose, app_config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| app_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(cli.command, &app_config).await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn read_payload(input: Option<&str>) -> guestlist::Result<serde_json::Value> {
    let text = match input {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> guestlist::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(command: Command, app_config: &AppConfig) -> guestlist::Result<i32> {
    match command {
        Command::Validate { kind, input } => {
            let payload = read_payload(input.as_deref())?;
            let outcome = match kind {
                PayloadKind::Create => validate_create(&payload).map(serde_json::to_value),
                PayloadKind::Update => validate_update(&payload).map(serde_json::to_value),
            };

            match outcome {
                Ok(value) => {
                    print_json(&value?)?;
                    Ok(0)
                }
                Err(violations) => {
                    print_json(&violations)?;
                    tracing::warn!("{}", violations);
                    Ok(1)
                }
            }
        }
        Command::Import { input, output } => {
            let report = RosterImport::from_path(&input)?;
            println!(
                "✅ {} accepted, ❌ {} rejected ({} rows)",
                report.accepted.len(),
                report.rejected.len(),
                report.total()
            );
            for row in &report.rejected {
                let messages: Vec<&str> = row.violations.iter().map(|v| v.message.as_str()).collect();
                println!("  line {}: {}", row.line, messages.join("; "));
            }

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&report.accepted)?;
                std::fs::write(&output, json)?;
                println!("📁 Accepted guests saved to: {}", output);
            }

            Ok(if report.is_clean() { 0 } else { 1 })
        }
        Command::ResolveUrl { server } => {
            let settings = app_config.api_settings()?;
            if server {
                println!("{}", settings.server_base_url());
            } else {
                println!("{}", settings.base_url);
            }
            Ok(0)
        }
        Command::Health => {
            let client = GuestApiClient::new(app_config.api_settings()?)?;
            let report = client.health().await?;
            print_json(&report)?;
            Ok(if report.is_ok() { 0 } else { 2 })
        }
        Command::Add { input } => {
            let payload = read_payload(input.as_deref())?;
            let client = GuestApiClient::new(app_config.api_settings()?)?;
            let created = client.create_guest(&payload).await?;
            print_json(&created)?;
            Ok(0)
        }
        Command::Update { id, input } => {
            let payload = read_payload(input.as_deref())?;
            let client = GuestApiClient::new(app_config.api_settings()?)?;
            let updated = client.update_guest(&id, &payload).await?;
            print_json(&updated)?;
            Ok(0)
        }
    }
}
