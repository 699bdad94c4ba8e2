//! CLI entrypoint for llm-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use qa_application::{AskQuestionUseCase, DispatchUseCase};
use qa_infrastructure::{ConfigLoader, EnvCredentialSource, FileConfig, GroqGateway, load_dotenv};
use qa_presentation::{Cli, ConsoleFormatter, InteractiveFrontend, serve};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        println!();
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    info!("Starting llm-qa (model: {})", config.backend.model);

    // === Dependency Injection ===
    let gateway = Arc::new(GroqGateway::from_config(&config.backend)?);
    let dispatcher = DispatchUseCase::new(gateway, config.backend.to_completion_params());
    let credentials = Arc::new(EnvCredentialSource::new(config.backend.api_key_env.clone()));
    let use_case = AskQuestionUseCase::new(dispatcher, credentials);

    if cli.serve {
        let addr = config.server.socket_addr()?;
        serve(addr, Arc::new(use_case))
            .await
            .with_context(|| format!("Web front end failed on {}", addr))?;
        return Ok(());
    }

    let frontend = InteractiveFrontend::new(use_case)
        .with_progress(!cli.quiet && config.output.show_progress)
        .with_quiet(cli.quiet);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = frontend
        .run(cli.question.clone(), &mut stdin.lock(), &mut stdout.lock())
        .await?;
    debug!("Interactive run finished: {:?}", outcome);

    Ok(())
}

/// Merge config sources, apply CLI overrides, then validate
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.backend.model = model.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.backend.max_tokens = max_tokens;
    }
    if let Some(temperature) = cli.temperature {
        config.backend.temperature = temperature;
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    config.validate()?;
    Ok(config)
}
