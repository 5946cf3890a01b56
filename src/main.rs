//! ToolFlow - tool-augmented conversation CLI.
//!
//! Main entry point for the toolflow binary.

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toolflow_backend_local::LocalToolBackend;
use toolflow_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig, ProviderConfig};
use toolflow_protocols::error::TurnError;
use toolflow_protocols::gateway::ModelGateway;
use toolflow_protocols::tool::{AbortSignal, ToolCallResult};
use toolflow_protocols::types::ToolCallRequest;
use toolflow_provider_anthropic::AnthropicGateway;
use toolflow_provider_openai::OpenAiGateway;
use toolflow_runtime::{
    ChatSession, MaskingPolicy, Orchestrator, OrchestratorConfig, ToolDispatcher, TurnObserver,
};

/// ToolFlow CLI.
#[derive(Parser)]
#[command(name = "toolflow")]
#[command(about = "Tool-augmented conversation orchestrator")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive chat loop (default)
    Chat {
        /// Provider ID to route completions through
        #[arg(long)]
        provider: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Hide internal tool error detail from the model
        #[arg(long)]
        masked: bool,

        /// Suppress the per-call tool trace
        #[arg(long)]
        no_trace: bool,
    },

    /// Print the demo backend's tools
    Tools,
}

/// Initialize tracing: console output on stderr, plus an optional
/// rolling file under `logging.dir`.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_env("TOOLFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = if logging.file_enabled {
        std::fs::create_dir_all(&logging.dir)?;
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("toolflow")
            .filename_suffix("log")
            .max_log_files(7)
            .build(&logging.dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer guard alive for the program duration.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    for warning in ConfigValidator::validate(&config).into_error()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    match cli.command {
        None => run_chat(config, None, None, false, false).await,
        Some(Commands::Chat {
            provider,
            model,
            masked,
            no_trace,
        }) => run_chat(config, provider, model, masked, no_trace).await,
        Some(Commands::Tools) => run_tools(),
    }
}

/// Run the interactive chat loop.
async fn run_chat(
    config: Config,
    provider: Option<String>,
    model: Option<String>,
    masked: bool,
    no_trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider_id = provider.unwrap_or_else(|| config.chat.provider.clone());
    let model = resolve_model(&provider_id, model, &config)?;
    let gateway = build_gateway(&provider_id, &config)?;

    let backend = Arc::new(LocalToolBackend::demo()?);

    let mut dispatcher = ToolDispatcher::new(backend.clone());
    if masked || config.dispatcher.mask_errors {
        dispatcher = dispatcher.with_masking(MaskingPolicy::Masked);
    }
    if config.chat.tool_timeout_seconds > 0 {
        dispatcher = dispatcher.with_timeout(Duration::from_secs(config.chat.tool_timeout_seconds));
    }

    let mut orchestrator_config = OrchestratorConfig::new(model.clone())
        .with_max_tokens(config.chat.max_tokens)
        .with_max_tool_rounds(config.chat.max_tool_rounds);
    if let Some(system_prompt) = config.chat.system_prompt.clone() {
        orchestrator_config = orchestrator_config.with_system_prompt(system_prompt);
    }
    if let Some(temperature) = config.chat.temperature {
        orchestrator_config = orchestrator_config.with_temperature(temperature);
    }

    let mut orchestrator = Orchestrator::new(gateway, backend, dispatcher, orchestrator_config);
    if !no_trace && config.trace.show_tool_calls {
        orchestrator = orchestrator.with_observer(Arc::new(TracePrinter));
    }

    let mut session = ChatSession::start(orchestrator).await?;

    let tool_names: Vec<String> = session.tools().iter().map(|t| t.name.clone()).collect();
    println!("ToolFlow chat: provider '{provider_id}', model '{model}'");
    println!("Tools: {}", tool_names.join(", "));
    println!("Type 'exit' or 'quit' to leave, 'retry' to replay a failed turn.");

    repl(&mut session).await
}

/// Drive the prompt/response loop until exit, Ctrl-C at the prompt, or
/// EOF.
async fn repl(session: &mut ChatSession) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let abort = AbortSignal::new();
        let outcome = if input.eq_ignore_ascii_case("retry") {
            await_with_interrupt(session.retry(&abort), &abort).await
        } else {
            await_with_interrupt(session.send(input, &abort), &abort).await
        };

        match outcome {
            Ok(outcome) => println!("{}", outcome.final_text),
            Err(TurnError::Aborted) => eprintln!("(turn aborted)"),
            Err(err) => eprintln!("error: {err} (type 'retry' to try again)"),
        }
    }

    Ok(())
}

/// Await a turn, mapping Ctrl-C to an abort request. The turn future
/// keeps running after the signal so in-flight calls can finish.
async fn await_with_interrupt<F: Future>(turn: F, abort: &AbortSignal) -> F::Output {
    tokio::pin!(turn);
    loop {
        tokio::select! {
            outcome = &mut turn => return outcome,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("(aborting turn)");
                abort.abort();
            }
        }
    }
}

/// Print the demo backend's tool table.
fn run_tools() -> Result<(), Box<dyn std::error::Error>> {
    let backend = LocalToolBackend::demo()?;

    println!("{:<12} {:<9} {}", "TOOL", "STATE", "DESCRIPTION");
    println!("{}", "-".repeat(64));
    for (descriptor, enabled) in backend.registry().all_tools() {
        let state = if enabled { "enabled" } else { "disabled" };
        println!("{:<12} {:<9} {}", descriptor.name, state, descriptor.description);
    }

    Ok(())
}

/// Build the model gateway for a provider ID.
fn build_gateway(
    provider_id: &str,
    config: &Config,
) -> Result<Arc<dyn ModelGateway>, Box<dyn std::error::Error>> {
    let provider = config.providers.get(provider_id);
    let timeout = if config.chat.request_timeout_seconds > 0 {
        Some(Duration::from_secs(config.chat.request_timeout_seconds))
    } else {
        None
    };

    match provider_id {
        "anthropic" => {
            let mut gateway = AnthropicGateway::new(resolve_api_key(provider, "ANTHROPIC_API_KEY")?);
            if let Some(base_url) = provider.and_then(|p| p.base_url.clone()) {
                gateway = gateway.with_base_url(base_url);
            }
            if let Some(timeout) = timeout {
                gateway = gateway.with_timeout(timeout);
            }
            Ok(Arc::new(gateway))
        }
        "openai" => {
            let mut gateway = OpenAiGateway::new(resolve_api_key(provider, "OPENAI_API_KEY")?);
            if let Some(base_url) = provider.and_then(|p| p.base_url.clone()) {
                gateway = gateway.with_base_url(base_url);
            }
            if let Some(timeout) = timeout {
                gateway = gateway.with_timeout(timeout);
            }
            Ok(Arc::new(gateway))
        }
        other => {
            Err(format!("unknown provider '{other}'; expected 'anthropic' or 'openai'").into())
        }
    }
}

/// API key from the provider section, else from the vendor env var.
fn resolve_api_key(
    provider: Option<&ProviderConfig>,
    env_var: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(key) = provider
        .and_then(|p| p.api_key.clone())
        .filter(|key| !key.is_empty())
    {
        return Ok(key);
    }
    std::env::var(env_var).map_err(|_| {
        format!("no API key configured: set {env_var} or providers.<id>.api_key").into()
    })
}

/// Model resolution: CLI flag, `chat.model`, the provider section's
/// `default_model`, then the built-in fallback.
fn resolve_model(
    provider_id: &str,
    cli_model: Option<String>,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(model) = cli_model {
        return Ok(model);
    }
    if let Some(model) = config.chat.model.clone() {
        return Ok(model);
    }
    if let Some(model) = config
        .providers
        .get(provider_id)
        .and_then(|p| p.default_model.clone())
    {
        return Ok(model);
    }
    match provider_id {
        "anthropic" => Ok("claude-sonnet-4-20250514".to_string()),
        "openai" => Ok("gpt-4o".to_string()),
        other => Err(format!("no model configured for provider '{other}'").into()),
    }
}

/// Prints each tool call and its result as the turn progresses.
struct TracePrinter;

impl TurnObserver for TracePrinter {
    fn on_tool_call(&self, call: &ToolCallRequest) {
        println!("[tool] {}({})", call.name, call.arguments);
    }

    fn on_tool_result(&self, result: &ToolCallResult) {
        if result.is_success() {
            println!("[tool] {} -> {}", result.tool_name, result.content());
        } else {
            println!("[tool] {} failed: {}", result.tool_name, result.content());
        }
    }
}
