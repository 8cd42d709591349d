// # parks - WindsorWolfPack interactive shell
//
// A THIN front end over parks-core. It is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing logging and the runtime
// 3. Constructing the single park store for the process
// 4. Reading commands from stdin and printing their output
//
// All store, ordering and validation logic lives in parks-core.
//
// ## Configuration
//
// - `PARKS_SEED`: Seed set loaded at startup (windsor, empty)
// - `PARKS_EVENT_CAPACITY`: Store event channel capacity (1-10000)
// - `PARKS_FEATURE_PREVIEW`: Feature tags shown per park in `list` (1-20)
// - `PARKS_LOG_LEVEL`: trace, debug, info, warn, error
//
// ## Example
//
// ```bash
// export PARKS_LOG_LEVEL=debug
// echo 'add name=Test Park; address=1 Main St; rating=4
// list' | parks
// ```

mod shell;

use anyhow::Result;
use parks_core::{MemoryParkStore, ParksConfig, ParkStore, SeedSet, StoreEvent};
use shell::{Command, HELP, Shell};
use std::env;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_stream::StreamExt;
use tracing::{Level, debug, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum ParksExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<ParksExitCode> for ExitCode {
    fn from(code: ParksExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    seed: String,
    event_capacity: Option<usize>,
    feature_preview: Option<usize>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            seed: env::var("PARKS_SEED").unwrap_or_else(|_| "windsor".to_string()),
            event_capacity: parse_var("PARKS_EVENT_CAPACITY")?,
            feature_preview: parse_var("PARKS_FEATURE_PREVIEW")?,
            log_level: env::var("PARKS_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.event_capacity
            && !(1..=10_000).contains(&capacity)
        {
            anyhow::bail!(
                "PARKS_EVENT_CAPACITY must be between 1 and 10000. Got: {}",
                capacity
            );
        }

        if let Some(preview) = self.feature_preview
            && !(1..=20).contains(&preview)
        {
            anyhow::bail!(
                "PARKS_FEATURE_PREVIEW must be between 1 and 20. Got: {}",
                preview
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "PARKS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    /// Build the library configuration
    fn to_parks_config(&self) -> Result<ParksConfig> {
        let mut config = ParksConfig::new();
        config.store.seed = self.seed.parse::<SeedSet>()?;
        if let Some(capacity) = self.event_capacity {
            config.store.event_channel_capacity = capacity;
        }
        if let Some(preview) = self.feature_preview {
            config.display.feature_preview_limit = preview;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} must be a positive integer. Got: {}", name, value)),
        Err(_) => Ok(None),
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ParksExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return ParksExitCode::ConfigError.into();
    }

    let parks_config = match config.to_parks_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return ParksExitCode::ConfigError.into();
        }
    };

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ParksExitCode::ConfigError.into();
    }

    info!("Starting parks shell (seed: {})", parks_config.store.seed.name());

    // The shell is single-user; one thread is enough.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return ParksExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_shell(parks_config).await {
            error!("Shell error: {}", e);
            ParksExitCode::RuntimeError
        } else {
            ParksExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Run the command loop until EOF, `quit` or Ctrl-C
async fn run_shell(config: ParksConfig) -> Result<()> {
    let store = MemoryParkStore::from_config(&config.store)?;
    info!("Park store ready with {} record(s)", store.len());

    // Observer: log every mutation the way a re-rendering view would see it
    let observer = {
        let mut events = store.watch();
        let store = store.clone();
        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                match &event {
                    StoreEvent::Appended { id } => {
                        info!("Store changed: park {} added, {} total", id, store.len())
                    }
                    StoreEvent::Patched { id } => info!("Store changed: park {} updated", id),
                }
            }
        })
    };

    let shell = Shell::new(store, config.display);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{}\n", HELP).as_bytes()).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C");
                None
            }
        };

        let Some(line) = line else {
            debug!("Input closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let output = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => shell.execute(command),
            Err(message) => message,
        };

        stdout.write_all(output.trim_end().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }

    observer.abort();
    info!("Shutting down parks shell");
    Ok(())
}
