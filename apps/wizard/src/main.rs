mod console;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use console::{ConsoleFrontend, TableSetup};
use tracing::{error, info};
use wizard::players::registry::{by_name, registered_strategies};
use wizard::telemetry::init_tracing;
use wizard::{EngineError, GameConfig, WizardEngine};

#[derive(Parser)]
#[command(name = "wizard")]
#[command(about = "Play the Wizard trick-taking card game in the terminal")]
struct Args {
    /// Your name at the table
    #[arg(short, long, default_value = "You")]
    name: String,

    /// Number of computer opponents
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=5))]
    computers: u8,

    /// Strategy for computer players
    #[arg(long, env = "WIZARD_STRATEGY", default_value = "computer")]
    strategy: String,

    /// Game seed for a reproducible deal sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after announcing each deal, in milliseconds
    #[arg(long)]
    deal_pause_ms: Option<u64>,

    /// Seat only computers and watch them play
    #[arg(long)]
    watch: bool,

    /// Write the final game record as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// List computer strategies and exit
    #[arg(long)]
    list_strategies: bool,
}

#[tokio::main]
async fn main() -> Result<(), EngineError> {
    let args = Args::parse();
    init_tracing("warn", args.log_json);

    if args.list_strategies {
        for factory in registered_strategies() {
            println!("{:<10} {}", factory.name, factory.description);
        }
        return Ok(());
    }
    if by_name(&args.strategy).is_none() {
        return Err(EngineError::config(format!(
            "unknown strategy '{}', try --list-strategies",
            args.strategy
        )));
    }

    let mut config = GameConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ms) = args.deal_pause_ms {
        config.deal_pause = Duration::from_millis(ms);
    }

    let setup = TableSetup {
        human: (!args.watch).then(|| args.name.clone()),
        computers: if args.watch { args.computers + 1 } else { args.computers },
        strategy: args.strategy.clone(),
        seed: config.seed,
    };
    info!(?setup, "Table setup");

    let engine = WizardEngine::new(Arc::new(ConsoleFrontend::new(setup)), config);
    let outcome = engine
        .spawn()
        .await
        .map_err(|e| EngineError::runtime(format!("engine task failed: {e}")))?;

    let ctx = match outcome {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Game aborted");
            return Err(e);
        }
    };

    if let Some(path) = args.export {
        let json = serde_json::to_string_pretty(&ctx)
            .map_err(|e| EngineError::runtime(format!("serializing game record: {e}")))?;
        std::fs::write(&path, json).map_err(|e| {
            EngineError::runtime(format!("writing {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "Game record exported");
    }
    Ok(())
}
