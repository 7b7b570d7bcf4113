use clap::Parser;
use paulmanteaus::core::SearchOutcome;
use paulmanteaus::utils::error::{ErrorSeverity, PortmanteauError};
use paulmanteaus::utils::{logger, validation::Validate};
use paulmanteaus::{
    render_text, CliConfig, DisplayState, HttpFetcher, OutputFormat, PortmanteauSearch,
    SearchScreen, SearchSettings,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match resolve_settings(&config) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    if settings.monitoring {
        tracing::info!("🔍 System monitoring enabled");
    }

    let search = PortmanteauSearch::new(HttpFetcher::new(), settings);
    let screen = SearchScreen::new(search);

    if config.interactive {
        run_interactive(screen, config.format).await?;
    } else {
        screen.trigger(&config.word).await?;
        if let DisplayState::Done(outcome) = screen.current() {
            println!("{}", render(&outcome, config.format)?);
        }
    }

    Ok(())
}

fn resolve_settings(config: &CliConfig) -> paulmanteaus::Result<SearchSettings> {
    let settings = config.settings()?;
    settings.validate()?;
    Ok(settings)
}

fn exit_with(e: PortmanteauError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
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
    std::process::exit(exit_code)
}

fn render(outcome: &SearchOutcome, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(outcome),
        OutputFormat::Json => serde_json::to_string(outcome)?,
    })
}

/// One word per line; every finished search repaints the display.
async fn run_interactive(
    screen: SearchScreen<HttpFetcher, SearchSettings>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut display = screen.subscribe();
    let painter = tokio::spawn(async move {
        while display.changed().await.is_ok() {
            let state = display.borrow_and_update().clone();
            match state {
                DisplayState::Done(outcome) => match render(&outcome, format) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::error!("Could not render result: {}", e),
                },
                DisplayState::InFlight { word } => tracing::debug!("Searching '{}'...", word),
                DisplayState::Idle => {}
            }
        }
    });

    let mut pending = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        pending.push(screen.trigger(&line));
    }

    for handle in pending {
        handle.await?;
    }
    drop(screen);
    painter.await?;
    Ok(())
}
