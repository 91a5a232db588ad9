use clap::Parser;
use numkit::adapters::prompt::LinePrompter;
use numkit::app::interactive::run_interactive;
use numkit::app::report::{render_json, render_text};
use numkit::utils::error::{ErrorSeverity, ToolkitError};
use numkit::utils::{logger, validation::Validate};
use numkit::{CliConfig, Command, Toolkit, ToolkitConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match ToolkitConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let verbose = cli.verbose || config.logging.verbose;
    if cli.json || config.logging.json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let toolkit = Toolkit::new(config);

    if cli.command == Command::Interactive {
        let stdin = std::io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
        run_interactive(&toolkit, &mut prompter)?;
        return Ok(());
    }

    match toolkit.execute(&cli.command) {
        Ok(outcome) => {
            let rendered = if cli.json {
                render_json(&outcome)?
            } else {
                render_text(&outcome, &toolkit.report_style())
            };
            println!("{}", rendered);
        }
        Err(e) => {
            tracing::error!(
                "❌ {:?} failed: {} (Category: {:?}, Severity: {:?})",
                cli.command,
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

fn exit_code(e: &ToolkitError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
