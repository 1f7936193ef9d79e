use anyhow::Context;
use bestiary::utils::logger::{self, LogFormat};
use bestiary::{CliConfig, Creature, Demo};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_flag(config.log_json));

    tracing::debug!("CLI config: {:?}", config);

    let roster = match config.load_roster() {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!(
                "❌ Roster could not be loaded: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let demo = Demo::from_roster(&roster);
    tracing::debug!(
        chorus = demo.chorus().count(),
        featured = demo.featured().name(),
        "Roster ready"
    );

    if config.verbose {
        // The bare animal stays out of the sound round; show what would happen.
        if let Err(e) = demo.probe_abstract() {
            tracing::debug!("Skipping abstract animal: {}", e);
        }
    }

    let report = match demo.run() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Demo failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let output = if config.json {
        let mut json = report.to_json()?;
        json.push('\n');
        json
    } else {
        report.to_text()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(output.as_bytes())
        .context("failed to write report to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
