use tracelog::error_trace;
use tracelog::logger::*;
use tracelog::settings::*;
use tracelog::{log_debug, log_error, log_info, log_warn};

error_trace! {
    /// Integer division; a zero divisor is logged instead of crashing the demo.
    fn divide(a: i32, b: i32) -> i32 {
        a / b
    }
}

error_trace! {
    fn parse_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
        raw.parse()
    }
}

fn save_state(logger: &ModuleLogger) {
    log_error!(logger, "disk full");
}

fn main() -> anyhow::Result<()> {
    // $ cargo run --bin logger_demo -- --settings=settings/dev.toml
    let cli = Cli::parse();
    let console = ConsoleLogger::new_bootstrap()?;

    let settings = parse_settings(cli.settings.as_deref()).unwrap_or_default();
    console.reload_from_config(&settings.log)?;
    info!(?settings, "loaded settings");

    let logger = ModuleLogger::with_config(file!(), &settings.log)?;
    log_debug!(logger, "writing to {}", settings.log.file.display());
    log_info!(logger, "logger {} has {} handler(s)", logger.name(), logger.handler_count());
    save_state(&logger);

    // Same base name: every record below is written twice unless handlers are deduplicated.
    let again = ModuleLogger::with_config("elsewhere/logger_demo.rs", &settings.log)?;
    log_warn!(again, "handlers attached: {}", again.handler_count());

    println!("divide(8, 2) = {:?}", divide(8, 2));
    println!("divide(4, 0) = {:?}", divide(4, 0));
    println!("parse_port(\"80\") = {:?}", parse_port("80"));
    println!("parse_port(\"http\") = {:?}", parse_port("http"));

    Ok(())
}
