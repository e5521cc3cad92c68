use greet::utils::logger;
use greet::CliConfig;

fn main() {
    let config = CliConfig::parse_verbatim();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    // A failed write is reported but never changes the exit status.
    let stdout = std::io::stdout();
    if let Err(e) = greet::run(&config, &mut stdout.lock()) {
        tracing::error!("❌ {}", e);
    }
}
