use devhandler::config::LoggingConfig;
use devhandler::{Config, ConsoleLogger, DeviceManager, Error, InputDevice, Result};
use tracing_subscriber::EnvFilter;

const DEMO_INPUTS: [&str; 3] = ["Hola, mundo!", "Java es genial.", ""];

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&logging.level).map_err(|e| Error::Logging(e.to_string()))?,
    };

    // stdout carries the device output; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn main() {
    // A bad config never stops the demo; it is reported and defaults are used.
    let (config, config_err) = match Config::load_default() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("devhandler: {err}; using level {:?}", LoggingConfig::default().level);
        if let Err(err) = init_tracing(&LoggingConfig::default()) {
            eprintln!("devhandler: {err}");
        }
    }
    if let Some(err) = config_err {
        tracing::warn!(error = %err, "ignoring config, using defaults");
    }
    tracing::debug!(?config, "starting");

    let mut device = InputDevice::new(&config.output.device_id);
    let mut manager = DeviceManager::new(&mut device);
    manager.add_listener(ConsoleLogger::stdout(config.output.format));

    for input in DEMO_INPUTS {
        manager.handle_input(input);
    }
}
