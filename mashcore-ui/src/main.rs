mod panes;
mod runtime;
mod ui;

use std::fs::File;

use ui::RatatuiBackend;

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mashcore")
        .join("mashcore.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = File::create(&log_path)
        .unwrap_or_else(|_| File::create("/tmp/mashcore.log").expect("Cannot create log file"));

    WriteLogger::init(log_level, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("mashcore starting (log level: {:?})", log_level);
}

fn main() -> std::io::Result<()> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = runtime::run(&mut backend);

    backend.stop()?;
    result
}
