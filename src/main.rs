use std::path::Path;

use log::{error, info};
use structopt::StructOpt;
use thiserror::Error;

use vcsbank::analysis::cartridge_db::{self, AnalysisError};
use vcsbank::bus::CartridgePort;
use vcsbank::cartridge::cartridge::{Cartridge, CartridgeError};
use vcsbank::cartridge::scheme_detector;
use vcsbank::config::{Config, ConfigError, Opt};
use vcsbank::logging::logger;
use vcsbank::savestate::CorruptStateError;
use vcsbank::scheme_list::LookupError;
use vcsbank::trace::{self, TraceError};

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Cartridge(#[from] CartridgeError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error(transparent)]
    CorruptState(#[from] CorruptStateError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("Failed to access save state {path}: {source}")]
    StateFile { path: String, source: std::io::Error },
}

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = logger::init(opt.logger()) {
        eprintln!("Failed to initialize logging: {err}");
    }

    if let Err(err) = run(&opt) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), RunError> {
    let config = Config::new(opt)?;
    if config.rom_path().is_dir() {
        let analyzed = cartridge_db::analyze(config.rom_path(), config.properties())?;
        let unknown = analyzed.iter().filter(|rom| rom.scheme.is_none()).count();
        info!("Analyzed {} ROMs, {unknown} of unknown type.", analyzed.len());
        return Ok(());
    }

    let cartridge = Cartridge::load(config.rom_path())?;
    let scheme_id = match config.scheme_override() {
        Some(scheme_id) => scheme_id,
        None => scheme_detector::detect(&cartridge, config.properties())?.scheme_id,
    };

    let mut port = CartridgePort::insert(&cartridge, scheme_id)?;
    if let Some(path) = config.load_state_path() {
        port.load_state(&read_state(path)?)?;
    }

    if let Some(path) = config.trace_path() {
        let steps = trace::load_trace(path)?;
        let bank_changes = trace::run_trace(&mut port, &steps);
        info!("Replayed {} accesses, {bank_changes} of which changed banks.", steps.len());
    }

    if let Some(path) = config.save_state_path() {
        std::fs::write(path, port.save_state())
            .map_err(|source| RunError::StateFile { path: path.display().to_string(), source })?;
    }

    info!("{} banks: {}{}",
        port.scheme_id(),
        port.bank_string(),
        if port.banking_locked() { " (locked)" } else { "" },
    );
    Ok(())
}

fn read_state(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path)
        .map_err(|source| RunError::StateFile { path: path.display().to_string(), source })
}
