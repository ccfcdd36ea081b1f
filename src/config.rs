use std::path::{Path, PathBuf};

use structopt::StructOpt;
use thiserror::Error;

use crate::cartridge::properties_db::{PropertiesDb, PropertiesError};
use crate::logging::logger::Logger;
use crate::scheme_list::{parse_scheme_id, LookupError, SchemeId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Properties(#[from] PropertiesError),
    #[error(transparent)]
    Scheme(#[from] LookupError),
}

pub struct Config {
    rom_path: PathBuf,
    scheme_override: Option<SchemeId>,
    properties: PropertiesDb,
    trace_path: Option<PathBuf>,
    save_state_path: Option<PathBuf>,
    load_state_path: Option<PathBuf>,
}

impl Config {
    pub fn new(opt: &Opt) -> Result<Config, ConfigError> {
        let properties = match &opt.properties {
            Some(path) => PropertiesDb::load(path)?,
            None => PropertiesDb::empty(),
        };

        let scheme_override = opt.scheme.as_deref()
            .map(parse_scheme_id)
            .transpose()?;

        Ok(Config {
            rom_path: opt.rom_path.clone(),
            scheme_override,
            properties,
            trace_path: opt.trace.clone(),
            save_state_path: opt.save_state.clone(),
            load_state_path: opt.load_state.clone(),
        })
    }

    pub fn rom_path(&self) -> &Path {
        &self.rom_path
    }

    pub fn scheme_override(&self) -> Option<SchemeId> {
        self.scheme_override
    }

    pub fn properties(&self) -> &PropertiesDb {
        &self.properties
    }

    pub fn trace_path(&self) -> Option<&Path> {
        self.trace_path.as_deref()
    }

    pub fn save_state_path(&self) -> Option<&Path> {
        self.save_state_path.as_deref()
    }

    pub fn load_state_path(&self) -> Option<&Path> {
        self.load_state_path.as_deref()
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "VCSBANK", about = "Atari 2600 cartridge bank-switching emulation.")]
pub struct Opt {
    /// A ROM image, or a directory of them to analyze.
    #[structopt(name = "ROM", parse(from_os_str))]
    pub rom_path: PathBuf,

    /// Cartridge type tag (e.g. F8, 3E, TVBOY), skipping detection.
    #[structopt(short, long)]
    pub scheme: Option<String>,

    #[structopt(long, parse(from_os_str))]
    pub properties: Option<PathBuf>,

    /// Bus accesses to replay against the cartridge.
    #[structopt(short, long, parse(from_os_str))]
    pub trace: Option<PathBuf>,

    #[structopt(long, parse(from_os_str))]
    pub save_state: Option<PathBuf>,

    #[structopt(long, parse(from_os_str))]
    pub load_state: Option<PathBuf>,

    #[structopt(short, long)]
    pub verbose: bool,

    #[structopt(long)]
    pub log_bank_switches: bool,

    #[structopt(long)]
    pub log_hotspots: bool,

    #[structopt(long)]
    pub log_save_states: bool,

    #[structopt(long)]
    pub log_detection: bool,

    #[structopt(long)]
    pub log_bus: bool,
}

impl Opt {
    pub fn new(rom_path: PathBuf) -> Opt {
        Opt {
            rom_path,
            scheme: None,
            properties: None,
            trace: None,
            save_state: None,
            load_state: None,
            verbose: false,
            log_bank_switches: false,
            log_hotspots: false,
            log_save_states: false,
            log_detection: false,
            log_bus: false,
        }
    }

    pub fn logger(&self) -> Logger {
        Logger {
            verbose: self.verbose,
            log_bank_switches: self.log_bank_switches,
            log_hotspots: self.log_hotspots,
            log_save_states: self.log_save_states,
            log_detection: self.log_detection,
            log_bus: self.log_bus,
        }
    }
}
