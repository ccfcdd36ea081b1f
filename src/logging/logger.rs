use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = if logger.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(max_level))
}

#[derive(Clone, Copy, Default, Debug)]
pub struct Logger {
    pub verbose: bool,
    pub log_bank_switches: bool,
    pub log_hotspots: bool,
    pub log_save_states: bool,
    pub log_detection: bool,
    pub log_bus: bool,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.target() {
            "" => true,
            "bankswitch" => self.log_bank_switches,
            "hotspots" => self.log_hotspots,
            "savestate" => self.log_save_states,
            "detection" => self.log_detection,
            "bus" => self.log_bus,
            target => {
                let chunks: Vec<&str> = target.split("::").collect();
                matches!(chunks[..], ["vcsbank", ..])
            }
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() < Level::Info {
                print!("{} - ", record.level());
            }

            match record.target() {
                "bankswitch" => print!("BANK "),
                "hotspots" => print!("HOTSPOT "),
                "savestate" => print!("STATE "),
                _ => {}
            }

            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}
