use std::path::Path;
use std::str::FromStr;

use log::info;
use thiserror::Error;

use crate::bus::{CartridgeBus, CartridgePort};
use crate::memory::cart_address::CartAddress;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to read trace file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Trace line {line}: {message}")]
    Parse { line: usize, message: String },
}

// One bus access from a trace file.
//
//   # Select bank 4 then read from it.
//   R $1804
//   W 1000 7F
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TraceStep {
    Read(u16),
    Write(u16, u8),
}

impl FromStr for TraceStep {
    type Err = String;

    fn from_str(line: &str) -> Result<TraceStep, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[..] {
            [kind, address] if kind.eq_ignore_ascii_case("R") => Ok(TraceStep::Read(parse_address(address)?)),
            [kind, address, value] if kind.eq_ignore_ascii_case("W") =>
                Ok(TraceStep::Write(parse_address(address)?, parse_value(value)?)),
            [kind, ..] if kind.eq_ignore_ascii_case("R") => Err("R takes exactly one address.".to_owned()),
            [kind, ..] if kind.eq_ignore_ascii_case("W") => Err("W takes an address and a value.".to_owned()),
            _ => Err(format!("Expected 'R <address>' or 'W <address> <value>', found '{line}'.")),
        }
    }
}

fn parse_address(text: &str) -> Result<u16, String> {
    text.parse::<CartAddress>().map(CartAddress::to_raw)
}

fn parse_value(text: &str) -> Result<u8, String> {
    u8::from_str_radix(strip_hex_prefix(text), 16)
        .map_err(|_| format!("Invalid value '{text}'."))
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .unwrap_or(text)
}

pub fn load_trace(path: &Path) -> Result<Vec<TraceStep>, TraceError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| TraceError::Io { path: path.display().to_string(), source })?;
    parse_trace(&text)
}

pub fn parse_trace(text: &str) -> Result<Vec<TraceStep>, TraceError> {
    let mut steps = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let step = line.parse()
            .map_err(|message| TraceError::Parse { line: index + 1, message })?;
        steps.push(step);
    }

    Ok(steps)
}

// Returns the number of steps that changed the mapped banks.
pub fn run_trace(port: &mut CartridgePort, steps: &[TraceStep]) -> usize {
    let mut bank_changes = 0;
    let mut banks = port.bank_string();
    for step in steps {
        let description = match *step {
            TraceStep::Read(address) => {
                let value = port.peek(address);
                format!("R {} = ${value:02X}", CartAddress::new(address))
            }
            TraceStep::Write(address, value) => {
                port.poke(address, value);
                format!("W {} ${value:02X}", CartAddress::new(address))
            }
        };

        let new_banks = port.bank_string();
        if new_banks != banks {
            info!("{description}: banks {banks} -> {new_banks}");
            bank_changes += 1;
            banks = new_banks;
        }
    }

    bank_changes
}
