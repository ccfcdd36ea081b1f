use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rusqlite::{params, Connection};
use thiserror::Error;
use walkdir::WalkDir;

use crate::cartridge::cartridge::Cartridge;
use crate::cartridge::properties_db::PropertiesDb;
use crate::cartridge::scheme_detector;
use crate::scheme_list::parse_scheme_id;

const ROM_EXTENSIONS: &[&str] = &["a26", "bin", "rom"];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to walk ROM directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Cartridge database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnalyzedRom {
    pub name: String,
    pub path: PathBuf,
    pub size: u32,
    pub crc32: u32,
    // None if no scheme could be determined.
    pub scheme: Option<String>,
    pub source: String,
}

// Detects the scheme of every ROM under rom_base_path. The results come back sorted by
// scheme, then by name. Unreadable ROMs are logged and skipped.
pub fn analyze(rom_base_path: &Path, properties: &PropertiesDb) -> Result<Vec<AnalyzedRom>, AnalysisError> {
    let mut rom_paths = BTreeSet::new();
    for entry in WalkDir::new(rom_base_path) {
        let path = entry?.into_path();
        if path.is_file() && is_rom_path(&path) {
            rom_paths.insert(path);
        }
    }

    let connection = Connection::open_in_memory()?;
    connection.execute(
        "CREATE TABLE cartridges (
            name TEXT NOT NULL,
            path TEXT NOT NULL,
            size INTEGER NOT NULL,
            crc32 INTEGER NOT NULL,
            scheme TEXT,
            source TEXT NOT NULL
        )",
        [],
    )?;

    for rom_path in rom_paths {
        let cartridge = match Cartridge::load(&rom_path) {
            Ok(cartridge) => cartridge,
            Err(err) => {
                warn!("Skipping {}: {err}", rom_path.display());
                continue;
            }
        };

        let (scheme, source) = match scheme_detector::detect(&cartridge, properties) {
            Ok(detection) => (Some(detection.scheme_id.to_string()), detection.source.to_string()),
            Err(err) => (None, err.to_string()),
        };

        connection.execute(
            "INSERT INTO cartridges VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                cartridge.name(),
                rom_path.to_string_lossy(),
                cartridge.size(),
                cartridge.crc32(),
                scheme,
                source,
            ],
        )?;
    }

    let mut select = connection.prepare(
        "SELECT name, path, size, crc32, scheme, source FROM cartridges
         ORDER BY scheme IS NULL, scheme ASC, name ASC",
    )?;
    let rows = select.query_map([], |row| {
        Ok(AnalyzedRom {
            name: row.get("name")?,
            path: PathBuf::from(row.get::<_, String>("path")?),
            size: row.get("size")?,
            crc32: row.get("crc32")?,
            scheme: row.get("scheme")?,
            source: row.get("source")?,
        })
    })?;

    let mut analyzed = Vec::new();
    for row in rows {
        let rom = row?;
        info!("{:<8} {:08X} {:>7} {} ({})",
            rom.scheme.as_deref().unwrap_or("UNKNOWN"),
            rom.crc32,
            rom.size,
            rom.name,
            rom.source,
        );
        analyzed.push(rom);
    }

    Ok(analyzed)
}

fn is_rom_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| {
            ROM_EXTENSIONS.iter().any(|rom_ext| ext.eq_ignore_ascii_case(rom_ext))
                || parse_scheme_id(&ext).is_ok()
        })
}
