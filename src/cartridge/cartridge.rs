use std::fmt;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::memory::raw_memory::RawMemory;
use crate::util::unit::KIBIBYTE;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("Failed to read ROM file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("ROM {0} is empty.")]
    Empty(String),
}

// A ROM image as dumped from a cartridge. Never modified after load.
#[derive(Clone, Debug)]
pub struct Cartridge {
    name: String,
    extension: Option<String>,
    crc32: u32,
    image: RawMemory,
}

impl Cartridge {
    pub fn load(path: &Path) -> Result<Cartridge, CartridgeError> {
        let bytes = std::fs::read(path)
            .map_err(|source| CartridgeError::Io { path: path.display().to_string(), source })?;
        let name = path.file_stem()
            .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned());
        let mut cartridge = Cartridge::from_image(&name, bytes)?;
        cartridge.extension = path.extension().map(|ext| ext.to_string_lossy().into_owned());
        info!("Loaded {cartridge}.");
        Ok(cartridge)
    }

    pub fn from_image(name: &str, bytes: Vec<u8>) -> Result<Cartridge, CartridgeError> {
        if bytes.is_empty() {
            return Err(CartridgeError::Empty(name.to_owned()));
        }

        Ok(Cartridge {
            name: name.to_owned(),
            extension: None,
            crc32: crc32fast::hash(&bytes),
            image: RawMemory::from_vec(bytes),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    pub fn image(&self) -> &RawMemory {
        &self.image
    }

    pub fn size(&self) -> u32 {
        self.image.size()
    }
}

impl fmt::Display for Cartridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        if size % KIBIBYTE == 0 {
            write!(f, "{} ({}KiB, CRC32 {:08X})", self.name, size / KIBIBYTE, self.crc32)
        } else {
            write!(f, "{} ({} bytes, CRC32 {:08X})", self.name, size, self.crc32)
        }
    }
}
