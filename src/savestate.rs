// Save state format (little-endian):
//   [0..4]   Magic: "VCSB"
//   [4..6]   Version: u16
//   [6..]    Scheme tag: u32 length, then UTF-8 bytes
//            Image CRC32: u32 (a state only loads into the image it was taken from)
//            Payload length: u32
//            Payload: bank table fields, data bus, then the scheme's own fields (length-prefixed)
use thiserror::Error;

const MAGIC: &[u8; 4] = b"VCSB";
pub const VERSION: u16 = 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CorruptStateError {
    #[error("Not a save state (bad magic bytes).")]
    BadMagic,
    #[error("Unsupported save state version {0}, expected {VERSION}.")]
    UnsupportedVersion(u16),
    #[error("Save state is for cartridge type {found}, but a {expected} cartridge is inserted.")]
    SchemeMismatch { expected: String, found: String },
    #[error("Save state is for image {found:08X}, but image {expected:08X} is inserted.")]
    ImageMismatch { expected: u32, found: u32 },
    #[error("Save state is truncated: needed {needed} bytes at offset {offset}.")]
    Truncated { offset: usize, needed: usize },
    #[error("Save state has {0} unexpected trailing bytes.")]
    TrailingBytes(usize),
    #[error("Save state field '{field}' has invalid value {value}.")]
    InvalidValue { field: &'static str, value: u32 },
}

pub struct StateWriter {
    buf: Vec<u8>,
}

impl StateWriter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub fn write_len_prefixed(&mut self, data: &[u8]) {
        self.write_u32(data.len() as u32);
        self.write_bytes(data);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for StateWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StateReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> StateReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CorruptStateError> {
        let end = self.pos.checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(CorruptStateError::Truncated { offset: self.pos, needed: len })?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CorruptStateError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CorruptStateError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, CorruptStateError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    // Anything other than 0 or 1 means the state is malformed.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, CorruptStateError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(CorruptStateError::InvalidValue { field, value: u32::from(value) }),
        }
    }

    pub fn read_len_prefixed(&mut self) -> Result<&'a [u8], CorruptStateError> {
        let len = self.read_u32()?;
        self.read_bytes(len as usize)
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    // Every byte that was written must be consumed.
    pub fn finish(&self) -> Result<(), CorruptStateError> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(CorruptStateError::TrailingBytes(extra)),
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct StateFile<'a> {
    pub scheme_tag: String,
    pub image_crc32: u32,
    pub payload: &'a [u8],
}

pub fn encode(scheme_tag: &str, image_crc32: u32, payload: &[u8]) -> Vec<u8> {
    let mut w = StateWriter::new();
    w.write_bytes(MAGIC);
    w.write_u16(VERSION);
    w.write_len_prefixed(scheme_tag.as_bytes());
    w.write_u32(image_crc32);
    w.write_len_prefixed(payload);
    w.into_bytes()
}

pub fn decode(bytes: &[u8]) -> Result<StateFile<'_>, CorruptStateError> {
    let mut r = StateReader::new(bytes);
    if r.read_bytes(MAGIC.len()).map_err(|_| CorruptStateError::BadMagic)? != MAGIC {
        return Err(CorruptStateError::BadMagic);
    }

    let version = r.read_u16()?;
    if version != VERSION {
        return Err(CorruptStateError::UnsupportedVersion(version));
    }

    let tag_bytes = r.read_len_prefixed()?;
    let scheme_tag = String::from_utf8(tag_bytes.to_vec())
        .map_err(|_| CorruptStateError::InvalidValue { field: "scheme tag", value: tag_bytes.len() as u32 })?;
    let image_crc32 = r.read_u32()?;
    let payload = r.read_len_prefixed()?;
    r.finish()?;

    Ok(StateFile { scheme_tag, image_crc32, payload })
}
