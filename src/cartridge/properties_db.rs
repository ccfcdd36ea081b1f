use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::scheme_list::{parse_scheme_id, SchemeId};

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("Failed to read properties file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Malformed properties XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Properties entry {line}: missing '{attribute}' attribute.")]
    MissingAttribute { line: u32, attribute: &'static str },
    #[error("Properties entry {line}: invalid CRC32 '{value}'.")]
    BadCrc32 { line: u32, value: String },
}

// User-supplied overrides for cartridges that can't be identified by their contents.
//
//   <properties>
//     <cart name="Pitfall!" crc32="6B7F2F2F" type="4K"/>
//   </properties>
#[derive(Clone, Default, Debug)]
pub struct PropertiesDb {
    scheme_by_crc32: BTreeMap<u32, SchemeId>,
}

impl PropertiesDb {
    pub fn empty() -> PropertiesDb {
        PropertiesDb::default()
    }

    pub fn load(path: &Path) -> Result<PropertiesDb, PropertiesError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| PropertiesError::Io { path: path.display().to_string(), source })?;
        PropertiesDb::parse(&text)
    }

    // Entries with an unknown type are skipped with a warning rather than failing the whole file.
    pub fn parse(text: &str) -> Result<PropertiesDb, PropertiesError> {
        let doc = roxmltree::Document::parse(text)?;
        let carts = doc.root().descendants().filter(|n| n.tag_name().name() == "cart");

        let mut db = PropertiesDb::default();
        for cart in carts {
            let line = doc.text_pos_at(cart.range().start).row;
            let crc32_text = read_attribute(cart, "crc32", line)?;
            let crc32 = u32::from_str_radix(crc32_text.trim_start_matches("0x"), 16)
                .map_err(|_| PropertiesError::BadCrc32 { line, value: crc32_text.to_owned() })?;
            let tag = read_attribute(cart, "type", line)?;

            match parse_scheme_id(tag) {
                Ok(scheme_id) => {
                    db.scheme_by_crc32.insert(crc32, scheme_id);
                }
                Err(err) => warn!("Skipping properties entry {line}: {err}"),
            }
        }

        Ok(db)
    }

    pub fn scheme_for(&self, crc32: u32) -> Option<SchemeId> {
        self.scheme_by_crc32.get(&crc32).copied()
    }

    pub fn len(&self) -> usize {
        self.scheme_by_crc32.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheme_by_crc32.is_empty()
    }
}

fn read_attribute<'a>(
    node: roxmltree::Node<'a, 'a>,
    attribute: &'static str,
    line: u32,
) -> Result<&'a str, PropertiesError> {
    node.attribute(attribute)
        .ok_or(PropertiesError::MissingAttribute { line, attribute })
}
