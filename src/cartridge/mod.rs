pub mod cartridge;
pub mod properties_db;
pub mod scheme_detector;
