pub mod bank;
pub mod bank_index;
