pub mod bank;
pub mod bank_table;
pub mod cart_address;
pub mod hotspot;
pub mod layout;
pub mod raw_memory;
pub mod read_result;
pub mod window;
