pub mod analysis;
pub mod bus;
pub mod cartridge;
pub mod config;
pub mod logging;
pub mod memory;
pub mod savestate;
pub mod scheme;
pub mod scheme_list;
pub mod schemes;
pub mod trace;
pub mod util;
