use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS, SUPERCHIP_RAM_SIZE, SUPERCHIP_WINDOWS};

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(4 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .build();

const SUPERCHIP_LAYOUT: Layout = Layout::builder()
    .rom_max_size(4 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(SUPERCHIP_RAM_SIZE)
    .windows(SUPERCHIP_WINDOWS)
    .build();

pub const CART_4K: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_4KSC: StandardScheme = StandardScheme::new(SUPERCHIP_LAYOUT);
