use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS, SUPERCHIP_RAM_SIZE, SUPERCHIP_WINDOWS};

// Atari 16K.
const HOTSPOTS: &[HotspotWindow] = &[
    HotspotWindow::new(0x1FF6, 0x1FF9, HotspotKind::SelectRomBank(S0)),
];

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(16 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

const SUPERCHIP_LAYOUT: Layout = Layout::builder()
    .rom_max_size(16 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(SUPERCHIP_RAM_SIZE)
    .windows(SUPERCHIP_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

pub const CART_F6: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_F6SC: StandardScheme = StandardScheme::new(SUPERCHIP_LAYOUT);
