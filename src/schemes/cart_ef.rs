use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS, SUPERCHIP_RAM_SIZE, SUPERCHIP_WINDOWS};

// Homestar Runner 64K.
const HOTSPOTS: &[HotspotWindow] = &[
    HotspotWindow::new(0x1FE0, 0x1FEF, HotspotKind::SelectRomBank(S0)),
];

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(64 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

const SUPERCHIP_LAYOUT: Layout = Layout::builder()
    .rom_max_size(64 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(SUPERCHIP_RAM_SIZE)
    .windows(SUPERCHIP_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

pub const CART_EF: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_EFSC: StandardScheme = StandardScheme::new(SUPERCHIP_LAYOUT);
