use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS, SUPERCHIP_RAM_SIZE, SUPERCHIP_WINDOWS};

// 128K, 32 banks. Used by homebrew that outgrew EF.
const HOTSPOTS: &[HotspotWindow] = &[
    HotspotWindow::new(0x1FC0, 0x1FDF, HotspotKind::SelectRomBank(S0)),
];

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(128 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

const SUPERCHIP_LAYOUT: Layout = Layout::builder()
    .rom_max_size(128 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(SUPERCHIP_RAM_SIZE)
    .windows(SUPERCHIP_WINDOWS)
    .hotspots(HOTSPOTS)
    .start_bank(S0, -1)
    .build();

pub const CART_DF: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_DFSC: StandardScheme = StandardScheme::new(SUPERCHIP_LAYOUT);
