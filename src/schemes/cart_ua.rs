use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS};

// UA Limited. The hotspots sit in TIA/RIOT space, so they are hit by accesses the cartridge
// doesn't serve.
const LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x0220, 0x0220, HotspotKind::SwitchToBank(S0, 0)).mask(0x1260),
        HotspotWindow::new(0x0240, 0x0240, HotspotKind::SwitchToBank(S0, 1)).mask(0x1260),
    ])
    .build();

// Same board, with the hotspots swapped. Found on some Brazilian releases.
const SWAPPED_LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x0220, 0x0220, HotspotKind::SwitchToBank(S0, 1)).mask(0x1260),
        HotspotWindow::new(0x0240, 0x0240, HotspotKind::SwitchToBank(S0, 0)).mask(0x1260),
    ])
    .build();

pub const CART_UA: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_UASW: StandardScheme = StandardScheme::new(SWAPPED_LAYOUT);
