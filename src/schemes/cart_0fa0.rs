use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS};

// Fotomania
const LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x06A0, 0x06A0, HotspotKind::SwitchToBank(S0, 0)).mask(0x16E0),
        HotspotWindow::new(0x06C0, 0x06C0, HotspotKind::SwitchToBank(S0, 1)).mask(0x16E0),
    ])
    .build();

pub const CART_0FA0: StandardScheme = StandardScheme::new(LAYOUT);
