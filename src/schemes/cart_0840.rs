use crate::scheme::*;
use crate::schemes::common::standard::{StandardScheme, ROM_WINDOWS};

// EconoBanking
const LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x0800, 0x0800, HotspotKind::SwitchToBank(S0, 0)).mask(0x1840),
        HotspotWindow::new(0x0840, 0x0840, HotspotKind::SwitchToBank(S0, 1)).mask(0x1840),
    ])
    .build();

pub const CART_0840: StandardScheme = StandardScheme::new(LAYOUT);
