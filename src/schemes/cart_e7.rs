use crate::scheme::*;
use crate::schemes::common::standard::StandardScheme;

// M-Network: a 2K slot that can hold ROM or 1K of RAM, a slot for one of four 256 byte RAM
// banks, and the tail of the last ROM bank.
const WINDOWS: &[Window] = &[
    Window::new(0x1000, 0x13FF, 1 * KIBIBYTE, Bank::ROM_OR_RAM_WRITE.switchable(S0)),
    Window::new(0x1400, 0x17FF, 1 * KIBIBYTE, Bank::ROM_OR_RAM_READ.switchable(S0)),
    Window::new(0x1800, 0x18FF, 256, Bank::RAM_WRITE.switchable(S1).ram_base(1 * KIBIBYTE)),
    Window::new(0x1900, 0x19FF, 256, Bank::RAM_READ.switchable(S1).ram_base(1 * KIBIBYTE)),
    Window::new(0x1800, 0x1FFF, 2 * KIBIBYTE, Bank::ROM.fixed_index(-1)),
];

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(16 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .ram_size(2 * KIBIBYTE)
    .windows(WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x1FE0, 0x1FE6, HotspotKind::SelectRomBank(S0)),
        HotspotWindow::new(0x1FE7, 0x1FE7, HotspotKind::SelectRamBank(S0)),
        HotspotWindow::new(0x1FE8, 0x1FEB, HotspotKind::SelectRamBank(S1)),
    ])
    .start_ram_bank(S1, 0)
    .build();

// The 8K variant only has four ROM banks, so its ROM hotspots start higher up.
const LAYOUT_8K: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .ram_size(2 * KIBIBYTE)
    .windows(WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x1FE4, 0x1FE6, HotspotKind::SelectRomBank(S0)),
        HotspotWindow::new(0x1FE7, 0x1FE7, HotspotKind::SelectRamBank(S0)),
        HotspotWindow::new(0x1FE8, 0x1FEB, HotspotKind::SelectRamBank(S1)),
    ])
    .start_ram_bank(S1, 0)
    .build();

pub const CART_E7: StandardScheme = StandardScheme::new(LAYOUT);
pub const CART_E78K: StandardScheme = StandardScheme::new(LAYOUT_8K);
