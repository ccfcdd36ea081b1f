use crate::scheme::*;
use crate::schemes::common::standard::StandardScheme;

// Parker Brothers: four 1K slots, the last one always showing the last bank.
const LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(1 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x13FF, 1 * KIBIBYTE, Bank::ROM.switchable(S0)),
        Window::new(0x1400, 0x17FF, 1 * KIBIBYTE, Bank::ROM.switchable(S1)),
        Window::new(0x1800, 0x1BFF, 1 * KIBIBYTE, Bank::ROM.switchable(S2)),
        Window::new(0x1C00, 0x1FFF, 1 * KIBIBYTE, Bank::ROM.fixed_index(-1)),
    ])
    .hotspots(&[
        HotspotWindow::new(0x1FE0, 0x1FE7, HotspotKind::SelectRomBank(S0)),
        HotspotWindow::new(0x1FE8, 0x1FEF, HotspotKind::SelectRomBank(S1)),
        HotspotWindow::new(0x1FF0, 0x1FF7, HotspotKind::SelectRomBank(S2)),
    ])
    .start_bank(S0, 4)
    .start_bank(S1, 5)
    .start_bank(S2, 6)
    .build();

pub const CART_E0: StandardScheme = StandardScheme::new(LAYOUT);
