use crate::scheme::*;
use crate::schemes::common::standard::StandardScheme;

// CBS RAM Plus: three 4K banks and 256 bytes of RAM.
pub const FA_RAM_SIZE: u32 = 256;
pub const FA_WINDOWS: &[Window] = &[
    Window::new(0x1000, 0x10FF, 256, Bank::RAM_WRITE.fixed_index(0)),
    Window::new(0x1100, 0x11FF, 256, Bank::RAM_READ.fixed_index(0)),
    Window::new(0x1000, 0x1FFF, 4 * KIBIBYTE, Bank::ROM.switchable(S0)),
];

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(12 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(FA_RAM_SIZE)
    .windows(FA_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x1FF8, 0x1FFA, HotspotKind::SelectRomBank(S0)),
    ])
    .start_bank(S0, -1)
    .build();

pub const CART_FA: StandardScheme = StandardScheme::new(LAYOUT);
