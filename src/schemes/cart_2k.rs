use crate::scheme::*;
use crate::schemes::common::standard::StandardScheme;

// A 2K image shows up twice in the 4K cartridge space.
const LAYOUT: Layout = Layout::builder()
    .rom_max_size(2 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x1FFF, 4 * KIBIBYTE, Bank::ROM.fixed_index(0)),
    ])
    .build();

pub const CART_2K: StandardScheme = StandardScheme::new(LAYOUT);
