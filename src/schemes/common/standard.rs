use crate::scheme::*;

// The whole cartridge space as one switchable 4K window.
pub const ROM_WINDOWS: &[Window] = &[
    Window::new(0x1000, 0x1FFF, 4 * KIBIBYTE, Bank::ROM.switchable(S0)),
];

// Superchip: 128 bytes of RAM in front of the first 256 bytes of ROM.
pub const SUPERCHIP_RAM_SIZE: u32 = 128;
pub const SUPERCHIP_WINDOWS: &[Window] = &[
    Window::new(0x1000, 0x107F, 128, Bank::RAM_WRITE.fixed_index(0)),
    Window::new(0x1080, 0x10FF, 128, Bank::RAM_READ.fixed_index(0)),
    Window::new(0x1000, 0x1FFF, 4 * KIBIBYTE, Bank::ROM.switchable(S0)),
];

// A scheme whose hotspots are fully described by its Layout.
#[derive(Clone, Copy)]
pub struct StandardScheme {
    layout: Layout,
}

impl Scheme for StandardScheme {
    fn layout(&self) -> Layout {
        self.layout
    }
}

impl StandardScheme {
    pub const fn new(layout: Layout) -> StandardScheme {
        StandardScheme { layout }
    }
}
