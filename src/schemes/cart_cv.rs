use crate::scheme::*;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(4 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .ram_size(1 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x13FF, 1 * KIBIBYTE, Bank::RAM_READ.fixed_index(0)),
        Window::new(0x1400, 0x17FF, 1 * KIBIBYTE, Bank::RAM_WRITE.fixed_index(0)),
        Window::new(0x1800, 0x1FFF, 2 * KIBIBYTE, Bank::ROM.fixed_index(0)),
    ])
    .build();

// Commavid. No bank switching, just 1K of RAM under a 2K ROM.
#[derive(Clone, Copy)]
pub struct CartCv;

impl Scheme for CartCv {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    // 4K dumps hold the initial RAM contents in their first 1K and the ROM in their last 2K.
    fn rom_and_ram_init(&self, image: &RawMemory) -> (RawMemory, Option<RawMemory>) {
        if image.size() == 4 * KIBIBYTE {
            (image.slice(2 * KIBIBYTE..4 * KIBIBYTE), Some(image.slice(0..KIBIBYTE)))
        } else {
            (image.clone(), None)
        }
    }
}
