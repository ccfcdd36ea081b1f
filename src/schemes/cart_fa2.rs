use crate::scheme::*;
use crate::schemes::cart_fa::{FA_RAM_SIZE, FA_WINDOWS};

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(28 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .ram_size(FA_RAM_SIZE)
    .windows(FA_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x1FF5, 0x1FFB, HotspotKind::SelectRomBank(S0)),
    ])
    .start_bank(S0, -1)
    .build();

// Some dumps carry 1K of Harmony cartridge firmware in front of the 28K game.
const HARMONY_DUMP_SIZE: u32 = 29 * KIBIBYTE;

// CBS RAM Plus, extended to 24K or 28K.
#[derive(Clone, Copy)]
pub struct CartFa2;

impl Scheme for CartFa2 {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn rom_and_ram_init(&self, image: &RawMemory) -> (RawMemory, Option<RawMemory>) {
        if image.size() == HARMONY_DUMP_SIZE {
            (image.slice(KIBIBYTE..HARMONY_DUMP_SIZE), None)
        } else {
            (image.clone(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmony_dumps_drop_their_first_kibibyte() {
        let mut bytes = vec![0xEE; KIBIBYTE as usize];
        bytes.extend(vec![0x11; 28 * KIBIBYTE as usize]);
        let (rom, ram) = CartFa2.rom_and_ram_init(&RawMemory::from_vec(bytes));
        assert_eq!(rom.size(), 28 * KIBIBYTE);
        assert!(rom.as_slice().iter().all(|&b| b == 0x11));
        assert!(ram.is_none());
    }

    #[test]
    fn normal_images_are_kept() {
        let image = RawMemory::new(24 * KIBIBYTE);
        let (rom, _) = CartFa2.rom_and_ram_init(&image);
        assert_eq!(rom, image);
    }
}
