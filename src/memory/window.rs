use crate::memory::bank::bank::Bank;
use crate::memory::cart_address::CartAddress;

// A Window is a range within the cartridge's address space, backed by a single Bank.
// If the bank is smaller than the window, the bank is mirrored across it.
// Windows may overlap, in which case the first one listed in the Layout wins.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Window {
    start: u16,
    end: u16,
    bank: Bank,
}

impl Window {
    pub const fn new(start: u16, end: u16, size: u32, bank: Bank) -> Window {
        assert!(end > start);
        let actual_size = end as u32 - start as u32 + 1;
        assert!(actual_size == size);
        assert!(size.is_power_of_two(), "Window sizes must be powers of two.");

        Window { start, end, bank }
    }

    pub fn size(self) -> u32 {
        u32::from(self.end) - u32::from(self.start) + 1
    }

    pub fn bank(self) -> Bank {
        self.bank
    }

    pub fn contains(self, address: CartAddress) -> bool {
        (self.start..=self.end).contains(&address.to_raw())
    }

    pub fn offset(self, address: CartAddress) -> u32 {
        u32::from(address.to_raw()) & (self.size() - 1)
    }
}
