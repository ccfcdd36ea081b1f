use std::fmt;

use num_derive::FromPrimitive;

pub const SLOT_COUNT: usize = 4;

// A bank index as written in a Layout. Negative values count from the end of the ROM, so
// -1 is always the last bank no matter how large the image is.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BankIndex(i16);

impl BankIndex {
    pub const fn from_i16(value: i16) -> BankIndex {
        BankIndex(value)
    }

    pub fn resolve(self, bank_count: u16) -> u16 {
        assert!(bank_count > 0, "Can't resolve a bank index when there are no banks.");
        i32::from(self.0).rem_euclid(i32::from(bank_count)) as u16
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, FromPrimitive)]
pub enum MemKind {
    Rom = 0,
    Ram = 1,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BankLocation {
    pub kind: MemKind,
    pub index: u16,
}

impl BankLocation {
    pub const fn rom(index: u16) -> BankLocation {
        BankLocation { kind: MemKind::Rom, index }
    }

    pub const fn ram(index: u16) -> BankLocation {
        BankLocation { kind: MemKind::Ram, index }
    }
}

impl fmt::Display for BankLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemKind::Rom => write!(f, "{}", self.index),
            MemKind::Ram => write!(f, "W{}", self.index),
        }
    }
}

// The bank-switching hardware of a cartridge, one register per independently switchable slot.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SlotId {
    S0 = 0,
    S1 = 1,
    S2 = 2,
    S3 = 3,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BankRegisters([BankLocation; SLOT_COUNT]);

impl BankRegisters {
    pub const fn new() -> BankRegisters {
        BankRegisters([BankLocation::rom(0); SLOT_COUNT])
    }

    pub fn get(&self, id: SlotId) -> BankLocation {
        self.0[id as usize]
    }

    pub fn set(&mut self, id: SlotId, location: BankLocation) {
        self.0[id as usize] = location;
    }

    pub fn locations(&self) -> &[BankLocation; SLOT_COUNT] {
        &self.0
    }
}

impl Default for BankRegisters {
    fn default() -> BankRegisters {
        BankRegisters::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indexes_count_from_the_end() {
        assert_eq!(BankIndex::from_i16(-1).resolve(8), 7);
        assert_eq!(BankIndex::from_i16(-2).resolve(8), 6);
        assert_eq!(BankIndex::from_i16(-1).resolve(1), 0);
    }

    #[test]
    fn large_indexes_wrap() {
        assert_eq!(BankIndex::from_i16(9).resolve(8), 1);
        assert_eq!(BankIndex::from_i16(4).resolve(3), 1);
    }

    #[test]
    fn location_display() {
        assert_eq!(BankLocation::rom(5).to_string(), "5");
        assert_eq!(BankLocation::ram(1).to_string(), "W1");
    }
}
