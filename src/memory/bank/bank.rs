use crate::memory::bank::bank_index::{BankIndex, BankLocation, BankRegisters, MemKind, SlotId};

// Cartridge RAM on the 2600 has separate read and write ports since the cartridge port has
// no R/W line. The same RAM byte is visible at two different addresses.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Port {
    Read,
    Write,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Source {
    Rom,
    Ram(Port),
    // ROM or RAM depending on what was last switched into the slot.
    RomOrRam(Port),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Location {
    Fixed(BankIndex),
    Switchable(SlotId),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Bank {
    source: Source,
    location: Location,
    ram_base: u32,
}

impl Bank {
    pub const ROM: Bank = Bank::with_source(Source::Rom);
    pub const RAM_READ: Bank = Bank::with_source(Source::Ram(Port::Read));
    pub const RAM_WRITE: Bank = Bank::with_source(Source::Ram(Port::Write));
    pub const ROM_OR_RAM_READ: Bank = Bank::with_source(Source::RomOrRam(Port::Read));
    pub const ROM_OR_RAM_WRITE: Bank = Bank::with_source(Source::RomOrRam(Port::Write));

    const fn with_source(source: Source) -> Bank {
        Bank { source, location: Location::Fixed(BankIndex::from_i16(0)), ram_base: 0 }
    }

    pub const fn fixed_index(mut self, index: i16) -> Bank {
        assert!(!matches!(self.source, Source::RomOrRam(_)), "A ROM_OR_RAM bank must be switchable.");
        self.location = Location::Fixed(BankIndex::from_i16(index));
        self
    }

    pub const fn switchable(mut self, slot: SlotId) -> Bank {
        self.location = Location::Switchable(slot);
        self
    }

    // Where this window's RAM banks start within cartridge RAM.
    pub const fn ram_base(mut self, base: u32) -> Bank {
        assert!(
            matches!(self.source, Source::Ram(_) | Source::RomOrRam(_)),
            "Only RAM banks can have a RAM base.",
        );
        self.ram_base = base;
        self
    }

    pub fn can_hold_ram(self) -> bool {
        matches!(self.source, Source::Ram(_) | Source::RomOrRam(_))
    }

    pub fn slot(self) -> Option<SlotId> {
        match self.location {
            Location::Switchable(slot) => Some(slot),
            Location::Fixed(_) => None,
        }
    }

    pub fn ram_base_offset(self) -> u32 {
        self.ram_base
    }

    // What this bank currently maps to, or None if nothing is mapped.
    pub fn resolve(
        self,
        registers: &BankRegisters,
        rom_bank_count: u16,
        ram_bank_count: u16,
    ) -> Option<MappedBank> {
        let location = match self.location {
            Location::Switchable(slot) => registers.get(slot),
            Location::Fixed(index) => match self.source {
                Source::RomOrRam(_) => return None,
                Source::Rom => BankLocation::rom(index.resolve(rom_bank_count)),
                Source::Ram(_) if ram_bank_count == 0 => return None,
                Source::Ram(_) => BankLocation::ram(index.resolve(ram_bank_count)),
            },
        };

        match (self.source, location.kind) {
            (Source::Rom, MemKind::Rom) => Some(MappedBank::Rom(location.index)),
            (Source::Rom, MemKind::Ram) => None,
            (Source::Ram(port), _) => Some(MappedBank::Ram(port, location.index)),
            (Source::RomOrRam(_), MemKind::Rom) => Some(MappedBank::Rom(location.index)),
            (Source::RomOrRam(port), MemKind::Ram) => Some(MappedBank::Ram(port, location.index)),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MappedBank {
    Rom(u16),
    Ram(Port, u16),
}
