use crate::memory::bank::bank_index::{BankIndex, MemKind, SLOT_COUNT, SlotId};
use crate::memory::bank_table::BankTable;
use crate::memory::hotspot::AddressDecoder;
use crate::memory::raw_memory::RawMemory;
use crate::memory::window::Window;
use crate::scheme_list::LookupError;
use crate::util::unit::KIBIBYTE;

// Everything about a bank-switching scheme that never changes at runtime.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Layout {
    rom_max_size: u32,
    rom_bank_size: u32,
    ram_size: u32,
    windows: &'static [Window],
    hotspots: AddressDecoder,
    start_banks: [StartBank; SLOT_COUNT],
}

impl Layout {
    pub const fn builder() -> LayoutBuilder {
        LayoutBuilder::new()
    }

    pub fn rom_max_size(&self) -> u32 {
        self.rom_max_size
    }

    pub fn rom_bank_size(&self) -> u32 {
        self.rom_bank_size
    }

    pub fn windows(&self) -> &'static [Window] {
        self.windows
    }

    pub fn hotspots(&self) -> AddressDecoder {
        self.hotspots
    }

    pub fn start_bank(&self, slot: SlotId) -> (MemKind, BankIndex) {
        let start = self.start_banks[slot as usize];
        (start.kind, start.index)
    }

    pub fn make_bank_table(
        &self,
        rom: &RawMemory,
        ram_init: Option<&RawMemory>,
    ) -> Result<BankTable, LookupError> {
        let size = rom.size();
        if size == 0 {
            return Err(LookupError::ImageSizeMismatch {
                size,
                expected: "a non-empty image".to_owned(),
            });
        }

        if size > self.rom_max_size {
            return Err(LookupError::ImageSizeMismatch {
                size,
                expected: format!("at most {}KiB", self.rom_max_size / KIBIBYTE),
            });
        }

        if size > self.rom_bank_size && size % self.rom_bank_size != 0 {
            return Err(LookupError::ImageSizeMismatch {
                size,
                expected: format!("a multiple of the {} byte bank size", self.rom_bank_size),
            });
        }

        let mut ram = RawMemory::new(self.ram_size);
        if let Some(init) = ram_init {
            ram.overlay(init);
        }

        Ok(BankTable::new(self, rom.mirrored_to(self.rom_bank_size), ram))
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
struct StartBank {
    kind: MemKind,
    index: BankIndex,
}

#[derive(Clone, Copy)]
pub struct LayoutBuilder {
    rom_max_size: Option<u32>,
    rom_bank_size: Option<u32>,
    ram_size: u32,
    windows: &'static [Window],
    hotspots: AddressDecoder,
    start_banks: [StartBank; SLOT_COUNT],
}

impl LayoutBuilder {
    const fn new() -> LayoutBuilder {
        LayoutBuilder {
            rom_max_size: None,
            rom_bank_size: None,
            ram_size: 0,
            windows: &[],
            hotspots: &[],
            start_banks: [StartBank { kind: MemKind::Rom, index: BankIndex::from_i16(0) }; SLOT_COUNT],
        }
    }

    pub const fn rom_max_size(mut self, value: u32) -> LayoutBuilder {
        self.rom_max_size = Some(value);
        self
    }

    pub const fn rom_bank_size(mut self, value: u32) -> LayoutBuilder {
        assert!(value.is_power_of_two());
        self.rom_bank_size = Some(value);
        self
    }

    pub const fn ram_size(mut self, value: u32) -> LayoutBuilder {
        self.ram_size = value;
        self
    }

    pub const fn windows(mut self, windows: &'static [Window]) -> LayoutBuilder {
        self.windows = windows;
        self
    }

    pub const fn hotspots(mut self, hotspots: AddressDecoder) -> LayoutBuilder {
        self.hotspots = hotspots;
        self
    }

    pub const fn start_bank(mut self, slot: SlotId, index: i16) -> LayoutBuilder {
        self.start_banks[slot as usize] = StartBank { kind: MemKind::Rom, index: BankIndex::from_i16(index) };
        self
    }

    pub const fn start_ram_bank(mut self, slot: SlotId, index: i16) -> LayoutBuilder {
        self.start_banks[slot as usize] = StartBank { kind: MemKind::Ram, index: BankIndex::from_i16(index) };
        self
    }

    pub const fn build(self) -> Layout {
        assert!(!self.windows.is_empty(), "A layout needs at least one window.");
        let (Some(rom_max_size), Some(rom_bank_size)) = (self.rom_max_size, self.rom_bank_size) else {
            panic!("rom_max_size and rom_bank_size must be specified.");
        };

        Layout {
            rom_max_size,
            rom_bank_size,
            ram_size: self.ram_size,
            windows: self.windows,
            hotspots: self.hotspots,
            start_banks: self.start_banks,
        }
    }
}
