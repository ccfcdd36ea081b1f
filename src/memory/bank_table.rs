use itertools::Itertools;
use log::{info, log_enabled, warn, Level};
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::memory::bank::bank::{MappedBank, Port};
use crate::memory::bank::bank_index::{BankLocation, BankRegisters, MemKind, SLOT_COUNT, SlotId};
use crate::memory::cart_address::CartAddress;
use crate::memory::layout::Layout;
use crate::memory::raw_memory::RawMemory;
use crate::memory::read_result::ReadResult;
use crate::memory::window::Window;
use crate::savestate::{CorruptStateError, StateReader, StateWriter};

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum OutOfRangeAccess {
    #[error("Offset {offset:#06X} is beyond the {bank_size} byte bank.")]
    BeyondBank { offset: u32, bank_size: u32 },
    #[error("Address {0} isn't mapped by the cartridge.")]
    Unmapped(CartAddress),
}

// The cartridge image split into banks, the cartridge RAM, and which banks are currently
// mapped into each window.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct BankTable {
    rom: RawMemory,
    ram: RawMemory,
    rom_bank_size: u32,
    windows: &'static [Window],
    registers: BankRegisters,
    start_registers: BankRegisters,
}

impl BankTable {
    pub fn new(layout: &Layout, rom: RawMemory, ram: RawMemory) -> BankTable {
        let mut table = BankTable {
            rom,
            ram,
            rom_bank_size: layout.rom_bank_size(),
            windows: layout.windows(),
            registers: BankRegisters::new(),
            start_registers: BankRegisters::new(),
        };

        let rom_bank_count = table.rom_bank_count();
        for slot in [SlotId::S0, SlotId::S1, SlotId::S2, SlotId::S3] {
            let location = match layout.start_bank(slot) {
                (MemKind::Rom, index) => BankLocation::rom(index.resolve(rom_bank_count)),
                (MemKind::Ram, index) => match table.ram_bank_count(slot) {
                    0 => BankLocation::rom(0),
                    count => BankLocation::ram(index.resolve(count)),
                },
            };
            table.start_registers.set(slot, location);
        }

        table.registers = table.start_registers;
        table
    }

    pub fn rom_bank_size(&self) -> u32 {
        self.rom_bank_size
    }

    pub fn rom_bank_count(&self) -> u16 {
        (self.rom.size() / self.rom_bank_size) as u16
    }

    pub fn ram_bank_count(&self, slot: SlotId) -> u16 {
        self.windows.iter()
            .find(|window| window.bank().can_hold_ram() && window.bank().slot() == Some(slot))
            .map_or(0, |window| self.ram_bank_count_for(*window))
    }

    // The ROM bank in slot 0. Single-slot schemes only have this one.
    pub fn current_bank(&self) -> u16 {
        self.registers.get(SlotId::S0).index
    }

    // Wraps instead of failing. For power-of-two bank counts this is the same as masking
    // with N - 1.
    pub fn select_bank(&mut self, index: u16) {
        self.select_rom_bank(SlotId::S0, index);
    }

    pub fn select_rom_bank(&mut self, slot: SlotId, index: u16) {
        let location = BankLocation::rom(index % self.rom_bank_count());
        self.set_location(slot, location);
    }

    pub fn select_ram_bank(&mut self, slot: SlotId, index: u16) {
        match self.ram_bank_count(slot) {
            0 => warn!(target: "bankswitch", "Ignoring RAM bank {index} request for {slot:?}, which can't hold RAM."),
            count => self.set_location(slot, BankLocation::ram(index % count)),
        }
    }

    pub fn reset_banks(&mut self) {
        self.registers = self.start_registers;
        if log_enabled!(target: "bankswitch", Level::Info) {
            info!(target: "bankswitch", "Banks reset to {}.", self.bank_string());
        }
    }

    fn set_location(&mut self, slot: SlotId, location: BankLocation) {
        if self.registers.get(slot) != location {
            self.registers.set(slot, location);
            if log_enabled!(target: "bankswitch", Level::Info) {
                info!(target: "bankswitch", "{slot:?} switched to bank {location}. Banks: {}", self.bank_string());
            }
        }
    }

    // What each window currently shows, lowest address first.
    pub fn bank_string(&self) -> String {
        self.windows.iter()
            .map(|window| match self.resolve_window(*window) {
                None => "E".to_owned(),
                Some(MappedBank::Rom(index)) => index.to_string(),
                Some(MappedBank::Ram(Port::Read, index)) => format!("R{index}"),
                Some(MappedBank::Ram(Port::Write, index)) => format!("W{index}"),
            })
            .join(" ")
    }

    // Reads from the ROM bank in slot 0, ignoring the windows.
    pub fn read_current_bank(&self, offset: u32) -> Result<u8, OutOfRangeAccess> {
        if offset >= self.rom_bank_size {
            return Err(OutOfRangeAccess::BeyondBank { offset, bank_size: self.rom_bank_size });
        }

        let location = self.registers.get(SlotId::S0);
        let value = match location.kind {
            MemKind::Rom => self.rom.get(u32::from(location.index) * self.rom_bank_size + offset),
            MemKind::Ram => None,
        };
        value.ok_or(OutOfRangeAccess::BeyondBank { offset, bank_size: self.rom_bank_size })
    }

    // What a read would return, without a read's side effects.
    pub fn peek(&self, address: CartAddress) -> Result<ReadResult, OutOfRangeAccess> {
        let (window, mapped) = self.mapping(address).ok_or(OutOfRangeAccess::Unmapped(address))?;
        match mapped {
            MappedBank::Rom(bank) => Ok(ReadResult::full(self.rom[self.rom_offset(bank, address)])),
            MappedBank::Ram(Port::Read, bank) => {
                let offset = self.ram_offset(window, bank, address);
                self.ram.get(offset)
                    .map(ReadResult::full)
                    .ok_or(OutOfRangeAccess::Unmapped(address))
            }
            // Whatever is on the data bus gets read back.
            MappedBank::Ram(Port::Write, _) => Ok(ReadResult::OPEN_BUS),
        }
    }

    pub fn read(&mut self, address: CartAddress, data_bus: u8) -> Result<ReadResult, OutOfRangeAccess> {
        let (window, mapped) = self.mapping(address).ok_or(OutOfRangeAccess::Unmapped(address))?;
        if let MappedBank::Ram(Port::Write, bank) = mapped {
            // Reading the write port is a write of whatever value is left on the data bus.
            let offset = self.ram_offset(window, bank, address);
            let cell = self.ram.get_mut(offset).ok_or(OutOfRangeAccess::Unmapped(address))?;
            *cell = data_bus;
            info!(target: "bus", "Read from RAM write port {address} stored ${data_bus:02X}.");
            return Ok(ReadResult::full(data_bus));
        }

        self.peek(address)
    }

    // Returns false if the write went nowhere.
    pub fn write(&mut self, address: CartAddress, value: u8) -> Result<bool, OutOfRangeAccess> {
        let (window, mapped) = self.mapping(address).ok_or(OutOfRangeAccess::Unmapped(address))?;
        match mapped {
            MappedBank::Ram(Port::Write, bank) => {
                let offset = self.ram_offset(window, bank, address);
                let cell = self.ram.get_mut(offset).ok_or(OutOfRangeAccess::Unmapped(address))?;
                *cell = value;
                Ok(true)
            }
            MappedBank::Ram(Port::Read, _) => {
                info!(target: "bus", "Ignored write of ${value:02X} to RAM read port {address}.");
                Ok(false)
            }
            MappedBank::Rom(_) => {
                info!(target: "bus", "Ignored write of ${value:02X} to ROM at {address}.");
                Ok(false)
            }
        }
    }

    pub fn save(&self, w: &mut StateWriter) {
        w.write_u16(self.rom_bank_count());
        w.write_u8(SLOT_COUNT as u8);
        for location in self.registers.locations() {
            w.write_u8(location.kind as u8);
            w.write_u16(location.index);
        }

        w.write_len_prefixed(self.ram.as_slice());
    }

    // Nothing is modified unless the whole table state is valid.
    pub fn load(&mut self, r: &mut StateReader) -> Result<(), CorruptStateError> {
        let rom_bank_count = r.read_u16()?;
        if rom_bank_count != self.rom_bank_count() {
            return Err(CorruptStateError::InvalidValue { field: "ROM bank count", value: u32::from(rom_bank_count) });
        }

        let slot_count = r.read_u8()?;
        if usize::from(slot_count) != SLOT_COUNT {
            return Err(CorruptStateError::InvalidValue { field: "slot count", value: u32::from(slot_count) });
        }

        let mut registers = BankRegisters::new();
        for slot in [SlotId::S0, SlotId::S1, SlotId::S2, SlotId::S3] {
            let raw_kind = r.read_u8()?;
            let kind = MemKind::from_u8(raw_kind)
                .ok_or(CorruptStateError::InvalidValue { field: "bank kind", value: u32::from(raw_kind) })?;
            let index = r.read_u16()?;
            let limit = match kind {
                MemKind::Rom => self.rom_bank_count(),
                MemKind::Ram => self.ram_bank_count(slot),
            };
            if index >= limit {
                return Err(CorruptStateError::InvalidValue { field: "bank index", value: u32::from(index) });
            }

            registers.set(slot, BankLocation { kind, index });
        }

        let ram = r.read_len_prefixed()?;
        if ram.len() != self.ram.size() as usize {
            return Err(CorruptStateError::InvalidValue { field: "RAM size", value: ram.len() as u32 });
        }

        self.registers = registers;
        self.ram.as_mut_slice().copy_from_slice(ram);
        Ok(())
    }

    // Earlier windows shadow later ones.
    fn mapping(&self, address: CartAddress) -> Option<(Window, MappedBank)> {
        let window = *self.windows.iter().find(|window| window.contains(address))?;
        Some((window, self.resolve_window(window)?))
    }

    fn resolve_window(&self, window: Window) -> Option<MappedBank> {
        window.bank().resolve(&self.registers, self.rom_bank_count(), self.ram_bank_count_for(window))
    }

    fn rom_offset(&self, bank: u16, address: CartAddress) -> u32 {
        u32::from(bank) * self.rom_bank_size + (u32::from(address.to_raw()) & (self.rom_bank_size - 1))
    }

    fn ram_offset(&self, window: Window, bank: u16, address: CartAddress) -> u32 {
        window.bank().ram_base_offset() + u32::from(bank) * window.size() + window.offset(address)
    }

    // A RAM window's banks run from its base up to the next window's base (or the end of RAM).
    fn ram_bank_count_for(&self, window: Window) -> u16 {
        if !window.bank().can_hold_ram() {
            return 0;
        }

        let base = window.bank().ram_base_offset();
        let region_end = self.windows.iter()
            .map(|other| other.bank())
            .filter(|bank| bank.can_hold_ram())
            .map(|bank| bank.ram_base_offset())
            .filter(|&other_base| other_base > base)
            .min()
            .unwrap_or(self.ram.size());
        (region_end.saturating_sub(base) / window.size()) as u16
    }
}
