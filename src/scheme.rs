pub use splitbits::splitbits;

pub use crate::memory::bank::bank::Bank;
pub use crate::memory::bank::bank_index::SlotId;
pub use crate::memory::bank::bank_index::SlotId::{S0, S1, S2};
pub use crate::memory::bank_table::BankTable;
pub use crate::memory::cart_address::CartAddress;
pub use crate::memory::hotspot::{Access, Hotspot, HotspotEvent, HotspotKind, HotspotWindow};
pub use crate::memory::layout::Layout;
pub use crate::memory::raw_memory::RawMemory;
pub use crate::memory::window::Window;
pub use crate::savestate::{CorruptStateError, StateReader, StateWriter};
pub use crate::scheme_list::LookupResult;
pub use crate::util::unit::KIBIBYTE;

// The bank-switching behavior of one cartridge type. Everything fixed lives in the Layout,
// everything that changes at runtime lives either in the BankTable or in the Scheme itself.
pub trait Scheme: SchemeClone {
    // Should be const, but that's not yet allowed by Rust.
    fn layout(&self) -> Layout;

    // Called for every access that falls within one of the layout's hotspot windows, before
    // the cartridge serves the byte. Returns true if the access switched banks.
    // Most schemes only use the declarative hotspot kinds.
    fn on_hotspot(&mut self, table: &mut BankTable, hotspot: Hotspot, _event: HotspotEvent) -> bool {
        apply_hotspot(table, hotspot)
    }

    // Called after every access with the value that ended up on the data bus.
    // Most schemes don't care what the data was.
    fn on_bus_data(&mut self, _table: &mut BankTable, _address: CartAddress, _value: u8) {}

    fn reset(&mut self, table: &mut BankTable) {
        table.reset_banks();
    }

    fn banking_locked(&self) -> bool {
        false
    }

    // Schemes with no state beyond the BankTable have nothing to save.
    fn save(&self, _w: &mut StateWriter) {}

    fn load(&mut self, _r: &mut StateReader) -> Result<(), CorruptStateError> {
        Ok(())
    }

    // Most schemes use the whole image as ROM and start with zeroed RAM.
    fn rom_and_ram_init(&self, image: &RawMemory) -> (RawMemory, Option<RawMemory>) {
        (image.clone(), None)
    }

    fn supported(self) -> LookupResult where Self: Sized, Self: 'static {
        LookupResult::Supported(Box::new(self))
    }
}

pub fn apply_hotspot(table: &mut BankTable, hotspot: Hotspot) -> bool {
    match hotspot.kind {
        HotspotKind::SelectRomBank(slot) => table.select_rom_bank(slot, hotspot.offset),
        HotspotKind::SelectRamBank(slot) => table.select_ram_bank(slot, hotspot.offset),
        HotspotKind::SwitchToBank(slot, bank) => table.select_rom_bank(slot, bank),
        HotspotKind::Custom => return false,
    }

    true
}

pub trait SchemeClone {
    fn clone_box(&self) -> Box<dyn Scheme>;
}

impl<T: Scheme + Clone + 'static> SchemeClone for T {
    fn clone_box(&self) -> Box<dyn Scheme> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Scheme> {
    fn clone(&self) -> Box<dyn Scheme> {
        (**self).clone_box()
    }
}
