use log::info;

use crate::scheme::*;
use crate::schemes::common::standard::ROM_WINDOWS;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(8 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .build();

// Activision. JSR and RTS both touch the stack at $01FE, and the access right after that
// carries the high byte of the target address. Bit 5 of that byte (A13 of the target)
// picks the bank, so subroutines in different banks just work.
#[derive(Clone, Copy, Default)]
pub struct CartFe {
    last_access_was_fe: bool,
}

impl Scheme for CartFe {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_bus_data(&mut self, table: &mut BankTable, address: CartAddress, value: u8) {
        if self.last_access_was_fe {
            let bank = if splitbits!(value, "..b.....").b { 0 } else { 1 };
            info!(target: "hotspots", "FE bank select from ${value:02X} at {address}.");
            table.select_bank(bank);
            self.last_access_was_fe = false;
        } else {
            self.last_access_was_fe = address.to_raw() == 0x01FE;
        }
    }

    fn reset(&mut self, table: &mut BankTable) {
        self.last_access_was_fe = false;
        table.reset_banks();
    }

    fn save(&self, w: &mut StateWriter) {
        w.write_bool(self.last_access_was_fe);
    }

    fn load(&mut self, r: &mut StateReader) -> Result<(), CorruptStateError> {
        let last_access_was_fe = r.read_bool("last access was $01FE")?;
        self.last_access_was_fe = last_access_was_fe;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BankTable {
        LAYOUT.make_bank_table(&RawMemory::new(8 * KIBIBYTE), None).unwrap()
    }

    #[test]
    fn data_after_01fe_selects_the_bank() {
        let mut scheme = CartFe::default();
        let mut table = table();
        scheme.on_bus_data(&mut table, CartAddress::new(0x01FE), 0x00);
        scheme.on_bus_data(&mut table, CartAddress::new(0x01FF), 0b1101_1111);
        assert_eq!(table.current_bank(), 1);

        scheme.on_bus_data(&mut table, CartAddress::new(0x01FE), 0x00);
        scheme.on_bus_data(&mut table, CartAddress::new(0x01FF), 0b0010_0000);
        assert_eq!(table.current_bank(), 0);
    }

    #[test]
    fn other_accesses_do_nothing() {
        let mut scheme = CartFe::default();
        let mut table = table();
        scheme.on_bus_data(&mut table, CartAddress::new(0x01FD), 0x00);
        scheme.on_bus_data(&mut table, CartAddress::new(0x01FF), 0x00);
        assert_eq!(table.current_bank(), 0);
    }
}
