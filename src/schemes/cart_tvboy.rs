use log::info;

use crate::scheme::*;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(512 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x1FFF, 4 * KIBIBYTE, Bank::ROM.switchable(S0)),
    ])
    .hotspots(&[
        HotspotWindow::new(0x1800, 0x187F, HotspotKind::Custom),
    ])
    .build();

// Systema TV Boy: 127 built-in games on a single 512K ROM, with the menu in bank 0.
// Any access to $1800-$187F selects the bank in the low address bits. The first switch to a
// bank other than 0 locks banking until power off.
#[derive(Clone, Copy, Default, Debug)]
pub struct CartTvBoy {
    banking_locked: bool,
}

impl Scheme for CartTvBoy {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, hotspot: Hotspot, _event: HotspotEvent) -> bool {
        let bank = hotspot.address & (table.rom_bank_count() - 1);
        self.select_bank(table, bank)
    }

    // Locked banking survives a reset. Only a new cartridge (power cycle) clears it.
    fn reset(&mut self, table: &mut BankTable) {
        self.select_bank(table, 0);
    }

    fn banking_locked(&self) -> bool {
        self.banking_locked
    }

    fn save(&self, w: &mut StateWriter) {
        w.write_bool(self.banking_locked);
    }

    fn load(&mut self, r: &mut StateReader) -> Result<(), CorruptStateError> {
        self.banking_locked = r.read_bool("banking locked")?;
        Ok(())
    }
}

impl CartTvBoy {
    pub fn select_bank(&mut self, table: &mut BankTable, bank: u16) -> bool {
        if self.banking_locked {
            info!(target: "hotspots", "TV Boy ignored bank {bank} request: banking is locked.");
            return false;
        }

        table.select_bank(bank);
        if bank != 0 {
            info!(target: "hotspots", "TV Boy locked to bank {bank}.");
            self.banking_locked = true;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::hotspot::classify;

    use super::*;

    fn table(bank_count: u32) -> BankTable {
        LAYOUT.make_bank_table(&RawMemory::new(bank_count * 4 * KIBIBYTE), None).unwrap()
    }

    fn access(scheme: &mut CartTvBoy, table: &mut BankTable, event: HotspotEvent) -> bool {
        match classify(LAYOUT.hotspots(), event) {
            Some(hotspot) => scheme.on_hotspot(table, hotspot, event),
            None => false,
        }
    }

    #[test]
    fn starts_unlocked_in_bank_zero() {
        let scheme = CartTvBoy::default();
        let table = table(8);
        assert!(!scheme.banking_locked());
        assert_eq!(table.current_bank(), 0);
    }

    #[test]
    fn first_nonzero_switch_locks() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        assert!(access(&mut scheme, &mut table, HotspotEvent::read(0x1804)));
        assert_eq!(table.current_bank(), 4);
        assert!(scheme.banking_locked());

        assert!(!access(&mut scheme, &mut table, HotspotEvent::read(0x1802)));
        assert_eq!(table.current_bank(), 4);
    }

    #[test]
    fn bank_zero_never_locks() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        assert!(access(&mut scheme, &mut table, HotspotEvent::read(0x1800)));
        assert!(!scheme.banking_locked());
        assert!(access(&mut scheme, &mut table, HotspotEvent::write(0x1805, 0x00)));
        assert_eq!(table.current_bank(), 5);
        assert!(scheme.banking_locked());
    }

    #[test]
    fn writes_switch_like_reads() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        access(&mut scheme, &mut table, HotspotEvent::write(0x1803, 0xFF));
        assert_eq!(table.current_bank(), 3);
        assert!(scheme.banking_locked());
    }

    #[test]
    fn bank_number_comes_from_the_masked_address() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(128);
        // Mirror of $187F.
        access(&mut scheme, &mut table, HotspotEvent::read(0xF87F));
        assert_eq!(table.current_bank(), 127);
    }

    #[test]
    fn bank_number_wraps_to_the_image() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        // 0x1809 & 7
        access(&mut scheme, &mut table, HotspotEvent::read(0x1809));
        assert_eq!(table.current_bank(), 1);
    }

    #[test]
    fn addresses_outside_the_window_change_nothing() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        for address in [0x17FF, 0x1880, 0x1FFF, 0x0804, 0x1000] {
            assert!(!access(&mut scheme, &mut table, HotspotEvent::read(address)));
            assert!(!access(&mut scheme, &mut table, HotspotEvent::write(address, 0x07)));
        }

        assert_eq!(table.current_bank(), 0);
        assert!(!scheme.banking_locked());
    }

    #[test]
    fn reset_keeps_the_lock() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        access(&mut scheme, &mut table, HotspotEvent::read(0x1806));
        scheme.reset(&mut table);
        assert_eq!(table.current_bank(), 6);
        assert!(scheme.banking_locked());
    }

    #[test]
    fn reset_while_unlocked_selects_the_menu() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        scheme.reset(&mut table);
        assert_eq!(table.current_bank(), 0);
        assert!(!scheme.banking_locked());
    }

    #[test]
    fn lock_round_trips() {
        let mut scheme = CartTvBoy::default();
        let mut table = table(8);
        access(&mut scheme, &mut table, HotspotEvent::read(0x1803));

        let mut w = StateWriter::new();
        scheme.save(&mut w);
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![1]);

        let mut restored = CartTvBoy::default();
        let mut r = StateReader::new(&bytes);
        restored.load(&mut r).unwrap();
        r.finish().unwrap();
        assert!(restored.banking_locked());
    }

    #[test]
    fn load_rejects_bad_bool() {
        let mut scheme = CartTvBoy::default();
        assert!(scheme.load(&mut StateReader::new(&[7])).is_err());
        assert!(scheme.load(&mut StateReader::new(&[])).is_err());
        assert!(!scheme.banking_locked());
    }
}
