use log::info;

use crate::scheme::*;
use crate::schemes::common::standard::ROM_WINDOWS;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(512 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x0800, 0x0800, HotspotKind::Custom).mask(0x1C00),
    ])
    .build();

// Menu Driven Megacart. Selecting any bank above 127 locks the current bank until power off.
#[derive(Clone, Copy, Default)]
pub struct CartMdm {
    banking_disabled: bool,
}

impl Scheme for CartMdm {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, _hotspot: Hotspot, event: HotspotEvent) -> bool {
        if self.banking_disabled {
            return false;
        }

        let bank = event.address.to_raw() & 0xFF;
        table.select_bank(bank);
        if bank > 127 {
            info!(target: "hotspots", "MDM bank switching disabled by bank {bank} request.");
            self.banking_disabled = true;
        }

        true
    }

    fn reset(&mut self, table: &mut BankTable) {
        self.banking_disabled = false;
        table.reset_banks();
    }

    fn banking_locked(&self) -> bool {
        self.banking_disabled
    }

    fn save(&self, w: &mut StateWriter) {
        w.write_bool(self.banking_disabled);
    }

    fn load(&mut self, r: &mut StateReader) -> Result<(), CorruptStateError> {
        self.banking_disabled = r.read_bool("banking disabled")?;
        Ok(())
    }
}
