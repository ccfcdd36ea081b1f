use crate::scheme::*;
use crate::schemes::common::standard::ROM_WINDOWS;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(256 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x0800, 0x0800, HotspotKind::Custom).mask(0x1800),
    ])
    .start_bank(S0, -1)
    .build();

// Superbank: any access to $0800-$0FFF (and mirrors) selects the bank in the low address bits.
#[derive(Clone, Copy)]
pub struct CartSb;

impl Scheme for CartSb {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, _hotspot: Hotspot, event: HotspotEvent) -> bool {
        let bank = event.address.to_raw() & (table.rom_bank_count() - 1);
        table.select_bank(bank);
        true
    }
}
