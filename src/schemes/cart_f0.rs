use log::info;

use crate::scheme::*;
use crate::schemes::common::standard::ROM_WINDOWS;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(64 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(0x1FF0, 0x1FF0, HotspotKind::Custom),
    ])
    .start_bank(S0, 1)
    .build();

// Dynacom Megaboy. There's only one hotspot, and it steps through the banks in order.
#[derive(Clone, Copy)]
pub struct CartF0;

impl Scheme for CartF0 {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, _hotspot: Hotspot, _event: HotspotEvent) -> bool {
        let next = (table.current_bank() + 1) % table.rom_bank_count();
        info!(target: "hotspots", "Megaboy advancing to bank {next}.");
        table.select_bank(next);
        true
    }
}
