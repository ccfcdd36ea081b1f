use crate::scheme::*;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(512 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x17FF, 2 * KIBIBYTE, Bank::ROM.switchable(S0)),
        Window::new(0x1800, 0x1FFF, 2 * KIBIBYTE, Bank::ROM.fixed_index(-1)),
    ])
    .hotspots(&[
        // Shared with the TIA, which ignores writes up here.
        HotspotWindow::new(0x0000, 0x003F, HotspotKind::Custom).writes_only(),
    ])
    .build();

// Tigervision: the value written to the hotspot is the bank number.
#[derive(Clone, Copy)]
pub struct Cart3f;

impl Scheme for Cart3f {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, _hotspot: Hotspot, event: HotspotEvent) -> bool {
        match event.access {
            Access::Write(value) => {
                table.select_rom_bank(S0, value.into());
                true
            }
            Access::Read => false,
        }
    }
}
