use crate::scheme::*;

const RAM_HOTSPOT: u16 = 0x003E;
const ROM_HOTSPOT: u16 = 0x003F;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(512 * KIBIBYTE)
    .rom_bank_size(2 * KIBIBYTE)
    .ram_size(32 * KIBIBYTE)
    .windows(&[
        Window::new(0x1000, 0x13FF, 1 * KIBIBYTE, Bank::ROM_OR_RAM_READ.switchable(S0)),
        Window::new(0x1400, 0x17FF, 1 * KIBIBYTE, Bank::ROM_OR_RAM_WRITE.switchable(S0)),
        Window::new(0x1800, 0x1FFF, 2 * KIBIBYTE, Bank::ROM.fixed_index(-1)),
    ])
    .hotspots(&[
        // No mirrors, unlike 3F.
        HotspotWindow::new(RAM_HOTSPOT, ROM_HOTSPOT, HotspotKind::Custom).writes_only(),
    ])
    .build();

// Tigervision with up to 32K of RAM, switched in 1K at a time.
#[derive(Clone, Copy)]
pub struct Cart3e;

impl Scheme for Cart3e {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, hotspot: Hotspot, event: HotspotEvent) -> bool {
        let Access::Write(value) = event.access else {
            return false;
        };

        match hotspot.address {
            ROM_HOTSPOT => table.select_rom_bank(S0, value.into()),
            RAM_HOTSPOT => table.select_ram_bank(S0, value.into()),
            _ => return false,
        }

        true
    }
}
