use crate::scheme::*;
use crate::schemes::common::standard::ROM_WINDOWS;

const SELECT_ANY: u16 = 0x080D;
const SELECT_LAST_TWO: u16 = 0x0000;

const LAYOUT: Layout = Layout::builder()
    .rom_max_size(64 * KIBIBYTE)
    .rom_bank_size(4 * KIBIBYTE)
    .windows(ROM_WINDOWS)
    .hotspots(&[
        HotspotWindow::new(SELECT_ANY, SELECT_ANY, HotspotKind::Custom).mask(0x180F),
        HotspotWindow::new(SELECT_LAST_TWO, SELECT_LAST_TWO, HotspotKind::Custom).mask(0x1880),
    ])
    .build();

// AtariAge X07 (Stella's Stocking). Sixteen banks; the last two can also flip between each
// other through TIA accesses.
#[derive(Clone, Copy)]
pub struct CartX07;

impl Scheme for CartX07 {
    fn layout(&self) -> Layout {
        LAYOUT
    }

    fn on_hotspot(&mut self, table: &mut BankTable, hotspot: Hotspot, event: HotspotEvent) -> bool {
        let address = event.address.to_raw();
        match hotspot.address {
            SELECT_ANY => {
                let fields = splitbits!(min=u16, address, "........ bbbb....");
                table.select_bank(fields.b);
                true
            }
            SELECT_LAST_TWO if matches!(table.current_bank(), 14 | 15) => {
                let fields = splitbits!(min=u16, address, "........ .b......");
                table.select_bank(14 | fields.b);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BankTable {
        LAYOUT.make_bank_table(&RawMemory::new(64 * KIBIBYTE), None).unwrap()
    }

    #[test]
    fn select_any_bank() {
        let mut scheme = CartX07;
        let mut table = table();
        let event = HotspotEvent::read(0x08AD);
        let hotspot = crate::memory::hotspot::classify(LAYOUT.hotspots(), event).unwrap();
        assert!(scheme.on_hotspot(&mut table, hotspot, event));
        assert_eq!(table.current_bank(), 10);
    }

    #[test]
    fn last_two_banks_only_flip_from_each_other() {
        let mut scheme = CartX07;
        let mut table = table();
        let flip = HotspotEvent::read(0x0040);
        let hotspot = crate::memory::hotspot::classify(LAYOUT.hotspots(), flip).unwrap();
        assert!(!scheme.on_hotspot(&mut table, hotspot, flip));
        assert_eq!(table.current_bank(), 0);

        table.select_bank(14);
        assert!(scheme.on_hotspot(&mut table, hotspot, flip));
        assert_eq!(table.current_bank(), 15);

        let back = HotspotEvent::read(0x0000);
        assert!(scheme.on_hotspot(&mut table, hotspot, back));
        assert_eq!(table.current_bank(), 14);
    }
}
