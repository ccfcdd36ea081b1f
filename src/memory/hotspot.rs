use crate::memory::bank::bank_index::SlotId;
use crate::memory::cart_address::{ADDRESS_MASK, CartAddress};

// The fixed hotspot windows of a scheme. The first matching window wins.
pub type AddressDecoder = &'static [HotspotWindow];

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HotspotKind {
    // The offset of the address within the window is the ROM bank to select.
    SelectRomBank(SlotId),
    // The offset of the address within the window is the RAM bank to select.
    SelectRamBank(SlotId),
    SwitchToBank(SlotId, u16),
    // The scheme itself decides what the access does.
    Custom,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Trigger {
    ReadOrWrite,
    WriteOnly,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Access {
    Read,
    Write(u8),
}

impl Access {
    pub fn is_write(self) -> bool {
        matches!(self, Access::Write(_))
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HotspotEvent {
    pub address: CartAddress,
    pub access: Access,
}

impl HotspotEvent {
    pub fn read(address: u16) -> HotspotEvent {
        HotspotEvent { address: CartAddress::new(address), access: Access::Read }
    }

    pub fn write(address: u16, value: u8) -> HotspotEvent {
        HotspotEvent { address: CartAddress::new(address), access: Access::Write(value) }
    }

    pub fn is_write(self) -> bool {
        self.access.is_write()
    }
}

// An inclusive address range, tested after masking off the address lines the cartridge
// doesn't decode.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HotspotWindow {
    low: u16,
    high: u16,
    mask: u16,
    trigger: Trigger,
    kind: HotspotKind,
}

impl HotspotWindow {
    pub const fn new(low: u16, high: u16, kind: HotspotKind) -> HotspotWindow {
        assert!(low <= high);
        assert!(high <= ADDRESS_MASK);
        HotspotWindow { low, high, mask: ADDRESS_MASK, trigger: Trigger::ReadOrWrite, kind }
    }

    pub const fn mask(mut self, mask: u16) -> HotspotWindow {
        assert!(self.low & !mask == 0, "The window must lie within the masked address lines.");
        assert!(self.high & !mask == 0, "The window must lie within the masked address lines.");
        self.mask = mask & ADDRESS_MASK;
        self
    }

    pub const fn writes_only(mut self) -> HotspotWindow {
        self.trigger = Trigger::WriteOnly;
        self
    }

    pub fn classify(&self, event: HotspotEvent) -> Option<Hotspot> {
        if self.trigger == Trigger::WriteOnly && !event.is_write() {
            return None;
        }

        let masked = event.address.masked(self.mask);
        if (self.low..=self.high).contains(&masked) {
            Some(Hotspot { kind: self.kind, address: masked, offset: masked - self.low })
        } else {
            None
        }
    }
}

// A classified hotspot access.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Hotspot {
    pub kind: HotspotKind,
    // The address after masking.
    pub address: u16,
    pub offset: u16,
}

pub fn classify(decoder: AddressDecoder, event: HotspotEvent) -> Option<Hotspot> {
    decoder.iter().find_map(|window| window.classify(event))
}
