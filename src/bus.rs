use log::{info, log_enabled, warn, Level};

use crate::cartridge::cartridge::Cartridge;
use crate::memory::bank_table::BankTable;
use crate::memory::cart_address::CartAddress;
use crate::memory::hotspot::{classify, HotspotEvent};
use crate::savestate::{self, CorruptStateError, StateReader, StateWriter};
use crate::scheme::Scheme;
use crate::scheme_list::{lookup_scheme, LookupError, SchemeId};

// What the rest of the console sees of the cartridge slot.
pub trait CartridgeBus {
    fn peek(&mut self, address: u16) -> u8;
    // Returns true if the write landed in cartridge RAM.
    fn poke(&mut self, address: u16, value: u8) -> bool;
}

// An inserted cartridge: the scheme deciding when to switch, plus the banks it switches.
#[derive(Clone)]
pub struct CartridgePort {
    scheme_id: SchemeId,
    scheme: Box<dyn Scheme>,
    table: BankTable,
    cartridge_name: String,
    cartridge_crc32: u32,
    data_bus: u8,
}

impl CartridgePort {
    pub fn insert(cartridge: &Cartridge, scheme_id: SchemeId) -> Result<CartridgePort, LookupError> {
        let mut scheme = lookup_scheme(scheme_id)?;
        let (rom, ram_init) = scheme.rom_and_ram_init(cartridge.image());
        let mut table = scheme.layout().make_bank_table(&rom, ram_init.as_ref())?;
        scheme.reset(&mut table);
        info!("Inserted {cartridge} as {scheme_id}. Banks: {}", table.bank_string());

        Ok(CartridgePort {
            scheme_id,
            scheme,
            table,
            cartridge_name: cartridge.name().to_owned(),
            cartridge_crc32: cartridge.crc32(),
            data_bus: 0,
        })
    }

    pub fn reset(&mut self) {
        self.scheme.reset(&mut self.table);
    }

    pub fn scheme_id(&self) -> SchemeId {
        self.scheme_id
    }

    pub fn cartridge_name(&self) -> &str {
        &self.cartridge_name
    }

    pub fn data_bus(&self) -> u8 {
        self.data_bus
    }

    pub fn current_bank(&self) -> u16 {
        self.table.current_bank()
    }

    pub fn bank_count(&self) -> u16 {
        self.table.rom_bank_count()
    }

    pub fn banking_locked(&self) -> bool {
        self.scheme.banking_locked()
    }

    pub fn bank_string(&self) -> String {
        self.table.bank_string()
    }

    // What a read would return right now, without switching banks or touching RAM.
    pub fn inspect(&self, address: u16) -> u8 {
        let address = CartAddress::new(address);
        if !address.is_in_cartridge_space() {
            return self.data_bus;
        }

        self.table.peek(address)
            .map_or(self.data_bus, |result| result.resolve(self.data_bus))
    }

    // A byte of the ROM bank currently in slot 0.
    pub fn read_bank_offset(&self, offset: u32) -> u8 {
        match self.table.read_current_bank(offset) {
            Ok(value) => value,
            Err(err) => {
                warn!(target: "bus", "{err} Returning the data bus value ${:02X}.", self.data_bus);
                self.data_bus
            }
        }
    }

    // An access by another device (TIA, RIOT) that the cartridge can still see on the
    // address bus.
    pub fn observe_read(&mut self, address: u16, value: u8) {
        let event = HotspotEvent::read(address);
        self.on_hotspot(event);
        self.data_bus = value;
        self.scheme.on_bus_data(&mut self.table, event.address, value);
    }

    pub fn observe_write(&mut self, address: u16, value: u8) {
        let event = HotspotEvent::write(address, value);
        self.on_hotspot(event);
        self.data_bus = value;
        self.scheme.on_bus_data(&mut self.table, event.address, value);
    }

    pub fn save_state(&self) -> Vec<u8> {
        let mut w = StateWriter::new();
        self.table.save(&mut w);
        w.write_u8(self.data_bus);

        let mut scheme_writer = StateWriter::new();
        self.scheme.save(&mut scheme_writer);
        w.write_len_prefixed(&scheme_writer.into_bytes());

        let bytes = savestate::encode(&self.scheme_id.to_string(), self.cartridge_crc32, &w.into_bytes());
        if log_enabled!(target: "savestate", Level::Info) {
            info!(target: "savestate", "Saved {} byte state. Banks: {}", bytes.len(), self.table.bank_string());
        }
        bytes
    }

    // Either the whole state loads or nothing changes.
    pub fn load_state(&mut self, bytes: &[u8]) -> Result<(), CorruptStateError> {
        let file = savestate::decode(bytes)?;
        let expected_tag = self.scheme_id.to_string();
        if file.scheme_tag != expected_tag {
            return Err(CorruptStateError::SchemeMismatch { expected: expected_tag, found: file.scheme_tag });
        }

        if file.image_crc32 != self.cartridge_crc32 {
            return Err(CorruptStateError::ImageMismatch { expected: self.cartridge_crc32, found: file.image_crc32 });
        }

        let mut r = StateReader::new(file.payload);
        let mut table = self.table.clone();
        table.load(&mut r)?;
        let data_bus = r.read_u8()?;
        let scheme_bytes = r.read_len_prefixed()?;
        r.finish()?;

        let mut scheme = self.scheme.clone();
        let mut scheme_reader = StateReader::new(scheme_bytes);
        scheme.load(&mut scheme_reader)?;
        scheme_reader.finish()?;

        self.table = table;
        self.scheme = scheme;
        self.data_bus = data_bus;
        if log_enabled!(target: "savestate", Level::Info) {
            info!(target: "savestate", "Loaded state. Banks: {}", self.table.bank_string());
        }
        Ok(())
    }

    fn on_hotspot(&mut self, event: HotspotEvent) -> bool {
        let Some(hotspot) = classify(self.scheme.layout().hotspots(), event) else {
            return false;
        };

        let switched = self.scheme.on_hotspot(&mut self.table, hotspot, event);
        info!(target: "hotspots", "{:?} {} ({:?}) {}",
            event.access,
            event.address,
            hotspot.kind,
            if switched { "switched" } else { "ignored" },
        );
        switched
    }
}

impl CartridgeBus for CartridgePort {
    fn peek(&mut self, address: u16) -> u8 {
        let event = HotspotEvent::read(address);
        self.on_hotspot(event);

        let value = if event.address.is_in_cartridge_space() {
            match self.table.read(event.address, self.data_bus) {
                Ok(result) => result.resolve(self.data_bus),
                Err(err) => {
                    warn!(target: "bus", "{err} Returning the data bus value ${:02X}.", self.data_bus);
                    self.data_bus
                }
            }
        } else {
            // The cartridge doesn't drive the bus here.
            self.data_bus
        };

        self.data_bus = value;
        self.scheme.on_bus_data(&mut self.table, event.address, value);
        value
    }

    fn poke(&mut self, address: u16, value: u8) -> bool {
        let event = HotspotEvent::write(address, value);
        let switched = self.on_hotspot(event);
        self.data_bus = value;

        let wrote_ram = if switched || !event.address.is_in_cartridge_space() {
            false
        } else {
            self.table.write(event.address, value).unwrap_or_else(|err| {
                warn!(target: "bus", "{err} Write of ${value:02X} ignored.");
                false
            })
        };

        self.scheme.on_bus_data(&mut self.table, event.address, value);
        wrote_ram
    }
}
