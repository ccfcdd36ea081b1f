use std::fmt;
use std::str::FromStr;

// The 6507 only brings out 13 address lines, so everything above A12 is ignored by the
// cartridge port.
pub const ADDRESS_MASK: u16 = 0x1FFF;
// A12 selects the cartridge.
const CARTRIDGE_SELECT: u16 = 0x1000;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct CartAddress(u16);

impl CartAddress {
    pub const fn new(value: u16) -> CartAddress {
        CartAddress(value & ADDRESS_MASK)
    }

    pub const fn to_raw(self) -> u16 {
        self.0
    }

    pub const fn masked(self, mask: u16) -> u16 {
        self.0 & mask
    }

    pub const fn is_in_cartridge_space(self) -> bool {
        self.0 & CARTRIDGE_SELECT != 0
    }
}

impl fmt::Display for CartAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

impl FromStr for CartAddress {
    type Err = String;

    fn from_str(value: &str) -> Result<CartAddress, String> {
        let trimmed = value.trim_start_matches('$').trim_start_matches("0x");
        let raw = u16::from_str_radix(trimmed, 16)
            .map_err(|err| format!("Invalid address '{value}': {err}"))?;
        Ok(CartAddress::new(raw))
    }
}
