// What the cartridge drives onto the data bus for a single read. Bits outside of the mask
// aren't driven, so they keep whatever value was last left on the bus.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadResult {
    pub value: u8,
    pub mask: u8,
}

impl ReadResult {
    pub const OPEN_BUS: Self = Self { value: 0, mask: 0b0000_0000 };

    pub fn full(value: u8) -> Self {
        Self { value, mask: 0b1111_1111 }
    }

    pub fn resolve(self, data_bus_value: u8) -> u8 {
        (self.value & self.mask) | (data_bus_value & !self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_bus_keeps_data_bus() {
        assert_eq!(ReadResult::OPEN_BUS.resolve(0xA5), 0xA5);
    }

    #[test]
    fn full_ignores_data_bus() {
        assert_eq!(ReadResult::full(0x12).resolve(0xFF), 0x12);
    }

    #[test]
    fn undriven_bits_come_from_the_data_bus() {
        let result = ReadResult { value: 0b0011_0000, mask: 0b0011_0000 };
        assert_eq!(result.resolve(0b1100_1111), 0b1111_1111);
        let result = ReadResult { value: 0b0000_0000, mask: 0b0011_0000 };
        assert_eq!(result.resolve(0b1111_1111), 0b1100_1111);
    }
}
