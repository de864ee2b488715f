#![cfg_attr(not(test), no_std)]

//! Conversion of raw ADC readings from an NTC thermistor voltage divider
//! into temperatures, using the Beta-parameter equation.

pub use measurements;

pub mod config;
pub mod converter;
pub mod slot;

pub use config::NtcConfig;
pub use converter::{NtcConverter, NtcError};
pub use slot::NtcSlot;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AdcResolution {
    BITS16,
    BITS14,
    BITS12,
    BITS10,
    BITS8,
}

impl Into<u32> for AdcResolution {
    // maximum representable code, not the full-scale count
    fn into(self) -> u32 {
        match self {
            AdcResolution::BITS16 => (1 << 16) - 1,
            AdcResolution::BITS14 => (1 << 14) - 1,
            AdcResolution::BITS12 => (1 << 12) - 1,
            AdcResolution::BITS10 => (1 << 10) - 1,
            AdcResolution::BITS8 => (1 << 8) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AdcResolution;

    #[test]
    fn test_resolution_max_code() {
        let max: u32 = AdcResolution::BITS12.into();
        assert_eq!(max, 4095);
        let max: u32 = AdcResolution::BITS8.into();
        assert_eq!(max, 255);
    }
}
