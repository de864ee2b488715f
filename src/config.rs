use measurements::{Resistance, Temperature, Voltage};

use crate::AdcResolution;

/// Electrical description of the divider and its NTC element.
///
/// The fixed resistor sits in the upper leg, the NTC in the lower leg, so the
/// node voltage rises with the NTC resistance.
#[derive(Clone, Copy)]
pub struct NtcConfig {
    /// Maximum representable ADC code (e.g. 4095 for a 12-bit ADC)
    pub adc_max: u32,
    /// Supply voltage of the divider
    pub v_ref: Voltage,
    /// B constant of the NTC, in kelvin
    pub b_value: Temperature,
    /// Fixed resistor of the divider
    pub r_fixed: Resistance,
    /// NTC resistance at 25 C, the calibration reference point
    pub r25: Resistance,
}

impl NtcConfig {
    pub fn new(
        adc_max: u32,
        v_ref: Voltage,
        b_value: Temperature,
        r_fixed: Resistance,
        r25: Resistance,
    ) -> Self {
        Self {
            adc_max,
            v_ref,
            b_value,
            r_fixed,
            r25,
        }
    }

    pub fn with_resolution(
        resolution: AdcResolution,
        v_ref: Voltage,
        b_value: Temperature,
        r_fixed: Resistance,
        r25: Resistance,
    ) -> Self {
        Self::new(resolution.into(), v_ref, b_value, r_fixed, r25)
    }
}

impl Default for NtcConfig {
    // 12 bit ADC on a 3.3V rail with the common 10k/B3950 divider
    fn default() -> Self {
        Self::with_resolution(
            AdcResolution::BITS12,
            Voltage::from_volts(3.3),
            Temperature::from_kelvin(3950.0),
            Resistance::from_ohms(10_000.0),
            Resistance::from_ohms(10_000.0),
        )
    }
}

#[cfg(feature = "defmt-log")]
impl defmt::Format for NtcConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "[adc_max: {}] [v_ref: {} V] [b: {} K] [r_fixed: {} ohm] [r25: {} ohm]",
            self.adc_max,
            self.v_ref.as_volts(),
            self.b_value.as_kelvin(),
            self.r_fixed.as_ohms(),
            self.r25.as_ohms()
        )
    }
}
