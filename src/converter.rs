use measurements::{Resistance, Temperature, Voltage};
use micromath::F32Ext;

use crate::config::NtcConfig;

/*
node voltage = adc_code / adc_max * Vref
R_ntc = R_fixed * node / (Vref - node)
T = 1 / (1/298.15 + ln(R_ntc / R25) / B)
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub enum NtcError {
    /// Operation against a slot with no live converter
    InvalidArgument,
    /// `adc_max` is zero, the node voltage cannot be derived
    ZeroResolution,
    /// Node voltage reached the reference voltage, the divider is
    /// saturated or the configuration is wrong
    ReferenceVoltage,
    /// Init attempted on a slot that already holds a converter
    AlreadyInitialized,
}

/// Converts raw ADC codes from an NTC voltage divider into temperatures.
///
/// Owns one [`NtcConfig`] and keeps the node voltage and resistance of the
/// last successful conversion around for inspection. Failed conversions leave
/// them untouched.
pub struct NtcConverter {
    config: NtcConfig,
    resistance: Resistance,
    node_voltage: Voltage,
}

impl NtcConverter {
    pub fn new(config: NtcConfig) -> Self {
        Self {
            config,
            resistance: Resistance::from_ohms(0.0),
            node_voltage: Voltage::from_volts(0.0),
        }
    }

    pub fn config(&self) -> &NtcConfig {
        &self.config
    }

    /// Replaces the configuration wholesale. The last measurement is kept as
    /// is, every conversion overwrites it before it can be read.
    pub fn set_config(&mut self, config: NtcConfig) {
        self.config = config;
    }

    /// Derives the NTC resistance from a raw ADC code.
    pub fn compute_resistance(&mut self, adc_code: u16) -> Result<Resistance, NtcError> {
        let conf = &self.config;
        if conf.adc_max == 0 {
            return Err(NtcError::ZeroResolution);
        }

        let v_ref = conf.v_ref.as_volts();
        let node = f64::from(adc_code) / f64::from(conf.adc_max) * v_ref;
        if node >= v_ref {
            return Err(NtcError::ReferenceVoltage);
        }

        let resistance = conf.r_fixed.as_ohms() * node / (v_ref - node);
        self.node_voltage = Voltage::from_volts(node);
        self.resistance = Resistance::from_ohms(resistance);
        Ok(self.resistance)
    }

    /// Applies the Beta-parameter equation to a known NTC resistance.
    ///
    /// The resistance is not range checked, a non-positive value propagates
    /// through the logarithm as NaN or infinity.
    pub fn resistance_to_temperature(&self, resistance: Resistance) -> Temperature {
        let t25 = Temperature::from_celsius(25.0).as_kelvin();
        let b = self.config.b_value.as_kelvin();
        let kelvin = 1.0 / (1.0 / t25 + ln(resistance.as_ohms() / self.config.r25.as_ohms()) / b);
        Temperature::from_kelvin(kelvin)
    }

    /// Full conversion from raw ADC code to temperature, the primary entry
    /// point when sampling a live sensor.
    pub fn compute_temperature(&mut self, adc_code: u16) -> Result<Temperature, NtcError> {
        let resistance = self.compute_resistance(adc_code)?;
        Ok(self.resistance_to_temperature(resistance))
    }

    pub fn last_resistance(&self) -> Resistance {
        self.resistance
    }

    pub fn last_node_voltage(&self) -> Voltage {
        self.node_voltage
    }
}

fn ln(value: f64) -> f64 {
    (value as f32).ln() as f64
}
