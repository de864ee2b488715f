use measurements::{Resistance, Temperature};

use crate::config::NtcConfig;
use crate::converter::{NtcConverter, NtcError};

/// A caller-owned slot holding at most one [`NtcConverter`].
///
/// Mirrors an explicit init/release lifecycle: the slot starts empty, `init`
/// makes it live, `release` empties it again. Double init and double release
/// are rejected instead of overwriting or double-freeing, and every
/// computation against an empty slot fails with
/// [`NtcError::InvalidArgument`].
#[derive(Default)]
pub struct NtcSlot {
    converter: Option<NtcConverter>,
}

impl NtcSlot {
    pub const fn empty() -> Self {
        Self { converter: None }
    }

    pub fn is_live(&self) -> bool {
        self.converter.is_some()
    }

    /// Puts a converter into the slot. Fails if one is already live, the
    /// existing converter is never overwritten.
    pub fn init(&mut self, config: NtcConfig) -> Result<(), NtcError> {
        if self.converter.is_some() {
            return Err(NtcError::AlreadyInitialized);
        }
        self.converter = Some(NtcConverter::new(config));
        Ok(())
    }

    /// Replaces the live converter's configuration wholesale.
    pub fn modify(&mut self, config: NtcConfig) -> Result<(), NtcError> {
        self.get_mut()?.set_config(config);
        Ok(())
    }

    /// Empties the slot. A release on an already empty slot fails instead of
    /// misbehaving.
    pub fn release(&mut self) -> Result<(), NtcError> {
        match self.converter.take() {
            Some(_) => Ok(()),
            None => Err(NtcError::InvalidArgument),
        }
    }

    pub fn get(&self) -> Result<&NtcConverter, NtcError> {
        self.converter.as_ref().ok_or(NtcError::InvalidArgument)
    }

    pub fn get_mut(&mut self) -> Result<&mut NtcConverter, NtcError> {
        self.converter.as_mut().ok_or(NtcError::InvalidArgument)
    }

    pub fn compute_resistance(&mut self, adc_code: u16) -> Result<Resistance, NtcError> {
        self.get_mut()?.compute_resistance(adc_code)
    }

    pub fn resistance_to_temperature(&self, resistance: Resistance) -> Result<Temperature, NtcError> {
        Ok(self.get()?.resistance_to_temperature(resistance))
    }

    pub fn compute_temperature(&mut self, adc_code: u16) -> Result<Temperature, NtcError> {
        self.get_mut()?.compute_temperature(adc_code)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use measurements::Resistance;

    use crate::config::NtcConfig;
    use crate::converter::NtcError;

    use super::NtcSlot;

    #[test]
    fn test_lifecycle() {
        let mut slot = NtcSlot::empty();
        assert!(!slot.is_live());
        assert!(slot.init(NtcConfig::default()).is_ok());
        assert!(slot.is_live());
        assert!(slot.release().is_ok());
        assert!(!slot.is_live());
    }

    #[test]
    fn test_double_init_is_rejected() {
        let mut slot = NtcSlot::empty();
        slot.init(NtcConfig::default()).unwrap();
        let first = slot.compute_resistance(2048).unwrap();

        assert_eq!(slot.init(NtcConfig::default()), Err(NtcError::AlreadyInitialized));
        // the live converter survived the failed init
        assert_eq!(slot.get().unwrap().last_resistance(), first);
    }

    #[test]
    fn test_double_release_is_rejected() {
        let mut slot = NtcSlot::empty();
        slot.init(NtcConfig::default()).unwrap();
        assert!(slot.release().is_ok());
        assert_eq!(slot.release(), Err(NtcError::InvalidArgument));
    }

    #[test]
    fn test_operations_on_empty_slot() {
        let mut slot = NtcSlot::empty();
        assert_eq!(slot.modify(NtcConfig::default()), Err(NtcError::InvalidArgument));
        assert_eq!(slot.compute_resistance(2048), Err(NtcError::InvalidArgument));
        assert_eq!(slot.compute_temperature(2048), Err(NtcError::InvalidArgument));
        assert_eq!(
            slot.resistance_to_temperature(Resistance::from_ohms(10_000.0)),
            Err(NtcError::InvalidArgument)
        );
        assert!(slot.get().is_err());
    }

    #[test]
    fn test_reinit_after_release() {
        let mut slot = NtcSlot::empty();
        slot.init(NtcConfig::default()).unwrap();
        slot.release().unwrap();
        assert!(slot.init(NtcConfig::default()).is_ok());
        assert!(slot.compute_temperature(2048).is_ok());
    }

    #[test]
    fn test_conversion_through_slot() {
        let mut slot = NtcSlot::empty();
        slot.init(NtcConfig::default()).unwrap();
        let temperature = slot.compute_temperature(2048).unwrap();
        assert_float_absolute_eq!(temperature.as_celsius(), 24.989, 0.01);

        let resistance = slot.compute_resistance(2048).unwrap();
        let roundtrip = slot.resistance_to_temperature(resistance).unwrap();
        assert_eq!(roundtrip, temperature);
    }
}
