//! LED indicator
//!
//! Toggles a GPIO LED on switch activity.

use embedded_hal::digital::StatefulOutputPin;
use gantry_core::traits::Indicator;

/// LED driven from a GPIO pin
///
/// The pin can be configured as active-high (default) or active-low.
pub struct LedIndicator<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = LED on)
    on: bool,
}

impl<P: StatefulOutputPin> LedIndicator<P> {
    /// Create a new LED indicator, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the LED
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Drive the LED to a state
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        // Output errors are not actionable for an indicator
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Indicator for LedIndicator<P> {
    fn toggle(&mut self) {
        self.set_on(!self.on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_active_high_toggle() {
        let mut led = LedIndicator::new_active_high(MockPin { high: true });
        assert!(!led.is_on());
        assert!(!led.pin.high);

        led.toggle();
        assert!(led.is_on());
        assert!(led.pin.high);

        led.toggle();
        assert!(!led.is_on());
        assert!(!led.pin.high);
    }

    #[test]
    fn test_active_low_toggle() {
        let mut led = LedIndicator::new_active_low(MockPin { high: false });
        // Off means pin high for active-low
        assert!(!led.is_on());
        assert!(led.pin.high);

        led.toggle();
        assert!(led.is_on());
        assert!(!led.free().high);
    }

    #[test]
    fn test_indicator_trait() {
        fn blink<I: Indicator>(i: &mut I) {
            i.toggle();
            i.toggle();
            i.toggle();
        }

        let mut led = LedIndicator::new_active_high(MockPin { high: false });
        blink(&mut led);
        assert!(led.is_on());
    }
}
