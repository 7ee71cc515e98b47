//! Adapters from common embedded crates to the collaborator traits.
//!
//! Enable the `embedded-hal` feature for GPIO input and delay adapters, and the
//! `rand` feature for an adapter over any `rand_core` generator.

#[cfg(feature = "embedded-hal")]
pub use self::pins::{ActiveLowInputs, DelayPresenter};

#[cfg(feature = "rand")]
pub use self::rng::RngSignals;

#[cfg(feature = "embedded-hal")]
mod pins {
    use crate::io::{Presenter, RawSampler};
    use crate::time::TimeDuration;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::InputPin;

    /// Samples pull-up buttons wired to ground.
    ///
    /// A low level reads as pressed. Read errors read as released.
    pub struct ActiveLowInputs<P: InputPin, const N: usize> {
        pins: [P; N],
    }

    impl<P: InputPin, const N: usize> ActiveLowInputs<P, N> {
        /// Wraps pins that are already configured as pull-up inputs.
        pub fn new(pins: [P; N]) -> Self {
            Self { pins }
        }

        /// Releases the pins.
        pub fn into_inner(self) -> [P; N] {
            self.pins
        }
    }

    impl<P: InputPin, const N: usize> RawSampler for ActiveLowInputs<P, N> {
        fn sample(&mut self, channel: usize) -> bool {
            self.pins[channel].is_low().unwrap_or(false)
        }
    }

    /// Blocking presenter over an `embedded-hal` delay provider.
    pub struct DelayPresenter<Dl: DelayNs> {
        delay: Dl,
    }

    impl<Dl: DelayNs> DelayPresenter<Dl> {
        /// Wraps a delay provider.
        pub fn new(delay: Dl) -> Self {
            Self { delay }
        }
    }

    impl<Dl: DelayNs, D: TimeDuration> Presenter<D> for DelayPresenter<Dl> {
        fn hold(&mut self, duration: D) {
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            self.delay.delay_ms(millis);
        }
    }

}

#[cfg(feature = "rand")]
mod rng {
    use crate::io::RandomSource;
    use crate::types::SignalId;
    use rand_core::RngCore;

    /// Draws sequence elements from a `rand_core` generator.
    pub struct RngSignals<R: RngCore> {
        rng: R,
    }

    impl<R: RngCore> RngSignals<R> {
        /// Wraps a seeded generator.
        pub fn new(rng: R) -> Self {
            Self { rng }
        }
    }

    impl<R: RngCore> RandomSource for RngSignals<R> {
        fn next_signal(&mut self, signal_count: u8) -> SignalId {
            if signal_count == 0 {
                return 0;
            }
            (self.rng.next_u32() % u32::from(signal_count)) as SignalId
        }
    }

}
