//! The shared faker handed to clients and seed builders.

use crate::generators::{numeric, text, uuid};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard};

/// Enums the faker can pick a random variant from.
///
/// Implementations list every variant that is valid to send over the wire;
/// placeholder variants such as `Unspecified` may be left out.
pub trait FakeEnum: Copy + 'static {
    /// Variants eligible for random selection.
    const VARIANTS: &'static [Self];
}

/// Random value source for request fields.
///
/// `Faker::new()` is seeded from OS entropy, so values differ from run to
/// run. `Faker::seeded(seed)` makes the sequence of values reproducible for
/// a single-threaded caller.
pub struct Faker {
    rng: Mutex<StdRng>,
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Faker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Faker").finish_non_exhaustive()
    }
}

impl Faker {
    /// Create a faker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a faker with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the RNG in an invalid state.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Unique e-mail address.
    pub fn email(&self) -> String {
        text::generate_email(&mut *self.rng())
    }

    pub fn first_name(&self) -> String {
        text::pick(&mut *self.rng(), text::FIRST_NAMES)
    }

    pub fn last_name(&self) -> String {
        text::pick(&mut *self.rng(), text::LAST_NAMES)
    }

    pub fn middle_name(&self) -> String {
        text::pick(&mut *self.rng(), text::MIDDLE_NAMES)
    }

    /// Russian mobile number in `+7XXXXXXXXXX` form.
    pub fn phone_number(&self) -> String {
        text::generate_phone_number(&mut *self.rng())
    }

    /// Operation amount between 1.00 and 100.00 with two decimal places.
    pub fn amount(&self) -> f64 {
        numeric::generate_amount(&mut *self.rng(), 1.0, 100.0)
    }

    /// Merchant category for purchase operations.
    pub fn category(&self) -> String {
        text::pick(&mut *self.rng(), text::CATEGORIES)
    }

    /// Random variant of `E`.
    pub fn enum_value<E: FakeEnum>(&self) -> E {
        // An empty variant list is a programming error in the FakeEnum impl.
        *E::VARIANTS
            .choose(&mut *self.rng())
            .unwrap_or_else(|| panic!("FakeEnum impl declares no variants"))
    }

    /// Random UUID v4 as a string.
    pub fn uuid(&self) -> String {
        uuid::generate_uuid_v4(&mut *self.rng()).to_string()
    }
}
