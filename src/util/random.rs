//! Seeding for the page's random picks.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A fresh generator seeded from the clock.
///
/// In the browser the seed mixes `Date.now()` with `Math.random()`, since
/// `SystemTime` is unavailable on `wasm32-unknown-unknown`.
pub fn seeded_rng() -> SmallRng {
    #[cfg(feature = "csr")]
    {
        SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits())
    }
    #[cfg(not(feature = "csr"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos());
        SmallRng::seed_from_u64(u64::from(nanos))
    }
}
