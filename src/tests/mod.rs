mod snapshot;


pub use source::MemorySource;

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Static test location (Oxford, UK)
pub const STATIC_LAT_DDEG: f64 = 51.7548;
pub const STATIC_LONG_DDEG: f64 = -1.2544;

/// Random (seeded) packed snapshot
pub fn random_snapshot(seed: u64) -> Vec<u8> {
    use crate::prelude::SNAPSHOT_BYTES;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut bytes = vec![0u8; SNAPSHOT_BYTES];
    rng.fill(&mut bytes[..]);
    bytes
}
