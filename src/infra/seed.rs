// ============================================================
// Layer 6 — Process Seeding
// ============================================================
// One explicit call at startup makes randomised work in the
// rest of the process reproducible:
//
//   init_seed::<B>(seed)
//     - seeds the burn backend's tensor RNG (B::seed)
//     - records `seed` as the process seed
//
// Only the first call has an effect. Later calls return false
// and leave both the backend and the recorded seed untouched,
// so a library cannot silently reseed the host.
//
// The hold-out split in the reader does NOT use this seed; it
// is driven by the request's split_seed alone.

use std::sync::OnceLock;

use burn::tensor::backend::Backend;

/// Seed used when the host does not pass one.
pub const DEFAULT_SEED: u64 = 12;

static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

/// Seed backend `B` and record the process seed.
/// Returns true if this call performed the initialisation.
pub fn init_seed<B: Backend>(seed: u64) -> bool {
    let mut initialised = false;
    PROCESS_SEED.get_or_init(|| {
        initialised = true;
        seed
    });

    if initialised {
        B::seed(seed);
        tracing::info!("Process seed set to {} ({})", seed, B::name());
    } else {
        tracing::debug!(
            "Process seed already set to {:?}; ignoring {}",
            PROCESS_SEED.get(),
            seed
        );
    }
    initialised
}

/// The seed recorded by [`init_seed`], if it has run.
pub fn process_seed() -> Option<u64> {
    PROCESS_SEED.get().copied()
}
