use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Creates a fast generator, seeded when `seed` is given.
///
/// ```
/// use abacus_sim::random::create_rng;
/// use rand::Rng;
/// let mut a = create_rng(Some(42));
/// let mut b = create_rng(Some(42));
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
