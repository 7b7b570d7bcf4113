use crate::utils::error::{PortmanteauError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one candidate uniformly at random, from a generator seeded
/// fresh for this call.
pub fn pick(candidates: &[String]) -> Result<&str> {
    let mut rng = StdRng::from_entropy();
    pick_with(candidates, &mut rng)
}

pub fn pick_with<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Result<&'a str> {
    if candidates.is_empty() {
        return Err(PortmanteauError::EmptyCandidatesError);
    }
    let index = rng.gen_range(0..candidates.len());
    Ok(&candidates[index])
}
