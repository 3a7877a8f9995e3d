//! Short random identifiers for client-side keys
//!
//! Ids are the first seven base-36 digits of a uniform random fraction.
//! That is roughly 36 bits of entropy: collisions become likely after tens
//! of thousands of ids, and the source is not suitable for anything
//! security-sensitive. Use them for UI element keys and similar throwaway
//! labels, never as persistent or distributed identifiers. No
//! deduplication is attempted.

use rand::Rng;

/// Number of base-36 digits in a generated id
pub const ID_LENGTH: usize = 7;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short opaque id from the thread-local generator
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Generates an id from the given generator
///
/// Seeded generators give reproducible ids.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut fraction: f64 = rng.gen();
    let mut id = String::with_capacity(ID_LENGTH);

    for _ in 0..ID_LENGTH {
        fraction *= 36.0;
        let digit = fraction.floor();
        fraction -= digit;
        id.push(BASE36_DIGITS[(digit as usize).min(35)] as char);
    }

    id
}
