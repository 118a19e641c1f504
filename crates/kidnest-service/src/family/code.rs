//! Random family-code generation.

use rand::RngExt;

/// Length of a family code.
pub const CODE_LENGTH: usize = 6;

/// Characters a family code is drawn from (36^6 ≈ 2.1 billion codes).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random 6-character uppercase alphanumeric family code.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
