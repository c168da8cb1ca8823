//! Reset code generator

use rand::Rng;

use crate::domain::entities::otp_record::{CODE_ALPHABET, CODE_LENGTH};

/// Generates a random reset code
///
/// Each of the 5 characters is drawn independently and uniformly from the
/// 36-symbol alphabet `0-9A-Z`, giving roughly 25.8 bits of entropy. The
/// code is a short-lived transport token typed by a human, not a
/// cryptographic secret, so `thread_rng` is sufficient here.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
