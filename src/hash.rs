//! Deterministic seed hashing
//!
//! Every avatar is driven by a single 32-bit value derived from the seed
//! string. The hash is a classic `acc * 31 + unit` rolling hash over the
//! seed's UTF-16 code units with 32-bit wrapping, so the same seed produces
//! the same avatar on every platform and in every process.
//!
//! This is not a cryptographic hash. Collisions are harmless here: two seeds
//! that collide simply share an avatar.

/// Hash a seed string into a non-negative 32-bit value.
///
/// The accumulator is a signed 32-bit integer updated as
/// `acc = (acc << 5) - acc + unit` with wrapping after every step. The result
/// is the absolute value of the final accumulator, returned as `u32` so that
/// `i32::MIN` maps to `2147483648` instead of overflowing.
///
/// # Examples
///
/// ```
/// use seedavatar::hash::hash_seed;
///
/// assert_eq!(hash_seed(""), 0);
/// assert_eq!(hash_seed("a"), 97);
/// assert_eq!(hash_seed("ab"), 97 * 31 + 98);
/// assert_eq!(hash_seed("alice"), hash_seed("alice"));
/// ```
pub fn hash_seed(seed: &str) -> u32 {
    let acc = seed.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(i32::from(unit))
    });
    acc.unsigned_abs()
}

/// Extract `bits` bits of `hash` starting at bit `offset`.
///
/// Offsets wrap modulo 32 so styles can index bits past the end of the word
/// without special-casing.
pub fn bits(hash: u32, offset: u32, bits: u32) -> u32 {
    let mask = if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 };
    hash.rotate_right(offset % 32) & mask
}

/// Whether bit `index` of `hash` is set (index wraps modulo 32).
pub fn bit(hash: u32, index: u32) -> bool {
    (hash >> (index % 32)) & 1 == 1
}
