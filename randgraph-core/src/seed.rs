//! Seed derivation for independent generation runs.
//!
//! Member seeds are successive outputs of a SplitMix64 stream (Steele, Lea
//! and Flood, "Fast splittable pseudorandom number generators", OOPSLA 2014)
//! whose state starts at the base seed. Any member's seed is computed
//! directly from its position, so members never share a random source and
//! results do not depend on which thread ran which member.

/// Weyl increment of the SplitMix64 state (the 64-bit golden ratio).
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed for ensemble member `member` from `base_seed`.
///
/// Member `i` receives output `i` of SplitMix64 seeded with `base_seed`.
///
/// # Examples
/// ```
/// use randgraph_core::member_seed;
///
/// assert_eq!(member_seed(7, 3), member_seed(7, 3));
/// assert_ne!(member_seed(7, 3), member_seed(7, 4));
/// ```
#[inline]
#[must_use]
pub fn member_seed(base_seed: u64, member: usize) -> u64 {
    let steps = (member as u64).wrapping_add(1);
    finalise(base_seed.wrapping_add(steps.wrapping_mul(GAMMA)))
}

/// SplitMix64 output function (variant 13 of Stafford's `Mix64`).
#[inline]
const fn finalise(state: u64) -> u64 {
    let mixed = (state ^ (state >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    let mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
