//! Two's-complement addition checksum.
//!
//! A 32-bit sum that is negated (`!s + 1`) after every absorb, mirroring the
//! per-step complement of the one's-complement algebra. The negation on each
//! step makes word order significant. Reproduced from the reference study
//! as-is.

use crate::checksum::ChecksumAlgebra;

/// Two's-complement accumulator algebra.
pub struct TwosComplement;

impl ChecksumAlgebra for TwosComplement {
    type State = u32;

    #[inline(always)]
    fn init() -> u32 {
        0
    }

    #[inline(always)]
    fn absorb(state: &mut u32, word: u32) {
        *state = state.wrapping_add(word).wrapping_neg();
    }

    #[inline(always)]
    fn finalize(state: u32) -> u32 {
        state
    }

    #[inline(always)]
    fn merge(a: u32, b: u32, c: u32) -> u32 {
        a.wrapping_add(b).wrapping_add(c).wrapping_neg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_negates_after_add() {
        let mut state = TwosComplement::init();
        TwosComplement::absorb(&mut state, 5);
        assert_eq!(state, 5u32.wrapping_neg());

        // Second absorb: -(-5 + 3) = 2
        TwosComplement::absorb(&mut state, 3);
        assert_eq!(state, 2);
    }

    #[test]
    fn test_order_dependence() {
        let mut ab = TwosComplement::init();
        TwosComplement::absorb(&mut ab, 1);
        TwosComplement::absorb(&mut ab, 2);

        let mut ba = TwosComplement::init();
        TwosComplement::absorb(&mut ba, 2);
        TwosComplement::absorb(&mut ba, 1);

        // -(−1 + 2) = −1 versus -(−2 + 1) = 1
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_merge_negates_sum() {
        assert_eq!(TwosComplement::merge(1, 2, 3), 6u32.wrapping_neg());
        assert_eq!(TwosComplement::merge(0, 0, 0), 0);
    }
}
