//! Checksum algebras used to build execution signatures.
//!
//! Every checksummed kernel folds a stream of 32-bit words — the IEEE754 bit
//! patterns of the floats it touches — into small accumulator states, one per
//! operand stream (A, B, C). An algebra defines how a word enters the state,
//! how a state collapses to a 32-bit signature, and how the three per-stream
//! states combine into the final execution signature.
//!
//! The five algebras reproduce the reference fault-detection study
//! bit-for-bit, including its historical quirks:
//!
//! - one's- and two's-complement addition complement the accumulator on
//!   *every* absorb, not only at finalization;
//! - Fletcher reduces both half-word sums modulo 255 (the Fletcher-16
//!   modulus) inside a 32-bit scheme;
//! - CRC-32 (Castagnoli table) omits the customary final complement.
//!
//! Changing any of these would silently change every published diagnostic
//! coverage figure derived from the signatures, so they are kept as-is.

pub mod crc32;
pub mod fletcher;
pub mod ones;
pub mod twos;
pub mod xor;

pub use crc32::Crc32;
pub use fletcher::Fletcher;
pub use ones::OnesComplement;
pub use twos::TwosComplement;
pub use xor::Xor;

/// The raw IEEE754 bit pattern of `x`, as checksum input.
///
/// No numeric conversion takes place: `-0.0`, NaNs and infinities all map to
/// their exact encodings.
#[inline(always)]
pub fn word_of(x: f32) -> u32 {
    x.to_bits()
}

/// A streaming checksum over 32-bit words.
///
/// Implementations are pure: absorbing the same word sequence from `init()`
/// always produces the same state, which is what makes the resulting
/// execution signatures comparable across runs.
pub trait ChecksumAlgebra {
    /// Running accumulator. May be wider than the final 32-bit signature
    /// (one's-complement carries 64 bits, Fletcher two half-word sums).
    type State: Copy;

    /// The empty-stream state.
    fn init() -> Self::State;

    /// Folds one word into the state.
    fn absorb(state: &mut Self::State, word: u32);

    /// Collapses a state to its 32-bit signature.
    fn finalize(state: Self::State) -> u32;

    /// Combines the three per-stream states (A, B, C) into the final
    /// execution signature of a kernel invocation.
    fn merge(a: Self::State, b: Self::State, c: Self::State) -> u32;

    /// Collapses three in-flight stream states to the 32-bit word a composite
    /// kernel feeds to its second stage. Identical to [`merge`](Self::merge)
    /// unless an algebra overrides it (Fletcher XORs the packed states when
    /// it is the first stage of a pipeline).
    fn mix(a: Self::State, b: Self::State, c: Self::State) -> u32 {
        Self::merge(a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_of_is_a_bit_cast() {
        assert_eq!(word_of(0.0), 0x0000_0000);
        assert_eq!(word_of(-0.0), 0x8000_0000);
        assert_eq!(word_of(1.0), 0x3F80_0000);
        assert_eq!(word_of(-2.5), 0xC020_0000);
        assert_eq!(word_of(f32::INFINITY), 0x7F80_0000);
    }

    #[test]
    fn test_word_of_preserves_nan_payload() {
        let nan = f32::from_bits(0x7FC0_1234);
        assert_eq!(word_of(nan), 0x7FC0_1234);
    }
}
