//! Lane-side checksum accumulation for the AVX2 kernels.
//!
//! The vector kernels absorb whole registers: each of the 8 integer lanes
//! runs its slice of the stream, and at loop exit the per-lane partials are
//! folded horizontally — in lane order — into the same scalar state the
//! scalar algebra uses. How much of the algebra survives lane-parallel form
//! varies:
//!
//! - XOR and two's-complement apply their absorb step lane-wise.
//! - One's-complement widens to 64-bit lanes (`unpacklo`/`unpackhi` against
//!   zero, `add_epi64`) because its end-around-carry fold is not
//!   independently associative across 32-bit lanes; the fold-and-complement
//!   happens during the horizontal reduction.
//! - Fletcher keeps lane-wise wrapping sums and runs the positional
//!   `sum1`/`sum2` recurrence over the 8 lane totals at fold time.
//! - CRC-32 has no practical SIMD form: lanes are scalarized immediately,
//!   one table lookup chain per word, and the fold chains that remainder
//!   into the stream state.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::checksum::{ones, ChecksumAlgebra, Crc32, Fletcher, OnesComplement, TwosComplement, Xor};
use crate::simd::avx2::f32x8::{F32x8, LANE_COUNT};

/// Copies a packed integer register out to 8 words, lane 0 first.
#[inline(always)]
fn to_words(v: __m256i) -> [u32; LANE_COUNT] {
    let mut words = [0u32; LANE_COUNT];
    unsafe { _mm256_storeu_si256(words.as_mut_ptr() as *mut __m256i, v) };
    words
}

/// A checksum algebra with a lane-parallel accumulation form.
///
/// `Lanes` is the vector-path accumulator; [`lanes_fold`](Self::lanes_fold)
/// performs the horizontal reduction into the scalar [`ChecksumAlgebra`]
/// state. Folding is defined to visit lanes in order 0..7 so signatures are
/// reproducible.
pub trait LaneAlgebra: ChecksumAlgebra {
    /// Vector-path accumulator state.
    type Lanes: Copy;

    /// The empty lane accumulator.
    fn lanes_init() -> Self::Lanes;

    /// Absorbs the 8 reinterpreted words of `v`, one per lane.
    fn lanes_absorb(lanes: &mut Self::Lanes, v: F32x8);

    /// Horizontally reduces the per-lane partials into `state`.
    fn lanes_fold(lanes: Self::Lanes, state: &mut Self::State);
}

impl LaneAlgebra for Xor {
    type Lanes = __m256i;

    #[inline(always)]
    fn lanes_init() -> __m256i {
        unsafe { _mm256_setzero_si256() }
    }

    #[inline(always)]
    fn lanes_absorb(lanes: &mut __m256i, v: F32x8) {
        *lanes = unsafe { _mm256_xor_si256(*lanes, v.to_bits()) };
    }

    #[inline(always)]
    fn lanes_fold(lanes: __m256i, state: &mut u32) {
        for word in to_words(lanes) {
            Xor::absorb(state, word);
        }
    }
}

impl LaneAlgebra for TwosComplement {
    type Lanes = __m256i;

    #[inline(always)]
    fn lanes_init() -> __m256i {
        unsafe { _mm256_setzero_si256() }
    }

    #[inline(always)]
    fn lanes_absorb(lanes: &mut __m256i, v: F32x8) {
        // Lane-wise add then negate, the same fold-every-step the scalar
        // algebra performs: !(s + w) + 1.
        unsafe {
            let all_ones = _mm256_set1_epi32(-1);
            let one = _mm256_set1_epi32(1);
            let sum = _mm256_add_epi32(*lanes, v.to_bits());
            *lanes = _mm256_add_epi32(_mm256_xor_si256(sum, all_ones), one);
        }
    }

    #[inline(always)]
    fn lanes_fold(lanes: __m256i, state: &mut u32) {
        for word in to_words(lanes) {
            TwosComplement::absorb(state, word);
        }
    }
}

/// One's-complement lane accumulator: 64-bit lane sums split across two
/// registers. `lo` carries lanes {0, 1, 4, 5}, `hi` lanes {2, 3, 6, 7} — the
/// split `unpacklo`/`unpackhi` produce on 256-bit registers.
#[derive(Copy, Clone)]
pub struct WideLanes {
    lo: __m256i,
    hi: __m256i,
}

impl LaneAlgebra for OnesComplement {
    type Lanes = WideLanes;

    #[inline(always)]
    fn lanes_init() -> WideLanes {
        unsafe {
            WideLanes {
                lo: _mm256_setzero_si256(),
                hi: _mm256_setzero_si256(),
            }
        }
    }

    #[inline(always)]
    fn lanes_absorb(lanes: &mut WideLanes, v: F32x8) {
        unsafe {
            let zero = _mm256_setzero_si256();
            let words = v.to_bits();
            lanes.lo = _mm256_add_epi64(lanes.lo, _mm256_unpacklo_epi32(words, zero));
            lanes.hi = _mm256_add_epi64(lanes.hi, _mm256_unpackhi_epi32(words, zero));
        }
    }

    #[inline(always)]
    fn lanes_fold(lanes: WideLanes, state: &mut u64) {
        let mut lo = [0u64; 4];
        let mut hi = [0u64; 4];
        unsafe {
            _mm256_storeu_si256(lo.as_mut_ptr() as *mut __m256i, lanes.lo);
            _mm256_storeu_si256(hi.as_mut_ptr() as *mut __m256i, lanes.hi);
        }
        // Restore lane order 0..7 from the unpack interleave.
        for lane in [lo[0], lo[1], hi[0], hi[1], lo[2], lo[3], hi[2], hi[3]] {
            ones::fold_wide(state, lane);
        }
    }
}

impl LaneAlgebra for Fletcher {
    type Lanes = __m256i;

    #[inline(always)]
    fn lanes_init() -> __m256i {
        unsafe { _mm256_setzero_si256() }
    }

    #[inline(always)]
    fn lanes_absorb(lanes: &mut __m256i, v: F32x8) {
        // Plain wrapping lane sums; the positional recurrence runs over the
        // lane totals at fold time.
        *lanes = unsafe { _mm256_add_epi32(*lanes, v.to_bits()) };
    }

    #[inline(always)]
    fn lanes_fold(lanes: __m256i, state: &mut (u16, u16)) {
        for word in to_words(lanes) {
            Fletcher::absorb(state, word);
        }
    }
}

impl LaneAlgebra for Crc32 {
    /// A running scalar remainder; CRC lanes are scalarized on absorb.
    type Lanes = u32;

    #[inline(always)]
    fn lanes_init() -> u32 {
        Crc32::init()
    }

    #[inline(always)]
    fn lanes_absorb(lanes: &mut u32, v: F32x8) {
        for word in to_words(v.to_bits()) {
            Crc32::absorb(lanes, word);
        }
    }

    #[inline(always)]
    fn lanes_fold(lanes: u32, state: &mut u32) {
        // CRC-of-CRC chaining, as in the algebra's stream merge.
        Crc32::absorb(state, lanes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::word_of;

    fn sample() -> F32x8 {
        unsafe { F32x8::load_unaligned([1.0f32, -2.0, 3.5, 0.0, -0.0, 8.25, -1.5, 4.0].as_ptr()) }
    }

    #[test]
    fn test_xor_lanes_match_scalar_multiset() {
        let v = sample();
        let mut lanes = <Xor as LaneAlgebra>::lanes_init();
        Xor::lanes_absorb(&mut lanes, v);

        let mut folded = Xor::init();
        Xor::lanes_fold(lanes, &mut folded);

        let mut scalar = Xor::init();
        for x in v.to_array() {
            Xor::absorb(&mut scalar, word_of(x));
        }
        assert_eq!(folded, scalar);
    }

    #[test]
    fn test_twos_lanes_negate_each_step() {
        let v = F32x8::splat(1.0);
        let mut lanes = <TwosComplement as LaneAlgebra>::lanes_init();
        TwosComplement::lanes_absorb(&mut lanes, v);

        // One absorb of w into a zero lane leaves -w in every lane.
        let mut folded = TwosComplement::init();
        TwosComplement::lanes_fold(lanes, &mut folded);

        let mut expected = TwosComplement::init();
        for _ in 0..8 {
            TwosComplement::absorb(&mut expected, word_of(1.0).wrapping_neg());
        }
        assert_eq!(folded, expected);
    }

    #[test]
    fn test_ones_lane_order_is_stable() {
        let v = sample();
        let mut lanes = <OnesComplement as LaneAlgebra>::lanes_init();
        OnesComplement::lanes_absorb(&mut lanes, v);

        let mut folded = OnesComplement::init();
        OnesComplement::lanes_fold(lanes, &mut folded);

        // One absorb per lane: the fold must see the plain lane values in
        // lane order.
        let mut expected = OnesComplement::init();
        for x in v.to_array() {
            ones::fold_wide(&mut expected, u64::from(word_of(x)));
        }
        assert_eq!(folded, expected);
    }

    #[test]
    fn test_crc_lanes_scalarize_in_lane_order() {
        let v = sample();
        let mut lanes = <Crc32 as LaneAlgebra>::lanes_init();
        Crc32::lanes_absorb(&mut lanes, v);

        let mut expected = Crc32::init();
        for x in v.to_array() {
            Crc32::absorb(&mut expected, word_of(x));
        }
        assert_eq!(lanes, expected);
    }
}
