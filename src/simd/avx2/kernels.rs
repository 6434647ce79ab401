//! Vectorized multiply kernels with checksum placements.
//!
//! Structure shared by every kernel here: for each (i, k) term, broadcast
//! `alpha * A[i][k]` across 8 lanes, then walk C's row 8 columns at a time —
//! unaligned load of B and C, lane-wise multiply and add, store back — with a
//! scalar tail loop for the last `n % 8` columns. The placements mirror the
//! scalar family:
//!
//! - **external** absorbs, once per i-row, the last B/C registers the row's
//!   vector loop produced (and the last `a_part`). Tail elements are not
//!   observed, matching the reference kernels.
//! - **intermediate** absorbs the last B/C registers of each (i, k) term
//!   plus every tail element of that term.
//! - **internal** absorbs every register pair at every vector step plus
//!   every tail element.
//!
//! Per stream, the vector-path lanes are horizontally folded first, then the
//! tail accumulator is chained in (only when a tail exists). That fixed
//! order matters for the fold-every-step algebras, which are not
//! order-independent.
//!
//! When `n < 8` the vector loop never executes and register absorption is
//! skipped entirely; the signature is then defined by lane-folding the empty
//! accumulator plus whatever the tail observed.

use crate::checksum::{word_of, ChecksumAlgebra};
use crate::simd::avx2::f32x8::{F32x8, LANE_COUNT};
use crate::simd::avx2::lanes::LaneAlgebra;

/// Vectorized golden kernel: the multiply alone, constant zero signature.
pub fn multiply(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let vec_n = n - (n % LANE_COUNT);

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            let a_vec = F32x8::splat(a_part);
            let b_row = kk * n;
            let c_row = i * n;

            let mut j = 0;
            while j < vec_n {
                unsafe {
                    let b_vec = F32x8::load_unaligned(b.as_ptr().add(b_row + j));
                    let c_vec = F32x8::load_unaligned(c.as_ptr().add(c_row + j));
                    let updated = a_vec.mul(b_vec).add(c_vec);
                    updated.store_unaligned_at(c.as_mut_ptr().add(c_row + j));
                }
                j += LANE_COUNT;
            }
            for j in vec_n..n {
                c[c_row + j] += a_part * b[b_row + j];
            }
        }
    }
    0
}

/// Folds a stream's vector lanes and tail accumulator into its final state:
/// lanes first, then — only when a tail exists — the tail signature.
#[inline(always)]
fn assemble_stream<A: LaneAlgebra>(lanes: A::Lanes, tail: A::State, has_tail: bool) -> A::State {
    let mut state = A::init();
    A::lanes_fold(lanes, &mut state);
    if has_tail {
        A::absorb(&mut state, A::finalize(tail));
    }
    state
}

/// Vectorized external placement: one absorb of the row's last registers
/// per i-row.
pub fn multiply_external<A: LaneAlgebra>(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let vec_n = n - (n % LANE_COUNT);

    let mut state_a = A::init();
    let mut lanes_b = A::lanes_init();
    let mut lanes_c = A::lanes_init();

    let mut a_part = 0.0f32;
    let mut last_b = F32x8::splat(0.0);
    let mut last_c = F32x8::splat(0.0);

    for i in 0..m {
        for kk in 0..k {
            a_part = alpha * a[i * k + kk];
            let a_vec = F32x8::splat(a_part);
            let b_row = kk * n;
            let c_row = i * n;

            let mut j = 0;
            while j < vec_n {
                unsafe {
                    let b_vec = F32x8::load_unaligned(b.as_ptr().add(b_row + j));
                    let c_vec = F32x8::load_unaligned(c.as_ptr().add(c_row + j));
                    let updated = a_vec.mul(b_vec).add(c_vec);
                    updated.store_unaligned_at(c.as_mut_ptr().add(c_row + j));
                    last_b = b_vec;
                    last_c = updated;
                }
                j += LANE_COUNT;
            }
            for j in vec_n..n {
                c[c_row + j] += a_part * b[b_row + j];
            }
        }
        A::absorb(&mut state_a, word_of(a_part));
        if vec_n != 0 {
            A::lanes_absorb(&mut lanes_b, last_b);
            A::lanes_absorb(&mut lanes_c, last_c);
        }
    }

    let mut state_b = A::init();
    A::lanes_fold(lanes_b, &mut state_b);
    let mut state_c = A::init();
    A::lanes_fold(lanes_c, &mut state_c);
    A::merge(state_a, state_b, state_c)
}

/// Vectorized intermediate placement: last registers of each (i, k) term,
/// plus that term's tail elements.
pub fn multiply_intermediate<A: LaneAlgebra>(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let vec_n = n - (n % LANE_COUNT);
    let has_tail = vec_n != n;

    let mut state_a = A::init();
    let mut lanes_b = A::lanes_init();
    let mut lanes_c = A::lanes_init();
    let mut tail_b = A::init();
    let mut tail_c = A::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            let a_vec = F32x8::splat(a_part);
            let b_row = kk * n;
            let c_row = i * n;

            let mut last_b = F32x8::splat(0.0);
            let mut last_c = F32x8::splat(0.0);

            let mut j = 0;
            while j < vec_n {
                unsafe {
                    let b_vec = F32x8::load_unaligned(b.as_ptr().add(b_row + j));
                    let c_vec = F32x8::load_unaligned(c.as_ptr().add(c_row + j));
                    let updated = a_vec.mul(b_vec).add(c_vec);
                    updated.store_unaligned_at(c.as_mut_ptr().add(c_row + j));
                    last_b = b_vec;
                    last_c = updated;
                }
                j += LANE_COUNT;
            }
            if vec_n != 0 {
                A::lanes_absorb(&mut lanes_b, last_b);
                A::lanes_absorb(&mut lanes_c, last_c);
            }
            for j in vec_n..n {
                let b_val = b[b_row + j];
                c[c_row + j] += a_part * b_val;
                A::absorb(&mut tail_b, word_of(b_val));
                A::absorb(&mut tail_c, word_of(c[c_row + j]));
            }
            A::absorb(&mut state_a, word_of(a_part));
        }
    }

    let state_b = assemble_stream::<A>(lanes_b, tail_b, has_tail);
    let state_c = assemble_stream::<A>(lanes_c, tail_c, has_tail);
    A::merge(state_a, state_b, state_c)
}

/// Vectorized internal placement: every register pair at every vector step,
/// plus every tail element.
pub fn multiply_internal<A: LaneAlgebra>(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let vec_n = n - (n % LANE_COUNT);
    let has_tail = vec_n != n;

    let mut state_a = A::init();
    let mut lanes_b = A::lanes_init();
    let mut lanes_c = A::lanes_init();
    let mut tail_b = A::init();
    let mut tail_c = A::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            let a_vec = F32x8::splat(a_part);
            A::absorb(&mut state_a, word_of(a_part));
            let b_row = kk * n;
            let c_row = i * n;

            let mut j = 0;
            while j < vec_n {
                unsafe {
                    let b_vec = F32x8::load_unaligned(b.as_ptr().add(b_row + j));
                    let c_vec = F32x8::load_unaligned(c.as_ptr().add(c_row + j));
                    let updated = a_vec.mul(b_vec).add(c_vec);
                    updated.store_unaligned_at(c.as_mut_ptr().add(c_row + j));
                    A::lanes_absorb(&mut lanes_b, b_vec);
                    A::lanes_absorb(&mut lanes_c, updated);
                }
                j += LANE_COUNT;
            }
            for j in vec_n..n {
                let b_val = b[b_row + j];
                c[c_row + j] += a_part * b_val;
                A::absorb(&mut tail_b, word_of(b_val));
                A::absorb(&mut tail_c, word_of(c[c_row + j]));
            }
        }
    }

    let state_b = assemble_stream::<A>(lanes_b, tail_b, has_tail);
    let state_c = assemble_stream::<A>(lanes_c, tail_c, has_tail);
    A::merge(state_a, state_b, state_c)
}

/// Vectorized two-stage composite: first algebra internal over lanes and
/// tail, second algebra fed the mixed stream word once per (i, k).
///
/// The per-term mix snapshots the running lane accumulators with a
/// horizontal fold, so this carries the same reduction cost per dot-product
/// term the reference pays.
pub fn multiply_composite<F: LaneAlgebra, S: ChecksumAlgebra>(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) -> u32 {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    let vec_n = n - (n % LANE_COUNT);
    let has_tail = vec_n != n;

    let mut state_a = F::init();
    let mut lanes_b = F::lanes_init();
    let mut lanes_c = F::lanes_init();
    let mut tail_b = F::init();
    let mut tail_c = F::init();
    let mut second = S::init();

    for i in 0..m {
        for kk in 0..k {
            let a_part = alpha * a[i * k + kk];
            let a_vec = F32x8::splat(a_part);
            F::absorb(&mut state_a, word_of(a_part));
            let b_row = kk * n;
            let c_row = i * n;

            let mut j = 0;
            while j < vec_n {
                unsafe {
                    let b_vec = F32x8::load_unaligned(b.as_ptr().add(b_row + j));
                    let c_vec = F32x8::load_unaligned(c.as_ptr().add(c_row + j));
                    let updated = a_vec.mul(b_vec).add(c_vec);
                    updated.store_unaligned_at(c.as_mut_ptr().add(c_row + j));
                    F::lanes_absorb(&mut lanes_b, b_vec);
                    F::lanes_absorb(&mut lanes_c, updated);
                }
                j += LANE_COUNT;
            }
            for j in vec_n..n {
                let b_val = b[b_row + j];
                c[c_row + j] += a_part * b_val;
                F::absorb(&mut tail_b, word_of(b_val));
                F::absorb(&mut tail_c, word_of(c[c_row + j]));
            }

            let state_b = assemble_stream::<F>(lanes_b, tail_b, has_tail);
            let state_c = assemble_stream::<F>(lanes_c, tail_c, has_tail);
            S::absorb(&mut second, F::mix(state_a, state_b, state_c));
        }
    }
    S::finalize(second)
}
