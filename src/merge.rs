/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! In-place merge of two sorted sequences.
//!
//! The destination `a` carries `m` sorted elements followed by at least `n`
//! free slots. The merge walks both inputs from their ends and fills `a` from
//! index `m + n - 1` downwards, so no element of `a` is overwritten before it
//! has been consumed.

use log::{debug, trace};
use std::convert::TryFrom;

use super::error::{MergeError, Side};

/// Checks the length preconditions of a merge of `m` elements from a
/// destination of length `a_len` with `n` elements from a source of length
/// `b_len`.
pub fn check_bounds(a_len: usize, m: usize, b_len: usize, n: usize) -> Result<(), MergeError> {
    let required = match m.checked_add(n) {
        Some(required) => required,
        None => return Err(MergeError::CountOverflow { m, n }),
    };

    if a_len < required {
        return Err(MergeError::DestinationTooShort {
            len: a_len,
            required,
        });
    }

    if b_len < n {
        return Err(MergeError::SourceTooShort {
            len: b_len,
            required: n,
        });
    }

    Ok(())
}

/// Converts caller supplied counts, rejecting negative values.
pub fn counts_from_signed(m: i64, n: i64) -> Result<(usize, usize), MergeError> {
    let m = usize::try_from(m).map_err(|_| MergeError::NegativeCount {
        which: Side::A,
        value: m,
    })?;

    let n = usize::try_from(n).map_err(|_| MergeError::NegativeCount {
        which: Side::B,
        value: n,
    })?;

    Ok((m, n))
}

/// Merges `b[..n]` into `a[..m]`, leaving the sorted result in `a[..m + n]`.
///
/// Nothing is validated. Bad bounds panic on the first out of range access.
pub fn merge_unchecked<T>(a: &mut [T], m: usize, b: &[T], n: usize)
where
    T: Ord + Copy,
{
    let mut tail = match m.checked_add(n) {
        Some(len) => len,
        None => panic!("merge length overflows: {} + {}", m, n),
    };

    let (mut a_left, mut b_left) = (m, n);

    while b_left > 0 {
        tail -= 1;

        // strict comparison: on a tie b goes to the higher slot
        if a_left > 0 && a[a_left - 1] > b[b_left - 1] {
            a[tail] = a[a_left - 1];
            a_left -= 1;
        } else {
            a[tail] = b[b_left - 1];
            b_left -= 1;
        }
    }

    // whatever is left of a is already in place
}

/// Merges `b[..n]` into `a[..m]` after checking that both slices are long
/// enough. On error `a` is left untouched.
///
/// Equal elements keep their relative order: those coming from `a` end up
/// before those coming from `b`. Slots of `a` past `m + n` are not touched.
pub fn merge_into<T>(a: &mut [T], m: usize, b: &[T], n: usize) -> Result<(), MergeError>
where
    T: Ord + Copy,
{
    if let Err(e) = check_bounds(a.len(), m, b.len(), n) {
        debug!("rejected merge of {} + {} element(s): {}", m, n, e);
        return Err(e);
    }

    trace!("merging {} element(s) into {} in place", n, m);

    merge_unchecked(a, m, b, n);

    Ok(())
}

/// Merges all of `b` into `a`, where `a` is exactly `m + b.len()` long.
pub fn merge_tail<T>(a: &mut [T], b: &[T]) -> Result<(), MergeError>
where
    T: Ord + Copy,
{
    let n = b.len();

    let m = match a.len().checked_sub(n) {
        Some(m) => m,
        None => {
            return Err(MergeError::DestinationTooShort {
                len: a.len(),
                required: n,
            })
        }
    };

    merge_into(a, m, b, n)
}
