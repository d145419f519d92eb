/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::error::{MergeError, Side};

/// Allocating merge of two sorted slices. On equal keys elements of `a` come
/// first, matching the in-place merge.
pub fn sorted_merge<T>(a: &[T], b: &[T]) -> Vec<T>
    where T: Ord + Copy
{
    let (mut ia, mut ib) = (0, 0);
    let mut sorted = Vec::with_capacity(a.len() + b.len());

    while ia < a.len() && ib < b.len()
    {
        if b[ib] < a[ia]
        {
            sorted.push(b[ib]);
            ib += 1;
        }
        else
        {
            sorted.push(a[ia]);
            ia += 1;
        }
    }

    sorted.extend_from_slice(&a[ia ..]);
    sorted.extend_from_slice(&b[ib ..]);

    sorted
}

pub fn first_unsorted<T>(seq: &[T]) -> Option<usize>
    where T: Ord
{
    seq.windows(2)
        .position(|w| w[1] < w[0])
        .map(|i| i + 1)
}

pub fn check_sorted<T>(seq: &[T], which: Side) -> Result<(), MergeError>
    where T: Ord
{
    match first_unsorted(seq)
    {
        Some(index) => Err(MergeError::Unsorted { which, index }),
        None => Ok(()),
    }
}
