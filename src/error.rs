/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side
{
    A,
    B,
}

impl std::fmt::Display for Side
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Precondition violations of a merge call.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum MergeError
{
    #[error("negative count for sequence {which}: {value}")]
    NegativeCount { which: Side, value: i64 },

    #[error("m + n overflows ({m} + {n})")]
    CountOverflow { m: usize, n: usize },

    #[error("destination holds {len} slot(s), merge needs {required}")]
    DestinationTooShort { len: usize, required: usize },

    #[error("source holds {len} element(s), merge needs {required}")]
    SourceTooShort { len: usize, required: usize },

    #[error("sequence {which} is not sorted at index {index}")]
    Unsorted { which: Side, index: usize },
}
