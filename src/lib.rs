/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! In-place merging of sorted integer sequences.

pub mod error;
pub mod merge;
pub mod seq;
pub mod util;

pub use error::{MergeError, Side};
pub use merge::{merge_into, merge_tail, merge_unchecked};
