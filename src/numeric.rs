// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small numeric helpers shared by generated field validators.

use crate::errors::{validation_less_than_error, Result};

/// Nonnegative remainder of `a / b`. Fails if `b <= 0`.
pub fn modulo(a: i64, b: i64) -> Result<i64> {
    if b <= 0 {
        return validation_less_than_error(1, b);
    }
    Ok(((a % b) + b) % b)
}

/// The minimum element of `arr`.
///
/// # Panics
///
/// Panics if `arr` is empty.
pub fn array_min(arr: &[i64]) -> i64 {
    *arr.iter().min().expect("array_min called with an empty array")
}

/// The maximum element of `arr`.
///
/// # Panics
///
/// Panics if `arr` is empty.
pub fn array_max(arr: &[i64]) -> i64 {
    *arr.iter().max().expect("array_max called with an empty array")
}
