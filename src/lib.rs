// Symphonia
// Copyright (c) 2019 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A positional byte/bit stream reader runtime for binary format decoding.
//!
//! [`stream::ByteStream`] is the core: a cursor over an immutable, in-memory buffer exposing
//! fixed-width integer and float readers in both byte orders, unaligned bit-integer readers in
//! both bit orders, and byte-run readers. [`bytes_util`] and [`numeric`] provide the
//! byte-array transforms and numeric helpers that field validators lean on. [`parser`] defines
//! the node/parent/root contract that generated or hand-written parsers are built against.

pub mod bytes_util;
pub mod errors;
pub mod numeric;
pub mod parser;
pub mod stream;

pub mod prelude {
    //! Re-exports of the types most commonly needed by a consumer of this crate.
    pub use crate::bytes_util::{
        byte_array_compare, bytes_strip_right, bytes_terminate, bytes_to_str, process_rotate_left,
        process_xor_many, process_xor_one, Encoding,
    };
    pub use crate::errors::{Result, StreamError};
    pub use crate::numeric::{array_max, array_min, modulo};
    pub use crate::parser::{parse, parse_root, NodeLink, ParsedNode};
    pub use crate::stream::ByteStream;

    #[cfg(feature = "zlib")]
    pub use crate::bytes_util::process_zlib;
}
