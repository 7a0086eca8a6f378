// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The abstract shape external parsers are built against: a node linked to the stream it reads
//! from, an optional parent, and a root that defaults to the node itself.
//!
//! Rust cannot invoke an overridable method from within a constructor, so the
//! construct-then-read step that a host language could express as a single constructor call is
//! split here into [`ParsedNode::new`] (stores the link, reads nothing) and [`ParsedNode::read`]
//! (pulls the node's fields from the stream), chained by [`parse`] and [`parse_root`].

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::errors::Result;
use crate::stream::ByteStream;

/// A shared, mutably-borrowed stream. Every node in one parse tree holds a clone of the same
/// `Rc`, since the cursor position is intentionally not duplicated.
pub type SharedStream<'a> = Rc<RefCell<ByteStream<'a>>>;

/// A non-owning reference to an ancestor node, type-erased since a node's parent and root are
/// usually of different concrete types than the node itself. Neither a parent nor a root is ever
/// held by a strong `Rc`: a node in the middle of a parse tree is typically also reachable from
/// its own parent (directly or transitively), so an owning back-reference here would create an
/// `Rc`/`RefCell` cycle that is never freed.
pub type WeakNodeRef = Weak<RefCell<dyn Any>>;

/// The `(stream, parent, root)` triple every parsed node is constructed from.
pub struct NodeLink<'a> {
    pub stream: SharedStream<'a>,
    pub parent: Option<WeakNodeRef>,
    pub root: WeakNodeRef,
}

/// Implemented by every generated or hand-written parser node.
pub trait ParsedNode<'a>: Any + Sized {
    /// Stores `link` without reading anything. Called by [`parse`] / [`parse_root`] immediately
    /// before [`read`](ParsedNode::read).
    fn new(link: NodeLink<'a>) -> Self;

    /// Pulls this node's fields from its stream, advancing the shared cursor.
    fn read(&mut self) -> Result<()>;
}

/// Constructs and reads `T` as a child of `parent`, sharing `parent`'s stream and root. `parent`
/// is a weak reference: the caller downgrades its own strong `Rc` before passing it in.
pub fn parse<'a, T: ParsedNode<'a>>(
    stream: SharedStream<'a>,
    parent: WeakNodeRef,
    root: WeakNodeRef,
) -> Result<Rc<RefCell<T>>> {
    let link = NodeLink { stream, parent: Some(parent), root };
    let node = Rc::new(RefCell::new(T::new(link)));
    node.borrow_mut().read()?;
    Ok(node)
}

/// Constructs and reads `T` as the root of a new parse tree. `root` defaults to the node itself.
pub fn parse_root<'a, T: ParsedNode<'a>>(stream: SharedStream<'a>) -> Result<Rc<RefCell<T>>> {
    let node: Rc<RefCell<T>> = Rc::new_cyclic(|weak: &Weak<RefCell<T>>| {
        let root: WeakNodeRef = weak.clone();
        let link = NodeLink { stream, parent: None, root };
        RefCell::new(T::new(link))
    });
    node.borrow_mut().read()?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RootedHeader {
        link_stream: SharedStream<'static>,
        magic: Vec<u8>,
    }

    impl ParsedNode<'static> for RootedHeader {
        fn new(link: NodeLink<'static>) -> Self {
            RootedHeader { link_stream: link.stream, magic: Vec::new() }
        }

        fn read(&mut self) -> Result<()> {
            let mut stream = self.link_stream.borrow_mut();
            self.magic = stream.read_bytes(4)?.to_vec();
            Ok(())
        }
    }

    #[test]
    fn verify_parse_root_reads_header() {
        let buf: &'static [u8] = b"RIFF....";
        let stream: SharedStream<'static> = Rc::new(RefCell::new(ByteStream::new(buf)));
        let node = parse_root::<RootedHeader>(stream).unwrap();
        assert_eq!(node.borrow().magic, b"RIFF");
    }
}
