//! Integration tests for the violet-internals crate.
//!
//! ## Chain Tests
//! - `test_chain_walk`: nodes link head-first and every header field is
//!   readable through the erased pointer
//! - `test_display_and_debug_dispatch`: the vtable dispatches to the handler
//!   the node was created with
//! - `test_downcast_by_type_id`: checked downcasting on top of
//!   `payload_downcast_unchecked`
//!
//! ## Memory Management Tests
//! - `test_drop_order_and_exactly_once`: every payload of a chain is dropped
//!   exactly once, newest first
//! - `test_splice_tail`: grafting one chain below another keeps every node
//!   alive until the merged chain is dropped
//! - `test_deep_chain_drop`: a chain far deeper than the stack could recurse
//!   through drops without overflowing

use std::{
    any::TypeId,
    fmt,
    panic::Location,
    sync::{Arc, Mutex},
};

use violet_internals::{RawNode, RawNodeRef, handlers::PayloadHandler};

struct DisplayHandler;

impl<C> PayloadHandler<C> for DisplayHandler
where
    C: fmt::Display + fmt::Debug,
{
    fn display(value: &C, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, formatter)
    }

    fn debug(value: &C, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(value, formatter)
    }
}

struct ShoutingHandler;

impl PayloadHandler<String> for ShoutingHandler {
    fn display(value: &String, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}!", value.to_uppercase())
    }

    fn debug(value: &String, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Shouting({value:?})")
    }
}

struct Shown<'a>(RawNodeRef<'a>);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.payload_display(f)
    }
}

impl fmt::Debug for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.payload_debug(f)
    }
}

fn downcast<C: 'static>(node: RawNodeRef<'_>) -> Option<&C> {
    if node.payload_type_id() == TypeId::of::<C>() {
        // SAFETY: The type id was just checked
        Some(unsafe { node.payload_downcast_unchecked::<C>() })
    } else {
        None
    }
}

fn walk(head: &RawNode) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = Some(head.as_ref());
    while let Some(node) = current {
        out.push(Shown(node).to_string());
        current = node.next();
    }
    out
}

#[track_caller]
fn push<C: fmt::Display + fmt::Debug + Send + Sync + 'static>(
    payload: C,
    next: Option<RawNode>,
) -> RawNode {
    RawNode::new::<C, DisplayHandler>(payload, Location::caller(), next)
}

#[test]
fn test_chain_walk() {
    let root = push("disk unplugged", None);
    let root_line = line!() - 1;
    let middle = push(String::from("while saving"), Some(root));
    let head = push(42_u32, Some(middle));

    assert_eq!(walk(&head), ["42", "while saving", "disk unplugged"]);

    let root_ref = head.as_ref().next().unwrap().next().unwrap();
    assert_eq!(root_ref.location().file(), file!());
    assert_eq!(root_ref.location().line(), root_line);
    assert_eq!(root_ref.payload_type_name(), "&str");
    assert_eq!(root_ref.handler_type_id(), TypeId::of::<DisplayHandler>());
    assert!(root_ref.next().is_none());
}

#[test]
fn test_display_and_debug_dispatch() {
    let location = Location::caller();
    let plain = RawNode::new::<String, DisplayHandler>("quiet".to_owned(), location, None);
    let loud = RawNode::new::<String, ShoutingHandler>("quiet".to_owned(), location, None);

    assert_eq!(Shown(plain.as_ref()).to_string(), "quiet");
    assert_eq!(format!("{:?}", Shown(plain.as_ref())), "\"quiet\"");
    assert_eq!(Shown(loud.as_ref()).to_string(), "QUIET!");
    assert_eq!(format!("{:?}", Shown(loud.as_ref())), "Shouting(\"quiet\")");

    assert_eq!(plain.as_ref().payload_type_id(), loud.as_ref().payload_type_id());
    assert_ne!(plain.as_ref().handler_type_id(), loud.as_ref().handler_type_id());
}

#[test]
fn test_downcast_by_type_id() {
    let head = push(7_i16, Some(push(String::from("inner"), None)));

    assert_eq!(downcast::<i16>(head.as_ref()), Some(&7));
    assert_eq!(downcast::<i32>(head.as_ref()), None);

    let inner = head.as_ref().next().unwrap();
    assert_eq!(downcast::<String>(inner).map(String::as_str), Some("inner"));
    assert_eq!(downcast::<&str>(inner), None);
}

#[derive(Debug)]
struct DropRecorder {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl fmt::Display for DropRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Drop for DropRecorder {
    fn drop(&mut self) {
        self.log.lock().unwrap().push(self.name);
    }
}

#[test]
fn test_drop_order_and_exactly_once() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let recorder = |name| DropRecorder {
        name,
        log: log.clone(),
    };

    let chain = push(recorder("c"), Some(push(recorder("b"), Some(push(recorder("a"), None)))));
    assert!(log.lock().unwrap().is_empty());

    drop(chain);
    assert_eq!(*log.lock().unwrap(), ["b", "a", "c"]);
}

#[test]
fn test_splice_tail() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let recorder = |name| DropRecorder {
        name,
        log: log.clone(),
    };

    let older = push(recorder("b"), Some(push(recorder("a"), None)));
    let mut newer = push(recorder("d"), Some(push(recorder("c"), None)));

    let mut slot = newer.next_slot_mut();
    while let Some(node) = slot {
        slot = node.next_slot_mut();
    }
    *slot = Some(older);

    assert_eq!(walk(&newer), ["d", "c", "b", "a"]);
    assert!(log.lock().unwrap().is_empty());

    drop(newer);
    let mut dropped = log.lock().unwrap().clone();
    dropped.sort_unstable();
    assert_eq!(dropped, ["a", "b", "c", "d"]);
}

#[test]
fn test_deep_chain_drop() {
    let mut head = push(0_usize, None);
    for depth in 1..200_000_usize {
        head = RawNode::new::<usize, DisplayHandler>(depth, Location::caller(), Some(head));
    }
    assert_eq!(downcast::<usize>(head.as_ref()), Some(&199_999));
    drop(head);
}
