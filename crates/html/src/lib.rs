//! Minimal element tree used to host slider markup.
//!
//! Nodes carry attributes only; there is no parser, style or layout here.
//! Callers build trees with [`Node::element`] and then give every node a
//! stable [`Id`] with [`assign_node_ids`].

pub mod dom_utils;
pub mod traverse;

mod types;

pub use crate::dom_utils::{SimpleSelector, query_descendant};
pub use crate::traverse::{assign_node_ids, find_node_by_id, find_node_by_id_mut};
pub use crate::types::{Id, Node, NodeId};
