//! Link traits shared by chain nodes.

use super::pool::NodeRef;

/// A trait for a link in a chain.
pub trait Link {
    /// Get the next node in the chain
    fn next(&self) -> Option<NodeRef>;

    /// Set the next node in the chain
    fn set_next(&mut self, next: Option<NodeRef>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous node in the chain
    fn prev(&self) -> Option<NodeRef>;

    /// Set the previous node in the chain
    fn set_prev(&mut self, prev: Option<NodeRef>);
}

/// A trait for a node that contains data.
pub trait NodeWithData: LinkWithPrev {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node and return its data
    fn into_data(self) -> Self::Data
    where
        Self: Sized;
}
