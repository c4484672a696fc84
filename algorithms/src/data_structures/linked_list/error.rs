use super::NodeId;
use thiserror::Error;

/// Contract violations reported by linked-list operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("node {0} is not live in this arena")]
    UnknownNode(NodeId),
    #[error("node {0} has no successor")]
    MissingSuccessor(NodeId),
    #[error("node {0} is its own successor")]
    SelfLoop(NodeId),
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("node {0} does not lie on a cycle")]
    NotOnCycle(NodeId),
    #[error("list entered at node {0} is not circular")]
    NotCircular(NodeId),
    #[error("lists to merge share node {0}")]
    SharedNodes(NodeId),
    #[error("list loops back on itself")]
    Cyclic,
}
