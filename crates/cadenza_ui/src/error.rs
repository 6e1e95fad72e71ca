//! # UI Error Types
//!
//! All failures in this core are local, synchronous, and non-retryable:
//! either a caller contract violation surfaced immediately, or a guarded
//! no-op (empty-list navigation) that never reaches an error at all.

use thiserror::Error;

/// Errors that can occur while building or mutating a component tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Bulk configuration named an attribute that does not exist or is not
    /// user-assignable.
    #[error("unknown attribute '{attribute}' on component '{component}'")]
    UnknownAttribute {
        /// The component being configured.
        component: String,
        /// The offending attribute name.
        attribute: String,
    },

    /// Bulk configuration supplied a value of the wrong shape for an
    /// attribute.
    #[error("attribute '{attribute}' on component '{component}' expects {expected}")]
    AttributeValue {
        /// The component being configured.
        component: String,
        /// The attribute that rejected the value.
        attribute: String,
        /// What kind of value the attribute accepts.
        expected: &'static str,
    },

    /// A child with the same name already exists in the container. The
    /// container is left unmodified.
    #[error("container '{container}' already contains a child named '{name}'")]
    DuplicateName {
        /// The container that rejected the child.
        container: String,
        /// The colliding name.
        name: String,
    },

    /// No child with the given name exists in the container.
    #[error("container '{container}' has no child named '{name}'")]
    MissingChild {
        /// The container that was searched.
        container: String,
        /// The name that was not found.
        name: String,
    },

    /// The component already has a different parent assigned. Parent
    /// assignment is single-shot; the existing link is preserved.
    #[error("component '{component}' already has a parent assigned")]
    ParentReassigned {
        /// The component whose parent was being reassigned.
        component: String,
    },

    /// Attaching the component would make it its own ancestor.
    #[error("attaching '{component}' would create a cycle")]
    ParentCycle {
        /// The component that would have become its own ancestor.
        component: String,
    },

    /// A unit shorthand string could not be parsed. Fails at assignment time,
    /// before any geometry mutation occurs.
    #[error("malformed unit string '{input}'")]
    MalformedUnit {
        /// The string that failed to parse.
        input: String,
    },
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
