//! Tool definitions grouped by backend resource.
//!
//! Each tool lives in its own file with its name, description, request
//! rule and typed parameter struct side by side. Shared parameter
//! shapes and the generic routing glue live in [`common`].

pub mod common;
pub mod mainstore;
pub mod orders;
pub mod stores;

pub use common::{ConditionParams, OrderItemSpec, OrderStatus, SeverityLevel, StoreItemSpec};
pub use mainstore::*;
pub use orders::*;
pub use stores::*;
