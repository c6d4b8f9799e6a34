//! Order tools: creation, lookup, status changes and processing.

mod create;
mod get;
mod process;
mod status;

pub use create::{CreateOrderParams, CreateOrderTool};
pub use get::{GetAllOrdersParams, GetAllOrdersTool, GetOrderParams, GetOrderTool};
pub use process::{ProcessOrderParams, ProcessOrderTool};
pub use status::{UpdateOrderStatusParams, UpdateOrderStatusTool};
