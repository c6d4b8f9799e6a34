//! Main store (warehouse) tools: creation, lookup, update and inventory.

mod create;
mod get;
mod items;
mod update;

pub use create::{CreateMainStoreParams, CreateMainStoreTool};
pub use get::{
    GetAllMainStoresParams, GetAllMainStoresTool, GetMainStoreOrdersParams,
    GetMainStoreOrdersTool, GetMainStoreParams, GetMainStoreTool,
};
pub use items::{
    AddItemToMainStoreParams, AddItemToMainStoreTool, UpdateMainStoreItemQuantityParams,
    UpdateMainStoreItemQuantityTool,
};
pub use update::{UpdateMainStoreParams, UpdateMainStoreTool};
