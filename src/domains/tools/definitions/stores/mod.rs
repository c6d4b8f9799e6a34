//! Store tools: creation, lookup, inventory and conditions.

mod conditions;
mod create;
mod get;
mod items;

pub use conditions::{UpdateStoreConditionsParams, UpdateStoreConditionsTool};
pub use create::{CreateStoreParams, CreateStoreTool};
pub use get::{
    GetAllStoresParams, GetAllStoresTool, GetStoreOrdersParams, GetStoreOrdersTool,
    GetStoreParams, GetStoreTool,
};
pub use items::{
    AddItemToStoreParams, AddItemToStoreTool, AddMultipleItemsParams,
    AddMultipleItemsToStoreTool, UpdateItemQuantityParams, UpdateItemQuantityTool,
};
