//! Channel management tools.

pub mod create;

pub use create::{CreateChannelParams, CreateChannelTool};
