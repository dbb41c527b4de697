//! Network lifecycle tools.

pub mod down;
pub mod up;

pub use down::NetworkDownTool;
pub use up::NetworkUpTool;
