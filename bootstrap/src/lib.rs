//! catalog-bootstrap - 统一服务启动骨架
//!
//! 服务复用的启动逻辑

mod infrastructure;
mod runtime;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;
