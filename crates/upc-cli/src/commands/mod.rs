pub mod audit;
pub mod dispatch;
pub mod list;
pub mod render;
pub mod resolve;
