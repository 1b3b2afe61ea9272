pub mod dispatch;
pub mod shared;
pub mod summary;
pub mod task;
