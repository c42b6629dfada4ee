pub mod api;
pub mod dom;
pub mod subscription;
pub mod timer;
