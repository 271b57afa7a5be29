pub mod api;
pub mod playground;
