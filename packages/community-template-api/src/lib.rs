pub mod api;
pub mod msg;
pub mod response;
