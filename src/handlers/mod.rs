pub mod api;
pub mod homepage;
pub mod quiz;
pub mod sleep;
