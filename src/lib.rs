// Crate root library declaration and module exports.
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
pub mod logging;
pub mod map;
pub mod model;
pub mod notice;
pub mod palette;
pub mod store;
pub mod surface;
pub mod validate;
