pub mod asset;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod geometry;
pub mod io;
pub mod notify;
pub mod stage;
pub mod viewport;
