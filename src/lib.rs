pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::LexicoApp;

#[cfg(target_arch = "wasm32")]
mod web;
