pub mod app;
pub mod args;
pub mod config;
pub mod deck;
pub mod effects;
pub mod logging;
pub mod quiz;
pub mod reveal;
pub mod scroll;
pub mod shutdown;
pub mod ui;
