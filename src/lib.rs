pub mod compute;
pub mod config;
pub mod driver;
pub mod entities;
pub mod render;
pub mod spawner;
