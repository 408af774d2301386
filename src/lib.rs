pub mod components;
pub mod config;
pub mod engine;
pub mod fsm;
pub mod scene;
pub mod systems;
