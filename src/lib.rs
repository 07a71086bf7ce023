// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds terminal setup around these modules.
pub mod app;
pub mod classifier;
pub mod config;
pub mod game;
pub mod metrics;
pub mod runtime;
pub mod ui;
pub mod words;

/// Interval of the background tick thread. The countdown itself moves in
/// whole seconds; ticks are accumulated in `game::Game::on_tick`.
pub const TICK_RATE_MS: u64 = 100;
