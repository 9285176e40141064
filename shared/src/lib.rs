pub mod constants;
pub mod math;
pub mod shared_roulette_game;
pub mod timer;
