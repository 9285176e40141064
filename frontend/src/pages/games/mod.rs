mod frontend_roulette_game;

pub use frontend_roulette_game::FrontendRouletteGame;
