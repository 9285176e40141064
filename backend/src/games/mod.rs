pub mod backend_roulette_game;
