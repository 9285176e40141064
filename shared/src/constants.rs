pub const ROULETTE_API_ENDPOINT: &str = "/api/roulette";

pub const GAME_HISTORY_LS_KEY: &str = "RouletteGameHistory-LSKEY";

pub const METHOD_NOT_ALLOWED_ERROR: &str = "This method is not allowed";
