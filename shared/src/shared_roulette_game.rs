use serde::{Serialize, Deserialize};
use rand::Rng;
use std::f64::consts::TAU;

use crate::constants::METHOD_NOT_ALLOWED_ERROR;
use crate::math::{ease_out_cubic, lerp};
use crate::timer::Timer;

/// The pockets the mock wheel can land on. Not a full roulette layout, just
/// the handful of numbers the demo supports. Colors and settle timings are
/// exhaustive matches below, so adding a variant will not compile until both
/// mappings cover it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum RouletteValue {
    Three,
    Seven,
    Twelve,
    TwentySix,
    TwentyNine,
}

pub const ROULETTE_GAME_VALUES: [RouletteValue; 5] = [
    RouletteValue::Three,
    RouletteValue::Seven,
    RouletteValue::Twelve,
    RouletteValue::TwentySix,
    RouletteValue::TwentyNine,
];

/// The two bettable pocket colors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouletteColor {
    Red,
    Black,
}

impl RouletteColor {
    pub fn label(self) -> &'static str {
        match self {
            RouletteColor::Red => "red",
            RouletteColor::Black => "black",
        }
    }
}

impl RouletteValue {
    pub fn number(self) -> u32 {
        match self {
            RouletteValue::Three => 3,
            RouletteValue::Seven => 7,
            RouletteValue::Twelve => 12,
            RouletteValue::TwentySix => 26,
            RouletteValue::TwentyNine => 29,
        }
    }

    pub fn color(self) -> RouletteColor {
        match self {
            RouletteValue::Three | RouletteValue::Seven | RouletteValue::Twelve => {
                RouletteColor::Red
            }
            RouletteValue::TwentySix | RouletteValue::TwentyNine => RouletteColor::Black,
        }
    }

    /// How long the ball decelerates before stopping on this pocket, in ms.
    pub fn settle_duration_ms(self) -> u32 {
        match self {
            RouletteValue::Three => 1150,
            RouletteValue::Seven => 1600,
            RouletteValue::Twelve => 1400,
            RouletteValue::TwentySix => 1050,
            RouletteValue::TwentyNine => 1700,
        }
    }
}

impl From<RouletteValue> for u32 {
    fn from(value: RouletteValue) -> u32 {
        value.number()
    }
}

impl TryFrom<u32> for RouletteValue {
    type Error = String;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            3 => Ok(RouletteValue::Three),
            7 => Ok(RouletteValue::Seven),
            12 => Ok(RouletteValue::Twelve),
            26 => Ok(RouletteValue::TwentySix),
            29 => Ok(RouletteValue::TwentyNine),
            other => Err(format!("{other} is not a playable roulette value")),
        }
    }
}

/// Picks a pocket uniformly at random.
pub fn random_roulette_value<R: Rng>(rng: &mut R) -> RouletteValue {
    ROULETTE_GAME_VALUES[rng.gen_range(0..ROULETTE_GAME_VALUES.len())]
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RouletteRollResponse {
    pub value: RouletteValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: String,
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl ApiError {
    pub fn method_not_allowed() -> Self {
        Self {
            kind: "error".to_string(),
            error: ApiErrorDetail {
                message: METHOD_NOT_ALLOWED_ERROR.to_string(),
            },
        }
    }
}

// === Game State Machine ===

/// Angular velocity the ball rolls at, in radians per frame. Negative, the
/// ball runs against the usual angle direction.
pub const INIT_BALL_ROTATION_VEL: f64 = -0.1;

/// The ball counts as having passed the reference position once its angle is
/// within this many radians of zero.
const ROLL_OVER_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouletteGameState {
    Idle,
    Rolling,
    Settled { timer: Timer, did_roll_over: bool },
}

/// Wheel/ball animation state machine. Purely computational: the frontend
/// owns one of these, calls `advance` once per animation frame and reads
/// `ball_rotation` back to draw the ball.
#[derive(Debug, Clone)]
pub struct RouletteGame {
    state: RouletteGameState,
    ball_rotation: f64,
    ball_rotation_vel: f64,
}

impl RouletteGame {
    pub fn new() -> Self {
        Self {
            state: RouletteGameState::Idle,
            ball_rotation: 0.0,
            ball_rotation_vel: INIT_BALL_ROTATION_VEL,
        }
    }

    pub fn state(&self) -> RouletteGameState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, RouletteGameState::Idle)
    }

    /// Current ball angle in radians. Bounded below one full turn in
    /// magnitude but usually negative, matching the roll direction; drawing
    /// code only takes sin/cos of it and does not care about the sign.
    pub fn ball_rotation(&self) -> f64 {
        self.ball_rotation
    }

    pub fn ball_rotation_vel(&self) -> f64 {
        self.ball_rotation_vel
    }

    /// Advances the animation by one frame. `dt` is the time since the
    /// previous frame in milliseconds; it only feeds the settle timer, the
    /// ball moves one velocity step per call.
    pub fn advance(&mut self, dt: f64) {
        match &mut self.state {
            RouletteGameState::Idle => {}
            RouletteGameState::Rolling => {
                self.ball_rotation += self.ball_rotation_vel;
            }
            RouletteGameState::Settled { timer, did_roll_over } => {
                if !*did_roll_over {
                    // keep rolling until the ball passes the reference
                    // position, so the stop never cuts in mid-turn
                    *did_roll_over = self.ball_rotation.abs() < ROLL_OVER_THRESHOLD;
                } else if timer.tick(dt) {
                    self.ball_rotation_vel = 0.0;
                    self.state = RouletteGameState::Idle;
                } else {
                    self.ball_rotation_vel = lerp(
                        INIT_BALL_ROTATION_VEL,
                        0.0,
                        ease_out_cubic(timer.percent_complete()),
                    );
                }
                self.ball_rotation += self.ball_rotation_vel;
            }
        }
        self.ball_rotation %= TAU;
    }

    /// Kicks the ball off at full speed. Callable at any time; an
    /// in-progress settle is silently discarded.
    pub fn start_rolling(&mut self) {
        self.state = RouletteGameState::Rolling;
        self.ball_rotation = 0.0;
        self.ball_rotation_vel = INIT_BALL_ROTATION_VEL;
    }

    /// Starts decelerating toward a stop for the given outcome. Returns the
    /// settle duration in ms so the caller can wait out the animation before
    /// accepting the next bet.
    pub fn settle_roll(&mut self, settled_on: RouletteValue) -> u32 {
        let timer_duration = settled_on.settle_duration_ms();
        self.state = RouletteGameState::Settled {
            timer: Timer::new(f64::from(timer_duration)),
            did_roll_over: false,
        };
        timer_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_value_has_color_and_timing() {
        for value in ROULETTE_GAME_VALUES {
            assert!(value.settle_duration_ms() > 0);
            assert!(!value.color().label().is_empty());
        }
        assert_eq!(RouletteValue::Three.color(), RouletteColor::Red);
        assert_eq!(RouletteValue::Seven.color(), RouletteColor::Red);
        assert_eq!(RouletteValue::Twelve.color(), RouletteColor::Red);
        assert_eq!(RouletteValue::TwentySix.color(), RouletteColor::Black);
        assert_eq!(RouletteValue::TwentyNine.color(), RouletteColor::Black);
    }

    #[test]
    fn test_settle_timings() {
        assert_eq!(RouletteValue::Three.settle_duration_ms(), 1150);
        assert_eq!(RouletteValue::Seven.settle_duration_ms(), 1600);
        assert_eq!(RouletteValue::Twelve.settle_duration_ms(), 1400);
        assert_eq!(RouletteValue::TwentySix.settle_duration_ms(), 1050);
        assert_eq!(RouletteValue::TwentyNine.settle_duration_ms(), 1700);
    }

    #[test]
    fn test_rejects_unplayable_numbers() {
        assert!(RouletteValue::try_from(99).is_err());
        assert!(RouletteValue::try_from(0).is_err());
        assert_eq!(RouletteValue::try_from(26), Ok(RouletteValue::TwentySix));
    }

    #[test]
    fn test_wire_format_is_the_bare_number() {
        let response = RouletteRollResponse {
            value: RouletteValue::Twelve,
        };
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"value":12}"#);

        let parsed: RouletteRollResponse = serde_json::from_str(r#"{"value":29}"#).unwrap();
        assert_eq!(parsed.value, RouletteValue::TwentyNine);

        assert!(serde_json::from_str::<RouletteRollResponse>(r#"{"value":99}"#).is_err());
    }

    #[test]
    fn test_method_not_allowed_body() {
        let body = serde_json::to_string(&ApiError::method_not_allowed()).unwrap();
        assert_eq!(
            body,
            r#"{"type":"error","error":{"message":"This method is not allowed"}}"#
        );
    }

    #[test]
    fn test_random_value_is_always_playable() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let value = random_roulette_value(&mut rng);
            assert!(ROULETTE_GAME_VALUES.contains(&value));
        }
    }

    #[test]
    fn test_start_rolling_resets_ball() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        for _ in 0..10 {
            game.advance(16.0);
        }
        game.start_rolling();
        assert_eq!(game.state(), RouletteGameState::Rolling);
        assert_eq!(game.ball_rotation(), 0.0);
        assert_eq!(game.ball_rotation_vel(), INIT_BALL_ROTATION_VEL);
    }

    #[test]
    fn test_rolling_spins_until_settled_and_stays_bounded() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        for _ in 0..500 {
            game.advance(16.0);
            assert!(game.ball_rotation().abs() < std::f64::consts::TAU);
        }
        assert_eq!(game.state(), RouletteGameState::Rolling);
        assert_eq!(game.ball_rotation_vel(), INIT_BALL_ROTATION_VEL);
    }

    #[test]
    fn test_settle_roll_returns_configured_duration() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        assert_eq!(game.settle_roll(RouletteValue::Three), 1150);
        match game.state() {
            RouletteGameState::Settled { timer, did_roll_over } => {
                assert!(!did_roll_over);
                assert_eq!(timer.percent_complete(), 0.0);
            }
            other => panic!("expected a settled game, got {other:?}"),
        }
    }

    #[test]
    fn test_settled_waits_for_roll_over_before_decelerating() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        // move the ball well away from the reference position first
        for _ in 0..5 {
            game.advance(16.0);
        }
        game.settle_roll(RouletteValue::Seven);
        game.advance(16.0);
        // half a radian out, so still in the roll-over wait at full speed
        match game.state() {
            RouletteGameState::Settled { did_roll_over, .. } => assert!(!did_roll_over),
            other => panic!("expected a settled game, got {other:?}"),
        }
        assert_eq!(game.ball_rotation_vel(), INIT_BALL_ROTATION_VEL);
    }

    #[test]
    fn test_settled_stops_idle_with_zero_velocity() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        game.advance(16.0);
        game.settle_roll(RouletteValue::Three);
        for _ in 0..10_000 {
            game.advance(16.0);
            if game.is_idle() {
                break;
            }
        }
        assert!(game.is_idle());
        assert_eq!(game.ball_rotation_vel(), 0.0);
    }

    #[test]
    fn test_settle_outlasts_its_timer_duration() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        let duration = f64::from(game.settle_roll(RouletteValue::TwentySix));
        // ball is at the reference position, so the first frame flips the
        // roll-over flag and the timer starts on the next one
        game.advance(0.0);
        let mut elapsed = 0.0;
        while elapsed <= duration {
            assert!(!game.is_idle());
            game.advance(100.0);
            elapsed += 100.0;
        }
        assert!(game.is_idle());
        assert_eq!(game.ball_rotation_vel(), 0.0);
    }

    #[test]
    fn test_unplayable_value_leaves_game_untouched() {
        let mut game = RouletteGame::new();
        game.start_rolling();
        let before = game.state();
        assert!(RouletteValue::try_from(99).is_err());
        assert_eq!(game.state(), before);
    }
}
