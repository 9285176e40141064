/// A 2D point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Returns the point `radians` around `center` at `radius` distance.
pub fn point_on_circle(center: Vec2, radius: f64, radians: f64) -> Vec2 {
    Vec2 {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// Linear interpolation between `value1` and `value2`. `t` is not clamped,
/// that is the caller's responsibility.
pub fn lerp(value1: f64, value2: f64, t: f64) -> f64 {
    (1.0 - t) * value1 + t * value2
}

/// Cubic ease-out over [0, 1], mapping 0 to 0 and 1 to 1.
pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_point_on_circle_cardinal_angles() {
        let center = Vec2 { x: 256.0, y: 256.0 };
        let at_zero = point_on_circle(center, 100.0, 0.0);
        assert!((at_zero.x - 356.0).abs() < EPSILON);
        assert!((at_zero.y - 256.0).abs() < EPSILON);
        let at_pi = point_on_circle(center, 100.0, PI);
        assert!((at_pi.x - 156.0).abs() < EPSILON);
        assert!((at_pi.y - 256.0).abs() < EPSILON);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(-0.1, 0.0, 0.0), -0.1);
        assert_eq!(lerp(-0.1, 0.0, 1.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        // t outside [0, 1] extrapolates rather than clamping
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = ease_out_cubic(step as f64 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
    }
}
