use std::env;

use modes::DrawCircleOptions;

pub const ENV_DEFAULT_RADIUS: &str = "CIRCLE_DEFAULT_RADIUS";
pub const ENV_STEPS: &str = "CIRCLE_STEPS";

/// Fewest steps that still give a valid polygon.
const MIN_STEPS: usize = 3;

/// Runtime configuration, read from the environment.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Config {
    pub draw: DrawCircleOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut draw = DrawCircleOptions::default();

        if let Some(raw) = lookup(ENV_DEFAULT_RADIUS) {
            let radius: f64 = raw
                .trim()
                .parse()
                .map_err(|_| format!("{ENV_DEFAULT_RADIUS} is not a number: {raw:?}"))?;
            if !radius.is_finite() || radius < 0.0 {
                return Err(format!("{ENV_DEFAULT_RADIUS} must be a non-negative number"));
            }
            draw.default_radius_m = radius;
        }

        if let Some(raw) = lookup(ENV_STEPS) {
            let steps: usize = raw
                .trim()
                .parse()
                .map_err(|_| format!("{ENV_STEPS} is not an integer: {raw:?}"))?;
            if steps < MIN_STEPS {
                return Err(format!("{ENV_STEPS} must be at least {MIN_STEPS}"));
            }
            draw.steps = steps;
        }

        Ok(Self { draw })
    }
}
