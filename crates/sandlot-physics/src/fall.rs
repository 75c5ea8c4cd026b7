//! Fall damage curve.

use sandlot_core::FallDamageConfig;

/// Damage for landing at `impact_speed`.
///
/// Zero at or below `min_speed`, `max_damage` at or above `max_speed`,
/// linear in between with the fractional part truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fall_damage(impact_speed: f32, config: &FallDamageConfig) -> u32 {
    if impact_speed <= config.min_speed {
        return 0;
    }
    if impact_speed >= config.max_speed {
        return config.max_damage;
    }

    let t = (impact_speed - config.min_speed) / (config.max_speed - config.min_speed);
    (config.max_damage as f32 * t) as u32
}
