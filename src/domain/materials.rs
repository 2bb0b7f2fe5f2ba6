//! Material profiles for dynamic bodies.

use serde::Deserialize;

/// Surface and mass properties applied to a body's collider.
///
/// Defaults describe a light, non-bouncy card element; the host overrides
/// restitution per element to get the "soft bubble" feel.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct MaterialProfile {
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Mass per square pixel; keep small, positions are in pixels.
    pub density: f32,
}

impl Default for MaterialProfile {
    fn default() -> Self {
        Self {
            friction: 0.1,
            restitution: 0.0,
            density: 0.001,
        }
    }
}

impl MaterialProfile {
    /// Clamp into ranges the solver tolerates. Degenerate density would make
    /// a body massless and unpredictable under collision.
    pub fn sanitized(self) -> Self {
        Self {
            friction: self.friction.max(0.0),
            restitution: self.restitution.clamp(0.0, 1.0),
            density: self.density.max(1e-4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let m = MaterialProfile {
            friction: -1.0,
            restitution: 3.0,
            density: 0.0,
        }
        .sanitized();
        assert_eq!(m.friction, 0.0);
        assert_eq!(m.restitution, 1.0);
        assert!(m.density > 0.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let m: MaterialProfile = serde_json::from_str("{\"restitution\":0.8}").unwrap();
        assert_eq!(m.restitution, 0.8);
        assert_eq!(m.friction, 0.1);
        assert_eq!(m.density, 0.001);
    }
}
