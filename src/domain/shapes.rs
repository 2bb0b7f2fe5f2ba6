//! Body shapes and the size-resolution chain.
//!
//! The physical size of a body comes from, in order: an explicit override on
//! the spawn request, the bound element's measured box, or a fixed fallback.
//! The fallback exists for elements measured while hidden (zero-area rect);
//! a zero-area collider behaves unpredictably, so we never build one.

use serde::Deserialize;

/// Fallback size for elements that measured zero at attach time.
pub const DEFAULT_BODY_WIDTH: f32 = 120.0;
pub const DEFAULT_BODY_HEIGHT: f32 = 40.0;

/// Shape class requested by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
}

/// A fully resolved physical shape, sized in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeSpec {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl ShapeSpec {
    /// Resolve the size chain for one body. Overrides and measurements that
    /// are zero or negative count as absent.
    pub fn resolve(
        kind: ShapeKind,
        width: Option<f32>,
        height: Option<f32>,
        radius: Option<f32>,
        measured_width: f32,
        measured_height: f32,
    ) -> Self {
        let pick = |explicit: Option<f32>, measured: f32, fallback: f32| {
            explicit
                .filter(|v| *v > 0.0)
                .unwrap_or(if measured > 0.0 { measured } else { fallback })
        };

        let w = pick(width, measured_width, DEFAULT_BODY_WIDTH);
        let h = pick(height, measured_height, DEFAULT_BODY_HEIGHT);

        match kind {
            ShapeKind::Rectangle => ShapeSpec::Rect {
                width: w,
                height: h,
            },
            ShapeKind::Circle => ShapeSpec::Circle {
                radius: radius.filter(|r| *r > 0.0).unwrap_or(w.max(h) / 2.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let s = ShapeSpec::resolve(ShapeKind::Rectangle, Some(80.0), Some(20.0), None, 300.0, 300.0);
        assert_eq!(
            s,
            ShapeSpec::Rect {
                width: 80.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn measured_box_used_when_no_override() {
        let s = ShapeSpec::resolve(ShapeKind::Rectangle, None, None, None, 64.0, 24.0);
        assert_eq!(
            s,
            ShapeSpec::Rect {
                width: 64.0,
                height: 24.0
            }
        );
    }

    #[test]
    fn hidden_element_falls_back_to_default_size() {
        let s = ShapeSpec::resolve(ShapeKind::Rectangle, None, None, None, 0.0, 0.0);
        assert_eq!(
            s,
            ShapeSpec::Rect {
                width: DEFAULT_BODY_WIDTH,
                height: DEFAULT_BODY_HEIGHT
            }
        );
    }

    #[test]
    fn circle_radius_defaults_to_half_longest_side() {
        let s = ShapeSpec::resolve(ShapeKind::Circle, None, None, None, 60.0, 40.0);
        assert_eq!(s, ShapeSpec::Circle { radius: 30.0 });

        let s = ShapeSpec::resolve(ShapeKind::Circle, None, None, Some(12.0), 60.0, 40.0);
        assert_eq!(s, ShapeSpec::Circle { radius: 12.0 });
    }

    #[test]
    fn zero_override_counts_as_absent() {
        let s = ShapeSpec::resolve(ShapeKind::Rectangle, Some(0.0), None, None, 0.0, 0.0);
        assert_eq!(
            s,
            ShapeSpec::Rect {
                width: DEFAULT_BODY_WIDTH,
                height: DEFAULT_BODY_HEIGHT
            }
        );
    }
}
