//! User stimuli applied between frames: pointer pushes and recoloring

use crate::color::Color;
use crate::engine::Body;
use glam::Vec2;

/// Push every body whose disc contains `point`.
///
/// Each hit body gets `(point - center) * scale` added to its velocity.
/// Returns the index of the last hit body, or `None` if nothing was hit.
pub fn apply_pointer_impulse(bodies: &mut [Body], point: Vec2, scale: f32) -> Option<usize> {
    let mut last_hit = None;
    for (idx, body) in bodies.iter_mut().enumerate() {
        if body.contains(point) {
            body.vel += (point - body.pos) * scale;
            last_hit = Some(idx);
        }
    }
    last_hit
}

/// Recolor the selected body and clear the selection.
///
/// Returns the recolored index. Without a selection nothing changes.
pub fn assign_color(bodies: &mut [Body], selection: &mut Option<usize>, color: Color) -> Option<usize> {
    let idx = selection.take()?;
    let body = bodies.get_mut(idx)?;
    body.color = color;
    Some(idx)
}
