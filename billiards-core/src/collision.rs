//! Collision response: walls of the surface and body-against-body contacts
//!
//! Both resolvers are reactive. They never prevent overlap, they only push
//! bodies apart and exchange velocity once overlap has happened. Fast bodies
//! can tunnel through each other between two frames.

use crate::engine::{Body, Surface};
use glam::Vec2;

/// Separation below which two centers count as coincident
pub const COINCIDENT_EPSILON: f32 = f32::EPSILON;

/// Resolve one axis against `[0, bound]`. Returns true on a bounce.
fn resolve_axis(pos: &mut f32, vel: &mut f32, radius: f32, bound: f32, damping: f32) -> bool {
    if *pos + radius > bound || *pos - radius < 0.0 {
        *vel *= -damping;
        // Coarse clamp to whichever wall is nearer to the center
        *pos = if *pos < bound / 2.0 { radius } else { bound - radius };
        true
    } else {
        false
    }
}

/// Bounce a body off the surface walls, x axis first, then y.
///
/// Returns the number of axes that bounced (0, 1 or 2).
pub fn resolve_walls(body: &mut Body, surface: &Surface, damping: f32) -> usize {
    let radius = body.radius();
    let bounced_x = resolve_axis(&mut body.pos.x, &mut body.vel.x, radius, surface.width, damping);
    let bounced_y = resolve_axis(&mut body.pos.y, &mut body.vel.y, radius, surface.height, damping);
    bounced_x as usize + bounced_y as usize
}

/// Elastic response between two bodies, radius standing in for mass.
///
/// Velocities are split into a component along the line of centers and a
/// tangential one. The normal components go through the 1-D elastic formula,
/// the tangential ones are kept. Overlap is then removed by moving each body
/// half of it along the line of centers, `a` forwards and `b` backwards.
///
/// Coincident centers use `+x` as the line of centers, so `a` ends up on the
/// right of `b`. Returns false when the bodies do not touch.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let delta = a.pos - b.pos;
    let distance = delta.length();
    let (r1, r2) = (a.radius(), b.radius());
    if distance >= r1 + r2 {
        return false;
    }

    let angle = if distance < COINCIDENT_EPSILON {
        0.0
    } else {
        delta.y.atan2(delta.x)
    };
    let normal = Vec2::from_angle(angle);
    let tangent = normal.perp();

    let (normal1, tangential1) = (a.vel.dot(normal), a.vel.dot(tangent));
    let (normal2, tangential2) = (b.vel.dot(normal), b.vel.dot(tangent));

    let total = r1 + r2;
    let final1 = ((r1 - r2) * normal1 + 2.0 * r2 * normal2) / total;
    let final2 = ((r2 - r1) * normal2 + 2.0 * r1 * normal1) / total;

    a.vel = normal * final1 + tangent * tangential1;
    b.vel = normal * final2 + tangent * tangential2;

    let correction = normal * ((total - distance) / 2.0);
    a.pos += correction;
    b.pos -= correction;

    log::trace!(
        "contact between r={} and r={} at distance {:.3}",
        r1,
        r2,
        distance
    );
    true
}

/// Resolve every unordered pair `(i, j)` with `i < j` in index order.
///
/// Later pairs see velocities already changed by earlier ones in the same
/// call. Returns the number of contacts.
pub fn resolve_pairs(bodies: &mut [Body]) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }
    contacts
}
