use crate::engine::Body;

/// Advance a body by one frame with explicit Euler: `pos += vel`.
///
/// A frame is the unit of time, so motion is frame-rate dependent.
pub fn integrate(body: &mut Body) {
    body.pos += body.vel;
}

/// Integrate every body in index order
pub fn integrate_all(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        integrate(body);
    }
}
