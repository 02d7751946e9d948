//! The single easing primitive behind every animation in the toolkit.
//!
//! Every hover fade, knob slide, tab rise and scroll in the panel reduces to
//! repeated calls of [`ease`] at the host's tick rate, which is what keeps the
//! whole overlay feeling consistent.

/// Move `current` one frame toward `target`.
///
/// The step taken is `1/rate` of the remaining distance, but never less than
/// `min_step` in the direction of travel, and the result never overshoots
/// `target` (the final frame lands on it exactly). Pure and deterministic.
pub fn ease(current: f32, target: f32, rate: f32, min_step: f32) -> f32 {
    let dist = target - current;
    if dist == 0.0 {
        return current;
    }
    let step = (dist.abs() / rate).max(min_step);
    if step >= dist.abs() {
        // Adding the remainder back can round one ulp past the target.
        return target;
    }
    current + step.copysign(dist)
}
