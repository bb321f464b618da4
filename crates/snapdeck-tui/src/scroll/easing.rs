//! Pure easing curves mapping progress `[0, 1]` to eased progress `[0, 1]`.

// The variant set lives in core config so config files can name a curve.
pub use snapdeck_core::EasingType;

/// Calculation methods for [`EasingType`].
pub trait EasingTypeExt {
    /// Apply the curve to a progress value in `[0, 1]`.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Polynomial ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn ease_out_pow(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
