use std::f64::consts::PI;

/// Steepness of the [`Curve::Sigmoid`] logistic curve.
const SIGMOID_STEEPNESS: f64 = 12.0;

/// Easing curve mapping progress through a transition to a blend weight.
///
/// The weight says how much of the second operand to use. Unknown names resolve to
/// [`Curve::Linear`], both through [`Curve::from_name`] and when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Curve {
    /// `alpha = t`.
    Linear,
    /// Cubic smoothstep, `t² (3 − 2t)`.
    #[default]
    EaseInOut,
    /// Half cosine, `(1 − cos(πt)) / 2`.
    Cosine,
    /// Logistic curve centered at `t = 0.5`. Never reaches exactly 0 or 1.
    Sigmoid,
}

impl Curve {
    /// Every curve, in declaration order.
    pub const ALL: [Curve; 4] = [Self::Linear, Self::EaseInOut, Self::Cosine, Self::Sigmoid];

    /// Evaluate the curve at `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
            Self::Sigmoid => 1.0 / (1.0 + (-SIGMOID_STEEPNESS * (t - 0.5)).exp()),
        }
    }

    /// Resolve a curve by name, falling back to [`Curve::Linear`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Self::Linear,
            "ease_in_out" | "easeinout" | "ease-in-out" | "smoothstep" => Self::EaseInOut,
            "cosine" | "cos" => Self::Cosine,
            "sigmoid" | "logistic" => Self::Sigmoid,
            other => {
                tracing::warn!(curve = other, "unknown interpolation curve, using linear");
                Self::Linear
            }
        }
    }

    /// Canonical name, as accepted by [`Curve::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "ease_in_out",
            Self::Cosine => "cosine",
            Self::Sigmoid => "sigmoid",
        }
    }
}

impl From<String> for Curve {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Curve> for String {
    fn from(curve: Curve) -> Self {
        curve.name().to_owned()
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
