use std::f64::consts::PI;

/// Named easing curves mapping normalized progress to eased progress.
///
/// Inputs are not clamped; the shapes are only defined on `[0, 1]`. Serialized as the
/// editor's curve names (`"power2.out"`, `"back.out(1.7)"`, ...). Any unrecognized name
/// deserializes to [`Ease::Power2Out`] instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Ease {
    Linear,
    Power1Out,
    #[default]
    Power2Out,
    Power3Out,
    Power2In,
    Power3In,
    Power2InOut,
    /// Overshoot curve with `c1 = 1.70158`.
    BackOut,
    /// Decaying oscillation, amplitude 1, period 0.5.
    ElasticOut,
}

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

impl Ease {
    /// Every curve, in catalog order.
    pub const ALL: [Ease; 9] = [
        Self::Linear,
        Self::Power1Out,
        Self::Power2Out,
        Self::Power3Out,
        Self::Power2In,
        Self::Power3In,
        Self::Power2InOut,
        Self::BackOut,
        Self::ElasticOut,
    ];

    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t),
            Self::Power2Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2In => t.powi(2),
            Self::Power3In => t.powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::BackOut => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Self::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (2.0 * PI) / 3.0).sin() + 1.0
            }
        }
    }

    /// Canonical curve name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power1Out => "power1.out",
            Self::Power2Out => "power2.out",
            Self::Power3Out => "power3.out",
            Self::Power2In => "power2.in",
            Self::Power3In => "power3.in",
            Self::Power2InOut => "power2.inOut",
            Self::BackOut => "back.out(1.7)",
            Self::ElasticOut => "elastic.out(1, 0.5)",
        }
    }

    /// Exact-name lookup. Whitespace inside the parameter list is ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let (head, params) = split_params(name);
        Self::ALL.into_iter().find(|e| {
            let (want_head, want_params) = split_params(e.name());
            head == want_head && strip_ws(params).eq(strip_ws(want_params))
        })
    }

    /// Lookup with fallback: unknown or missing names resolve to [`Ease::Power2Out`].
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }
}

/// `"back.out(1.7)"` → `("back.out", "(1.7)")`; names without a parameter list keep an
/// empty tail.
fn split_params(name: &str) -> (&str, &str) {
    name.find('(').map_or((name, ""), |i| name.split_at(i))
}

fn strip_ws(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| !c.is_whitespace())
}

impl From<String> for Ease {
    fn from(name: String) -> Self {
        Self::from_name(Some(&name))
    }
}

impl From<&str> for Ease {
    fn from(name: &str) -> Self {
        Self::from_name(Some(name))
    }
}

impl From<Ease> for &'static str {
    fn from(ease: Ease) -> Self {
        ease.name()
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
