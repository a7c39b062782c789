/// Power easing curves for time-based tweens.
///
/// Names follow the `powerN.direction` convention (`power2.inOut`). Every
/// curve maps progress in \[0, 1\] onto \[0, 1\] with `ease(0) == 0` and
/// `ease(1) == 1`; `power0` is linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
}

impl Ease {
    /// Parse a curve name such as `power2.inOut`. Returns `None` for unknown
    /// names; a bare `powerN` means its `.out` variant.
    pub fn from_name(name: &str) -> Option<Self> {
        let (family, direction) = name.split_once('.').unwrap_or((name, "out"));
        let power = match family {
            "power0" => 0,
            "power1" => 1,
            "power2" => 2,
            "power3" => 3,
            "power4" => 4,
            _ => return None,
        };
        match direction {
            "in" => Some(Ease::PowerIn(power)),
            "out" => Some(Ease::PowerOut(power)),
            "inOut" => Some(Ease::PowerInOut(power)),
            _ => None,
        }
    }

    /// Evaluate the curve. Input outside \[0, 1\] is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::PowerIn(p) => t.powi(i32::from(p) + 1),
            Ease::PowerOut(p) => 1.0 - (1.0 - t).powi(i32::from(p) + 1),
            Ease::PowerInOut(p) => {
                let exp = i32::from(p) + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(exp) / 2.0
                }
            }
        }
    }
}
