/// Named time-warp functions for animated scrolling.
///
/// Every curve maps normalized progress `[0, 1]` to eased progress with
/// `sample(0) = 0` and `sample(1) = 1`; elastic momentarily overshoots past 1
/// before settling. Curves that have an equivalent `cubic-bezier` form also
/// expose it as a descriptor for the delegated-transition strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// `k(2-k)`. Used to hand a decelerating momentum scroll over to the
    /// bounce phase without a visible kink.
    Quadratic,
    /// `sqrt(1-(k-1)^2)`. The default curve for scrolls and bounce recovery.
    #[default]
    Circular,
    /// Cubic overshoot with a fixed constant.
    Back,
    /// Four-segment piecewise parabola.
    Bounce,
    /// Damped sinusoid with fixed amplitude/period.
    Elastic,
}

impl Easing {
    /// Evaluates the curve at normalized progress `k`.
    pub fn sample(self, k: f64) -> f64 {
        match self {
            Self::Quadratic => k * (2.0 - k),
            Self::Circular => {
                let k = k - 1.0;
                (1.0 - k * k).sqrt()
            }
            Self::Back => {
                let b = 4.0;
                let k = k - 1.0;
                k * k * ((b + 1.0) * k + b) + 1.0
            }
            Self::Bounce => {
                if k < 1.0 / 2.75 {
                    7.5625 * k * k
                } else if k < 2.0 / 2.75 {
                    let k = k - 1.5 / 2.75;
                    7.5625 * k * k + 0.75
                } else if k < 2.5 / 2.75 {
                    let k = k - 2.25 / 2.75;
                    7.5625 * k * k + 0.9375
                } else {
                    let k = k - 2.625 / 2.75;
                    7.5625 * k * k + 0.984375
                }
            }
            Self::Elastic => {
                let f = 0.22;
                let e = 0.4;
                if k == 0.0 {
                    0.0
                } else if k == 1.0 {
                    1.0
                } else {
                    e * (2.0f64).powf(-10.0 * k)
                        * ((k - f / 4.0) * (2.0 * core::f64::consts::PI) / f).sin()
                        + 1.0
                }
            }
        }
    }

    /// Declarative curve descriptor for rendering layers that run the
    /// transition natively. Empty for curves without a bezier equivalent;
    /// those always animate through the explicit-stepping driver.
    pub fn curve_descriptor(self) -> &'static str {
        match self {
            Self::Quadratic => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::Circular => "cubic-bezier(0.1, 0.57, 0.1, 1)",
            Self::Back => "cubic-bezier(0.175, 0.885, 0.32, 1.275)",
            Self::Bounce | Self::Elastic => "",
        }
    }
}
