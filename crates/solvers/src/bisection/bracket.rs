/// Current bracket, oriented by residual sign.
///
/// `negative` is the endpoint whose residual is negative and `positive` the
/// one whose residual is positive. Neither is required to be the smaller x.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bracket {
    negative: f64,
    positive: f64,
}

impl Bracket {
    /// Orients two evaluated endpoints into a bracket.
    ///
    /// The endpoint with the smaller residual is taken as the negative one.
    /// Returns `None` if that residual is positive or the other is negative,
    /// meaning both endpoints lie on the same side of zero.
    pub(super) fn orient(a: f64, a_residual: f64, b: f64, b_residual: f64) -> Option<Self> {
        let (negative, negative_residual, positive, positive_residual) = if a_residual < b_residual
        {
            (a, a_residual, b, b_residual)
        } else {
            (b, b_residual, a, a_residual)
        };

        if negative_residual > 0.0 || positive_residual < 0.0 {
            return None;
        }

        Some(Self { negative, positive })
    }

    /// Creates a zero-width bracket pinned at an exact root.
    pub(super) fn point(x: f64) -> Self {
        Self {
            negative: x,
            positive: x,
        }
    }

    /// Returns the endpoint with a negative residual.
    #[must_use]
    pub fn negative(&self) -> f64 {
        self.negative
    }

    /// Returns the endpoint with a positive residual.
    #[must_use]
    pub fn positive(&self) -> f64 {
        self.positive
    }

    /// Returns the bracket as `[negative, positive]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.negative, self.positive]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.negative + self.positive)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.positive - self.negative).abs()
    }

    /// Replaces the endpoint that shares the sign of `residual`.
    ///
    /// A NaN residual is treated as positive.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if residual < 0.0 {
            self.negative = x;
        } else {
            self.positive = x;
        }
    }
}
