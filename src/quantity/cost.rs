/// Rates are quoted in pounds, costs are reported in pence.
pub const PENCE_PER_POUND: f64 = 100.0;

quantity!(
    /// Cost in pence, the minor currency unit.
    Pence, suffix: " p", precision: 2
);

impl Pence {
    pub const ONE: Self = Self(1.0);

    /// Round to two decimal places. Applied only when a billing record is
    /// finalized, never to intermediate sums.
    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}
