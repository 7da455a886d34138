use std::ops::Mul;

use crate::quantity::{
    cost::{PENCE_PER_POUND, Pence},
    rate::KilowattHourRate,
};

quantity!(
    /// Energy in kilowatt-hours.
    KilowattHours, suffix: " kWh", precision: 2
);

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Pence;

    /// Cost of this much energy at the given rate, in the minor currency unit.
    /// No rounding happens here.
    fn mul(self, rate: KilowattHourRate) -> Self::Output {
        Pence(self.0 * rate.0 * PENCE_PER_POUND)
    }
}
