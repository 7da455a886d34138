quantity!(
    /// Tariff rate in pounds per kilowatt-hour.
    KilowattHourRate, suffix: " £/kWh", precision: 2
);
