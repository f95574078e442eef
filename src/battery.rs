//! Battery status snapshot.

/// Charge state as reported by the host power-management service.
///
/// The percentage is clamped to 0–100 by the producer; the face trusts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Battery percentage, 0–100.
    pub percent: u8,
    /// Charging state.
    pub charging: bool,
}
