//! Motion cycle states

/// What the motion system is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// No cycle running
    #[default]
    Off,
    /// Running a program
    Machining,
    /// Probing cycle
    Probe,
    /// Homing cycle; switch contact pauses motion
    Homing,
    /// Manual jog
    Jog,
}

impl CycleState {
    /// Check if a homing cycle is running
    pub fn is_homing(&self) -> bool {
        matches!(self, CycleState::Homing)
    }
}
