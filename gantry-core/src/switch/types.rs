//! Switch identity, wiring, and state types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tick counter unit (milliseconds in the firmware)
pub type Tick = u64;

/// Number of axes with switch pairs
pub const AXES: usize = 6;

/// Switch positions per axis (min, max)
pub const POSITIONS: usize = 2;

/// Total number of switch slots
pub const SWITCH_COUNT: usize = AXES * POSITIONS;

/// Default debounce lockout after a confirmed transition
pub const DEFAULT_LOCKOUT_TICKS: Tick = 250;

/// Machine axis carrying a switch pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
    A,
    B,
    C,
}

impl Axis {
    /// All axes in poll order
    pub const ALL: [Axis; AXES] = [Axis::X, Axis::Y, Axis::Z, Axis::A, Axis::B, Axis::C];

    /// Table index of this axis
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Switch position along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// Switch at the axis minimum
    Min,
    /// Switch at the axis maximum
    Max,
}

impl Position {
    /// All positions in poll order
    pub const ALL: [Position; POSITIONS] = [Position::Min, Position::Max];

    /// Table index of this position
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Identifies one switch slot in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchId {
    pub axis: Axis,
    pub position: Position,
}

impl SwitchId {
    /// Every switch slot, by axis then by position
    pub const ALL: [SwitchId; SWITCH_COUNT] = {
        let mut ids = [SwitchId::new(Axis::X, Position::Min); SWITCH_COUNT];
        let mut i = 0;
        while i < SWITCH_COUNT {
            let axis = Axis::ALL[i / POSITIONS];
            let position = Position::ALL[i % POSITIONS];
            ids[i] = SwitchId::new(axis, position);
            i += 1;
        }
        ids
    };

    /// Create a switch id
    pub const fn new(axis: Axis, position: Position) -> Self {
        Self { axis, position }
    }

    /// Flat switch number (axis × positions + position)
    pub const fn number(self) -> u8 {
        (self.axis.index() * POSITIONS + self.position.index()) as u8
    }

    /// Look up a switch by its flat number
    pub fn from_number(number: u8) -> Result<Self, SwitchError> {
        SwitchId::ALL
            .get(number as usize)
            .copied()
            .ok_or(SwitchError::InvalidSwitchNumber(number))
    }
}

/// Electrical polarity of a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WiringType {
    /// Contact closes when actuated (pin pulled low)
    #[default]
    NormallyOpen,
    /// Contact opens when actuated (pin released high)
    NormallyClosed,
}

impl WiringType {
    /// Convert a raw pin level into a logical state
    ///
    /// `pin_high` is the raw sample: high means the circuit is physically
    /// open. The result is closed when the switch is actuated, for either
    /// wiring type.
    pub const fn logical_state(self, pin_high: bool) -> SwitchState {
        let closed = match self {
            WiringType::NormallyOpen => !pin_high,
            WiringType::NormallyClosed => pin_high,
        };
        if closed {
            SwitchState::Closed
        } else {
            SwitchState::Open
        }
    }
}

/// What a switch is used for
///
/// Encoded as bit flags: bit 0 = homing, bit 1 = limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchMode {
    /// Switch is not polled
    #[default]
    Disabled,
    /// Homing switch only
    Homing,
    /// Limit switch only
    Limit,
    /// Used for both homing and limits
    HomingLimit,
}

impl SwitchMode {
    pub const HOMING_BIT: u8 = 0x01;
    pub const LIMIT_BIT: u8 = 0x02;

    /// Raw mode bits
    pub const fn bits(self) -> u8 {
        match self {
            SwitchMode::Disabled => 0,
            SwitchMode::Homing => Self::HOMING_BIT,
            SwitchMode::Limit => Self::LIMIT_BIT,
            SwitchMode::HomingLimit => Self::HOMING_BIT | Self::LIMIT_BIT,
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, SwitchMode::Disabled)
    }

    pub const fn has_limit(self) -> bool {
        self.bits() & Self::LIMIT_BIT != 0
    }
}

/// Debounced logical switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SwitchState {
    /// Not actuated
    #[default]
    Open,
    /// Actuated / triggered
    Closed,
}

impl SwitchState {
    pub const fn is_closed(self) -> bool {
        matches!(self, SwitchState::Closed)
    }
}

/// Transition confirmed on the current poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// No transition this poll
    #[default]
    None,
    /// Open to closed
    Leading,
    /// Closed to open
    Trailing,
}

/// Errors from switch lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchError {
    /// Switch number outside the registry
    InvalidSwitchNumber(u8),
}
