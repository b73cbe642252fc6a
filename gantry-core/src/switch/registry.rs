//! Switch registry
//!
//! Fixed axis × position table of switches, plus the whole-table poll.

use super::action::{ActionContext, ActionSlot, SwitchAction};
use super::record::Switch;
use super::types::{
    Edge, SwitchError, SwitchId, SwitchMode, Tick, WiringType, AXES, DEFAULT_LOCKOUT_TICKS,
    POSITIONS,
};
use crate::config::{ConfigError, SwitchesConfig};
use crate::traits::SwitchInputs;

/// All homing/limit switches of the machine
///
/// Owned by whoever runs the poll; nothing here is global.
#[derive(Debug, Clone)]
pub struct Switches {
    /// Wiring type copied into every switch by [`Switches::initialize`]
    default_wiring: WiringType,
    /// Lockout quantum copied into every switch by [`Switches::initialize`]
    default_lockout_ticks: Tick,
    /// Switch table, indexed by axis then position
    table: [[Switch; POSITIONS]; AXES],
    /// Most recent switch to report a leading edge
    last_thrown: Option<SwitchId>,
}

impl Default for Switches {
    fn default() -> Self {
        Self::new()
    }
}

impl Switches {
    /// Create an initialized registry with every switch disabled
    pub fn new() -> Self {
        let mut switches = Self {
            default_wiring: WiringType::NormallyOpen,
            default_lockout_ticks: DEFAULT_LOCKOUT_TICKS,
            table: core::array::from_fn(|axis| {
                core::array::from_fn(|position| {
                    Switch::new(SwitchId::ALL[axis * POSITIONS + position])
                })
            }),
            last_thrown: None,
        };
        switches.initialize();
        switches
    }

    /// Reset every switch to defaults
    ///
    /// Wiring comes from the process-wide default, state is open with no
    /// lockout, steady and trailing actions are no-ops and the leading edge
    /// escalates. Mode goes back to disabled, so any configuration applied
    /// before this call is lost.
    pub fn initialize(&mut self) {
        for switch in self.table.iter_mut().flatten() {
            switch.reset(self.default_wiring, self.default_lockout_ticks);
        }
        self.last_thrown = None;
    }

    /// Process-wide default wiring type
    pub fn default_wiring(&self) -> WiringType {
        self.default_wiring
    }

    /// Set the process-wide default wiring (takes effect on `initialize`)
    pub fn set_default_wiring(&mut self, wiring: WiringType) {
        self.default_wiring = wiring;
    }

    /// Default lockout quantum (takes effect on `initialize`)
    pub fn set_default_lockout_ticks(&mut self, ticks: Tick) {
        self.default_lockout_ticks = ticks;
    }

    /// Apply a switch configuration
    ///
    /// Re-initializes the table from the config defaults, then applies the
    /// per-switch entries in order. Unlisted switches stay disabled. A config
    /// that fails validation is rejected and the table is left untouched.
    pub fn configure(&mut self, config: &SwitchesConfig) -> Result<(), ConfigError> {
        config.validate()?;

        self.default_wiring = config.default_wiring;
        self.default_lockout_ticks = config.lockout_ticks;
        self.initialize();

        for entry in config.switches.iter() {
            let switch = self.get_mut(entry.id);
            switch.set_mode(entry.mode);
            if let Some(wiring) = entry.wiring {
                switch.set_wiring(wiring);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: SwitchId) -> &Switch {
        &self.table[id.axis.index()][id.position.index()]
    }

    pub fn get_mut(&mut self, id: SwitchId) -> &mut Switch {
        &mut self.table[id.axis.index()][id.position.index()]
    }

    /// Iterate switches in poll order
    pub fn iter(&self) -> impl Iterator<Item = &Switch> {
        self.table.iter().flatten()
    }

    /// Get the mode of a switch by flat number
    pub fn switch_mode(&self, number: u8) -> Result<SwitchMode, SwitchError> {
        let id = SwitchId::from_number(number)?;
        Ok(self.get(id).mode())
    }

    /// Bind an action to the same slot on every switch
    pub fn bind_all(&mut self, slot: ActionSlot, action: SwitchAction) {
        for switch in self.table.iter_mut().flatten() {
            switch.bind(slot, action);
        }
    }

    /// Check if any limit switch is currently closed
    pub fn limit_thrown(&self) -> bool {
        self.iter()
            .any(|s| s.mode().has_limit() && s.state().is_closed())
    }

    /// Switch that most recently reported a leading edge
    pub fn last_thrown(&self) -> Option<SwitchId> {
        self.last_thrown
    }

    /// Feed one raw sample to a single switch
    ///
    /// Returns true if the switch confirmed a transition.
    pub fn read(
        &mut self,
        id: SwitchId,
        pin_high: bool,
        now: Tick,
        ctx: &mut ActionContext<'_>,
    ) -> bool {
        let switch = self.get_mut(id);
        let changed = switch.update(pin_high, now, ctx);
        if changed && switch.edge() == Edge::Leading {
            self.last_thrown = Some(id);
        }
        changed
    }

    /// Run one polling cycle over every switch
    ///
    /// Switches are visited by axis, then by position. Always returns
    /// false; callers observe changes through the switch actions.
    pub fn poll<I: SwitchInputs>(
        &mut self,
        inputs: &mut I,
        now: Tick,
        ctx: &mut ActionContext<'_>,
    ) -> bool {
        for id in SwitchId::ALL {
            if !self.get(id).mode().is_enabled() {
                continue;
            }
            let pin_high = inputs.is_high(id);
            self.read(id, pin_high, now, ctx);
        }
        false
    }
}
