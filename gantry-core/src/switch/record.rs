//! Per-switch record and the single-switch update
//!
//! Debouncing is done with a lockout window: the first sample that differs
//! from the debounced state is accepted immediately, and any further change
//! is ignored until `lockout_ticks` have elapsed. A limit hit therefore
//! reaches the motion system on the same poll it is seen.

use super::action::{ActionContext, ActionSlot, SwitchAction};
use super::types::{Edge, SwitchId, SwitchMode, SwitchState, Tick, WiringType, DEFAULT_LOCKOUT_TICKS};

/// One homing/limit switch
#[derive(Debug, Clone)]
pub struct Switch {
    /// Registry slot of this switch
    id: SwitchId,
    /// Electrical polarity
    wiring: WiringType,
    /// Homing/limit usage (disabled switches are not polled)
    mode: SwitchMode,
    /// Debounced, polarity-corrected state
    state: SwitchState,
    /// Edge confirmed on the most recent poll
    edge: Edge,
    /// Lockout length after a confirmed transition
    lockout_ticks: Tick,
    /// Tick at which the lockout expires (0 = not locked out)
    lockout_until: Tick,
    on_open: SwitchAction,
    on_closed: SwitchAction,
    on_leading: SwitchAction,
    on_trailing: SwitchAction,
}

impl Switch {
    /// Create a disabled, normally-open switch with default actions
    pub fn new(id: SwitchId) -> Self {
        Self {
            id,
            wiring: WiringType::NormallyOpen,
            mode: SwitchMode::Disabled,
            state: SwitchState::Open,
            edge: Edge::None,
            lockout_ticks: DEFAULT_LOCKOUT_TICKS,
            lockout_until: 0,
            on_open: SwitchAction::NoAction,
            on_closed: SwitchAction::NoAction,
            on_leading: SwitchAction::Feedhold,
            on_trailing: SwitchAction::NoAction,
        }
    }

    /// Reset state and actions, keeping only the id
    pub(crate) fn reset(&mut self, wiring: WiringType, lockout_ticks: Tick) {
        *self = Self {
            wiring,
            lockout_ticks,
            ..Self::new(self.id)
        };
    }

    pub fn id(&self) -> SwitchId {
        self.id
    }

    pub fn wiring(&self) -> WiringType {
        self.wiring
    }

    pub fn set_wiring(&mut self, wiring: WiringType) {
        self.wiring = wiring;
    }

    pub fn mode(&self) -> SwitchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SwitchMode) {
        self.mode = mode;
    }

    /// Debounced logical state
    pub fn state(&self) -> SwitchState {
        self.state
    }

    /// Edge confirmed on the most recent poll of this switch
    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn lockout_ticks(&self) -> Tick {
        self.lockout_ticks
    }

    pub fn set_lockout_ticks(&mut self, ticks: Tick) {
        self.lockout_ticks = ticks;
    }

    /// Tick at which the current lockout expires (0 = never armed)
    pub fn lockout_until(&self) -> Tick {
        self.lockout_until
    }

    /// Check if a transition at `now` would be suppressed
    pub fn is_locked_out(&self, now: Tick) -> bool {
        self.lockout_until != 0 && self.lockout_until > now
    }

    /// Get the action bound to a slot
    pub fn action(&self, slot: ActionSlot) -> SwitchAction {
        match slot {
            ActionSlot::OpenSteady => self.on_open,
            ActionSlot::ClosedSteady => self.on_closed,
            ActionSlot::LeadingEdge => self.on_leading,
            ActionSlot::TrailingEdge => self.on_trailing,
        }
    }

    /// Bind an action to a slot
    pub fn bind(&mut self, slot: ActionSlot, action: SwitchAction) {
        match slot {
            ActionSlot::OpenSteady => self.on_open = action,
            ActionSlot::ClosedSteady => self.on_closed = action,
            ActionSlot::LeadingEdge => self.on_leading = action,
            ActionSlot::TrailingEdge => self.on_trailing = action,
        }
    }

    /// Feed one raw pin sample through polarity correction and debounce
    ///
    /// `pin_high` is the raw level (high = physically open). Returns true
    /// if a transition was confirmed on this call.
    pub fn update(&mut self, pin_high: bool, now: Tick, ctx: &mut ActionContext<'_>) -> bool {
        if !self.mode.is_enabled() {
            return false;
        }

        let sensed = self.wiring.logical_state(pin_high);
        if sensed == self.state {
            self.edge = Edge::None;
            let action = match self.state {
                SwitchState::Open => self.on_open,
                SwitchState::Closed => self.on_closed,
            };
            action.invoke(self, ctx);
            return false;
        }

        // Inside the lockout window: treat as contact bounce
        if self.is_locked_out(now) {
            self.edge = Edge::None;
            return false;
        }

        self.state = sensed;
        self.lockout_until = now.saturating_add(self.lockout_ticks);

        let action = match self.state {
            SwitchState::Open => {
                self.edge = Edge::Trailing;
                self.on_trailing
            }
            SwitchState::Closed => {
                self.edge = Edge::Leading;
                self.on_leading
            }
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Switch {} {} at {}", self.id, self.edge, now);

        action.invoke(self, ctx);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MotionRequests;
    use crate::switch::{Axis, Position};
    use crate::traits::Indicator;
    use proptest::prelude::*;

    /// Indicator that counts toggles
    ///
    /// Test actions below toggle it a distinct number of times so each
    /// slot's invocation count can be read back.
    struct CountingIndicator {
        toggles: u32,
    }

    impl Indicator for CountingIndicator {
        fn toggle(&mut self) {
            self.toggles += 1;
        }
    }

    fn one(_: &Switch, ctx: &mut ActionContext<'_>) {
        ctx.indicator.toggle();
    }

    fn hundred(_: &Switch, ctx: &mut ActionContext<'_>) {
        for _ in 0..100 {
            ctx.indicator.toggle();
        }
    }

    fn limit_switch() -> Switch {
        let mut switch = Switch::new(SwitchId::new(Axis::X, Position::Min));
        switch.set_mode(SwitchMode::Limit);
        switch.set_lockout_ticks(50);
        switch
    }

    /// Bind all four slots to counting actions (no escalation)
    fn counting_switch() -> Switch {
        let mut switch = limit_switch();
        switch.bind(ActionSlot::OpenSteady, SwitchAction::NoAction);
        switch.bind(ActionSlot::ClosedSteady, SwitchAction::NoAction);
        switch.bind(ActionSlot::LeadingEdge, SwitchAction::Call(one));
        switch.bind(ActionSlot::TrailingEdge, SwitchAction::Call(hundred));
        switch
    }

    #[test]
    fn test_new_switch_defaults() {
        let switch = Switch::new(SwitchId::new(Axis::Z, Position::Max));
        assert_eq!(switch.mode(), SwitchMode::Disabled);
        assert_eq!(switch.wiring(), WiringType::NormallyOpen);
        assert_eq!(switch.state(), SwitchState::Open);
        assert_eq!(switch.edge(), Edge::None);
        assert_eq!(switch.lockout_ticks(), DEFAULT_LOCKOUT_TICKS);
        assert_eq!(switch.lockout_until(), 0);
        assert!(switch.action(ActionSlot::OpenSteady).is_no_action());
        assert!(switch.action(ActionSlot::ClosedSteady).is_no_action());
        assert!(switch.action(ActionSlot::LeadingEdge).is_feedhold());
        assert!(switch.action(ActionSlot::TrailingEdge).is_no_action());
    }

    #[test]
    fn test_disabled_switch_is_inert() {
        let mut switch = counting_switch();
        switch.set_mode(SwitchMode::Disabled);
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };
        let mut ctx = ActionContext::new(&mut cycle, &mut led);

        assert!(!switch.update(false, 10, &mut ctx));
        assert!(!switch.update(true, 1000, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Open);
        assert_eq!(switch.lockout_until(), 0);
        drop(ctx);
        assert_eq!(led.toggles, 0);
    }

    #[test]
    fn test_normally_open_closes_on_low() {
        let mut switch = counting_switch();
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };
        let mut ctx = ActionContext::new(&mut cycle, &mut led);

        assert!(!switch.update(true, 0, &mut ctx));
        assert!(switch.update(false, 10, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Closed);
        assert_eq!(switch.edge(), Edge::Leading);
    }

    #[test]
    fn test_normally_closed_opens_on_low() {
        let mut switch = counting_switch();
        switch.set_wiring(WiringType::NormallyClosed);
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };
        let mut ctx = ActionContext::new(&mut cycle, &mut led);

        // Low is the resting level of an NC switch
        assert!(!switch.update(false, 0, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Open);

        assert!(switch.update(true, 10, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Closed);
        assert_eq!(switch.edge(), Edge::Leading);
    }

    #[test]
    fn test_lockout_window() {
        let mut switch = counting_switch();
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };
        let mut ctx = ActionContext::new(&mut cycle, &mut led);

        assert!(switch.update(false, 100, &mut ctx));
        assert_eq!(switch.lockout_until(), 150);

        // Bounce inside [100, 150) is ignored
        assert!(!switch.update(true, 100, &mut ctx));
        assert!(!switch.update(true, 149, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Closed);
        assert_eq!(switch.edge(), Edge::None);

        // First sample at the window end is accepted
        assert!(switch.update(true, 150, &mut ctx));
        assert_eq!(switch.state(), SwitchState::Open);
        assert_eq!(switch.edge(), Edge::Trailing);
        assert_eq!(switch.lockout_until(), 200);
        drop(ctx);

        // One leading + one trailing edge action
        assert_eq!(led.toggles, 101);
    }

    #[test]
    fn test_edge_actions_fire_once() {
        let mut switch = counting_switch();
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };

        {
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            assert!(switch.update(false, 10, &mut ctx));
        }
        assert_eq!(led.toggles, 1);

        // Staying closed does not re-fire the leading edge
        {
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            for tick in 11..500 {
                assert!(!switch.update(false, tick, &mut ctx));
            }
        }
        assert_eq!(led.toggles, 1);
        assert_eq!(switch.edge(), Edge::None);
    }

    #[test]
    fn test_steady_actions_every_poll() {
        let mut switch = limit_switch();
        switch.bind(ActionSlot::OpenSteady, SwitchAction::Call(one));
        switch.bind(ActionSlot::ClosedSteady, SwitchAction::Call(hundred));
        switch.bind(ActionSlot::LeadingEdge, SwitchAction::NoAction);

        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };

        {
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            for tick in 0..5 {
                switch.update(true, tick, &mut ctx);
            }
        }
        assert_eq!(led.toggles, 5);

        {
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            // Transition poll runs no steady action
            assert!(switch.update(false, 5, &mut ctx));
            for tick in 6..9 {
                switch.update(false, tick, &mut ctx);
            }
        }
        assert_eq!(led.toggles, 5 + 300);
    }

    #[test]
    fn test_default_leading_edge_escalates() {
        let mut switch = Switch::new(SwitchId::new(Axis::X, Position::Max));
        switch.set_mode(SwitchMode::Limit);
        let mut cycle = MotionRequests::new();
        let mut led = CountingIndicator { toggles: 0 };

        {
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            switch.update(false, 1, &mut ctx);
        }
        assert!(cycle.limit_triggered());
        assert_eq!(led.toggles, 1);
    }

    proptest! {
        #[test]
        fn prop_disabled_never_changes(samples in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut switch = counting_switch();
            switch.set_mode(SwitchMode::Disabled);
            let mut cycle = MotionRequests::new();
            let mut led = CountingIndicator { toggles: 0 };
            let mut ctx = ActionContext::new(&mut cycle, &mut led);

            for (tick, high) in samples.into_iter().enumerate() {
                prop_assert!(!switch.update(high, tick as Tick, &mut ctx));
                prop_assert_eq!(switch.state(), SwitchState::Open);
                prop_assert_eq!(switch.edge(), Edge::None);
                prop_assert_eq!(switch.lockout_until(), 0);
            }
            drop(ctx);
            prop_assert_eq!(led.toggles, 0);
        }

        #[test]
        fn prop_wiring_types_are_mirrored(high in any::<bool>()) {
            let mut no = limit_switch();
            let mut nc = limit_switch();
            nc.set_wiring(WiringType::NormallyClosed);
            no.bind(ActionSlot::LeadingEdge, SwitchAction::NoAction);
            nc.bind(ActionSlot::LeadingEdge, SwitchAction::NoAction);

            let mut cycle = MotionRequests::new();
            let mut led = CountingIndicator { toggles: 0 };
            let mut ctx = ActionContext::new(&mut cycle, &mut led);
            no.update(high, 1, &mut ctx);
            nc.update(high, 1, &mut ctx);
            prop_assert_ne!(no.state(), nc.state());
        }

        #[test]
        fn prop_reverse_sample_held_off_for_lockout(
            start in 1u64..10_000,
            lockout in 1u64..1_000,
            offset in 0u64..2_000,
        ) {
            let mut switch = counting_switch();
            switch.set_lockout_ticks(lockout);
            let mut cycle = MotionRequests::new();
            let mut led = CountingIndicator { toggles: 0 };
            let mut ctx = ActionContext::new(&mut cycle, &mut led);

            prop_assert!(switch.update(false, start, &mut ctx));
            let accepted = switch.update(true, start + offset, &mut ctx);
            prop_assert_eq!(accepted, offset >= lockout);
            let expected = if offset >= lockout { SwitchState::Open } else { SwitchState::Closed };
            prop_assert_eq!(switch.state(), expected);
        }
    }
}
