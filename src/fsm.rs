/// Minimal finite-state-machine container.
///
/// `S` is the state type (usually an enum). The machine tracks the current
/// state, the previous state, and how long the machine has been in its current
/// state. **Transition logic is intentionally kept out of the machine itself**
/// — it lives in the step function that drives it (`systems::player`).
///
/// The single `elapsed` counter doubles as the per-state timer: at most one
/// timed state is active at a time, and the counter resets on every
/// transition, so a non-active state's timer always reads zero.
pub struct StateMachine<S: Clone> {
    pub state: S,
    pub previous: S,
    /// Seconds spent in the current state. Reset to 0.0 on each transition.
    pub elapsed: f32,
    entered_this_tick: bool,
}

impl<S: Clone> StateMachine<S> {
    /// Create a new machine starting in `initial`.
    /// `just_entered()` returns `true` on the first tick.
    pub fn new(initial: S) -> Self {
        Self {
            previous: initial.clone(),
            state: initial,
            elapsed: 0.0,
            entered_this_tick: true,
        }
    }

    /// Transition to `next` only if it is a **different variant** from the
    /// current state (compared by discriminant — no `PartialEq` required).
    /// Resets `elapsed` to 0.0 and sets `just_entered()` for one tick.
    pub fn go(&mut self, next: S) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            self.previous = std::mem::replace(&mut self.state, next);
            self.elapsed = 0.0;
            self.entered_this_tick = true;
        }
    }

    /// Advance the elapsed-in-state timer by `dt` seconds and clear the
    /// `just_entered` flag. Call once per tick **before** evaluating
    /// transitions, so the tick that crosses a duration threshold is the
    /// tick that fires the exit.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        self.entered_this_tick = false;
    }

    /// Returns `true` only on the first tick after entering this state.
    pub fn just_entered(&self) -> bool {
        self.entered_this_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Toy {
        A,
        B,
    }

    #[test]
    fn go_resets_elapsed_and_flags_entry() {
        let mut fsm = StateMachine::new(Toy::A);
        assert!(fsm.just_entered());
        fsm.tick(0.5);
        assert!(!fsm.just_entered());
        assert_eq!(fsm.elapsed, 0.5);

        fsm.go(Toy::B);
        assert_eq!(fsm.state, Toy::B);
        assert_eq!(fsm.previous, Toy::A);
        assert_eq!(fsm.elapsed, 0.0);
        assert!(fsm.just_entered());
    }

    #[test]
    fn go_to_same_variant_is_a_no_op() {
        let mut fsm = StateMachine::new(Toy::A);
        fsm.tick(1.0);
        fsm.go(Toy::A);
        assert_eq!(fsm.elapsed, 1.0);
        assert!(!fsm.just_entered());
    }
}
