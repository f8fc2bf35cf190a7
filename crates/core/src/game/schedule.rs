//! Per-entity turn pacing.
//!
//! Every combatant carries a [`TurnTimer`]; the world loop polls it once per
//! tick and the entity only acts when a gate opens. Agility shortens the move
//! interval, so faster creatures act more often without any global turn queue.

/// Two counters, one per gate. Both advance on every move poll; an attack
/// poll only reads its counter, so attack cadence is expressed in multiples
/// of the move interval.
#[derive(Clone, Copy, Debug)]
pub struct TurnTimer {
    move_counter: i64,
    attack_counter: i64,
    move_interval: i32,
    steps_per_attack: i32,
}

impl TurnTimer {
    pub fn new(base_interval: i32, agility: i32, steps_per_attack: i32) -> Self {
        Self {
            move_counter: 0,
            attack_counter: 0,
            move_interval: base_interval - agility,
            steps_per_attack,
        }
    }

    /// Advances both counters by one and reports whether the move gate opens.
    /// A non-positive interval opens the gate on every poll.
    pub fn poll_move(&mut self) -> bool {
        self.move_counter += 1;
        self.attack_counter += 1;
        if self.move_counter > i64::from(self.move_interval) {
            self.move_counter = 0;
            return true;
        }
        false
    }

    /// Reports whether the attack gate opens, resetting it when it does. The
    /// counter is driven by `poll_move`; the attack threshold is
    /// `move_interval * steps_per_attack`.
    pub fn poll_attack(&mut self) -> bool {
        let threshold =
            i64::from(self.move_interval) * i64::from(self.steps_per_attack);
        if self.attack_counter > threshold {
            self.attack_counter = 0;
            return true;
        }
        false
    }
}
