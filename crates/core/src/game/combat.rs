//! Combat stats and the single attack-resolution routine.

use rand_chacha::rand_core::Rng;

use crate::types::Faction;

/// Shared combat block for the player and every opponent. `alive` is a latch:
/// once hp drops to zero or below it never flips back, healing included.
#[derive(Clone, Debug)]
pub struct CombatStats {
    pub name: String,
    pub faction: Faction,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_base: i32,
    pub defense_base: i32,
    pub agility: i32,
    pub xp_value: i32,
    pub alive: bool,
}

impl CombatStats {
    pub fn new(
        name: &str,
        faction: Faction,
        max_hp: i32,
        attack_base: i32,
        defense_base: i32,
        agility: i32,
        xp_value: i32,
    ) -> Self {
        Self {
            name: name.to_string(),
            faction,
            hp: max_hp,
            max_hp,
            attack_base,
            defense_base,
            agility,
            xp_value,
            alive: true,
        }
    }

    /// Restores hp, clamped at `max_hp`. Healing a corpse is a no-op.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if !self.alive || amount <= 0 {
            return 0;
        }
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Applies damage. Hp may go negative; the `alive` latch flips exactly
    /// once.
    pub fn take_damage(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Miss,
    Hit { damage: i32, defender_died: bool },
}

/// Uniform roll in `[0, bound)`; a non-positive bound always rolls zero.
pub(crate) fn uniform(rng: &mut impl Rng, bound: i32) -> i32 {
    if bound <= 0 {
        return 0;
    }
    (rng.next_u32() % bound as u32) as i32
}

/// One attack: `uniform(0, attack) - uniform(0, defense)`. Non-positive
/// results are a miss and leave the defender untouched.
pub fn resolve_attack(
    attack_value: i32,
    defense_value: i32,
    defender: &mut CombatStats,
    rng: &mut impl Rng,
) -> AttackOutcome {
    let damage = uniform(rng, attack_value) - uniform(rng, defense_value);
    if damage <= 0 {
        return AttackOutcome::Miss;
    }
    let was_alive = defender.alive;
    defender.take_damage(damage);
    AttackOutcome::Hit { damage, defender_died: was_alive && !defender.alive }
}
