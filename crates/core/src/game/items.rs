//! Inventory items, pickup and equipment rules, and the opponent loot table.

use rand_chacha::rand_core::Rng;

use crate::game::combat::uniform;
use crate::state::Player;
use crate::types::{GameError, LogEvent};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub count: i32,
    pub attack_mod: i32,
    pub defense_mod: i32,
    pub healing: i32,
    pub single_use: bool,
    pub weapon: bool,
    pub armor: bool,
    pub key: bool,
    pub quest_token: bool,
}

impl InventoryItem {
    pub fn weapon(name: &str, attack_mod: i32) -> Self {
        Self {
            name: name.to_string(),
            count: 1,
            attack_mod,
            weapon: true,
            ..Self::default()
        }
    }

    pub fn armor(name: &str, defense_mod: i32) -> Self {
        Self {
            name: name.to_string(),
            count: 1,
            defense_mod,
            armor: true,
            ..Self::default()
        }
    }

    pub fn consumable(name: &str, healing: i32) -> Self {
        Self {
            name: name.to_string(),
            count: 1,
            healing,
            single_use: true,
            ..Self::default()
        }
    }

    pub fn currency(name: &str, count: i32) -> Self {
        Self { name: name.to_string(), count, ..Self::default() }
    }

    pub fn key(name: &str) -> Self {
        Self { name: name.to_string(), count: 1, key: true, ..Self::default() }
    }

    pub fn quest_token(name: &str) -> Self {
        Self {
            name: name.to_string(),
            count: 1,
            quest_token: true,
            ..Self::default()
        }
    }
}

impl Player {
    /// Effective attack: base plus the equipped weapon's modifier.
    pub fn attack_value(&self) -> i32 {
        let weapon = self
            .equipped_weapon
            .and_then(|idx| self.inventory.get(idx))
            .map_or(0, |item| item.attack_mod);
        self.stats.attack_base + weapon
    }

    /// Effective defense: base plus the equipped armor's modifier.
    pub fn defense_value(&self) -> i32 {
        let armor = self
            .equipped_armor
            .and_then(|idx| self.inventory.get(idx))
            .map_or(0, |item| item.defense_mod);
        self.stats.defense_base + armor
    }

    /// Adds an item, stacking counts onto an existing entry of the same name,
    /// and raises the key/relic flags.
    pub fn receive_item(&mut self, item: InventoryItem, log: &mut Vec<LogEvent>) {
        if item.key {
            self.has_key = true;
        }
        if item.quest_token {
            self.has_relic = true;
        }
        log.push(LogEvent::ItemReceived { name: item.name.clone(), count: item.count });
        if let Some(existing) =
            self.inventory.iter_mut().find(|i| i.name == item.name)
        {
            existing.count += item.count;
            return;
        }
        self.inventory.push(item);
    }

    /// Applies the 1-based inventory selection: equip a weapon or armor, or
    /// drink a consumable. Single-use items are removed after use.
    pub fn select_item(
        &mut self,
        slot: u8,
        log: &mut Vec<LogEvent>,
    ) -> Result<(), GameError> {
        if slot == 0 {
            return Err(GameError::InvalidItemSlot);
        }
        let idx = usize::from(slot) - 1;
        if idx >= self.inventory.len() {
            return Err(GameError::InvalidItemSlot);
        }

        let item = &self.inventory[idx];
        if item.weapon {
            self.equipped_weapon = Some(idx);
            log.push(LogEvent::ItemEquipped { name: item.name.clone() });
        } else if item.armor {
            self.equipped_armor = Some(idx);
            log.push(LogEvent::ItemEquipped { name: item.name.clone() });
        } else if item.healing > 0 {
            let healed = self.stats.heal(item.healing);
            log.push(LogEvent::ItemUsed { name: item.name.clone(), healed });
            if item.single_use {
                self.consume_at(idx);
            }
        }
        Ok(())
    }

    /// Removes one charge at `idx`, dropping the entry when it empties and
    /// shifting the equipped indices past it.
    fn consume_at(&mut self, idx: usize) {
        let item = &mut self.inventory[idx];
        item.count -= 1;
        if item.count > 0 {
            return;
        }
        self.inventory.remove(idx);
        for equipped in [&mut self.equipped_weapon, &mut self.equipped_armor] {
            match equipped {
                Some(e) if *e == idx => *equipped = None,
                Some(e) if *e > idx => *e -= 1,
                _ => {}
            }
        }
    }

    pub fn receive_xp(&mut self, amount: i32, log: &mut Vec<LogEvent>) {
        if amount <= 0 {
            return;
        }
        self.xp += amount;
        log.push(LogEvent::XpGained { amount, total: self.xp });
    }

    /// One line per inventory entry for the inventory display command.
    pub fn inventory_lines(&self) -> Vec<String> {
        self.inventory
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let mut line = format!("{}. {} x{}", idx + 1, item.name, item.count);
                if self.equipped_weapon == Some(idx) || self.equipped_armor == Some(idx)
                {
                    line.push_str(" (equipped)");
                }
                line
            })
            .collect()
    }
}

/// Drop table rolled when an opponent dies: 2-in-5 nothing, otherwise a
/// knife, a bite of bread, or a handful of coins.
pub fn roll_loot(rng: &mut impl Rng) -> Option<InventoryItem> {
    match uniform(rng, 5) {
        2 => Some(InventoryItem::weapon("Rusty Knife", 1)),
        3 => Some(InventoryItem::consumable("Moldy Bread", 2)),
        4 => Some(InventoryItem::currency("Gold Coin", uniform(rng, 5) + 1)),
        _ => None,
    }
}
