//! Console formatting for simulation log events.

use core::LogEvent;

pub fn format_event(event: &LogEvent) -> String {
    match event {
        LogEvent::Narration(text) => text.clone(),
        LogEvent::LoadFailure(reason) => format!("Resource failure: {reason}"),
        LogEvent::Paused(true) => "Paused.".to_string(),
        LogEvent::Paused(false) => "Unpaused.".to_string(),
        LogEvent::AttackHit { attacker, defender, damage, defender_hp, defender_max_hp } => {
            format!(
                "{attacker} hit {defender} for {damage} ({defender_hp}/{defender_max_hp} hp left)."
            )
        }
        LogEvent::AttackMissed { attacker, defender } => {
            format!("{attacker} missed {defender}.")
        }
        LogEvent::OpponentDied { name } => format!("The {name} dies."),
        LogEvent::XpGained { amount, total } => {
            format!("You gain {amount} experience ({total} total).")
        }
        LogEvent::ItemReceived { name, count } => {
            if *count > 1 {
                format!("You receive {count}x {name}.")
            } else {
                format!("You receive {name}.")
            }
        }
        LogEvent::ItemEquipped { name } => format!("You equip the {name}."),
        LogEvent::ItemUsed { name, healed } => {
            format!("You use the {name} and recover {healed} hp.")
        }
        LogEvent::NothingToPickUp => "There is nothing left to take.".to_string(),
        LogEvent::DialogueLine(line) => format!("\"{line}\""),
        LogEvent::DoorDiscovered { locked: true } => {
            "You discover a hidden door. It is locked.".to_string()
        }
        LogEvent::DoorDiscovered { locked: false } => {
            "You discover a hidden door.".to_string()
        }
        LogEvent::DoorUnlocked => "The key fits. The lock clicks open.".to_string(),
        LogEvent::DoorLocked => "The door is locked.".to_string(),
        LogEvent::DoorOpened => "The door swings open.".to_string(),
        LogEvent::EventDamage { amount } => format!("You take {amount} damage!"),
        LogEvent::EventHealed { amount } => format!("You recover {amount} hp."),
        LogEvent::StatusReport { hp, max_hp, xp } => {
            format!("Health: {hp}/{max_hp}  Experience: {xp}")
        }
        LogEvent::InventoryListing(lines) => {
            if lines.is_empty() {
                "Your pack is empty.".to_string()
            } else {
                format!("You carry:\n  {}", lines.join("\n  "))
            }
        }
        LogEvent::GameOver => "You have died. Game over.".to_string(),
        LogEvent::QuestComplete => {
            "The Sun Relic is home. You have won!".to_string()
        }
    }
}
