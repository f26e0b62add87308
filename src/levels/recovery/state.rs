//! Resource-path game state.

/// Nodes to walk for the path to count as complete.
pub const MAX_NODES: usize = 5;

/// Scripted direction options, one row per node.
pub const CHOICE_SETS: [[&str; 3]; MAX_NODES] = [
    ["Точка тишины", "Точка контакта", "Точка движения"],
    ["Сон", "Питание", "Границы"],
    ["Тепло", "Ритм", "Поддержка"],
    ["Дневник", "Прогулка", "Музыка"],
    ["Вода", "Дыхание", "Разговор"],
];

/// Options offered past the scripted nodes.
pub const FALLBACK_CHOICES: [&str; 3] = ["Опора", "Связь", "Покой"];

/// Chance that a spawned object is harmful, by option index.
pub const BAD_CHANCE: [f64; 3] = [0.24, 0.28, 0.31];

/// Ticks granted to pick a direction (10 s at 10 ticks/sec).
pub const CHOICE_TICKS: u32 = 100;
/// Ticks one collect event lasts (10 s).
pub const COLLECT_TICKS: u32 = 100;
/// Ticks between spawns during collection (320 ms).
pub const SPAWN_INTERVAL_TICKS: u32 = 3;
/// Ticks a spawned object stays on the field before fading (2 s).
pub const ITEM_LIFETIME_TICKS: u32 = 20;
/// Field slots an object can occupy; keyed by the digit `slot + 1`.
pub const SLOTS: usize = 9;

/// One object on the field.
#[derive(Clone, Copy, Debug)]
pub struct FieldItem {
    pub slot: usize,
    pub harmful: bool,
    /// Ticks left before the object fades.
    pub ttl: u32,
}

/// Half of the node loop the run is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Picking a direction; the run clock is paused.
    Choice,
    /// Gathering for the picked direction.
    Collect,
}

/// Resource-path state.
pub struct RecoveryState {
    pub phase: Phase,
    /// Nodes already walked.
    pub node_index: usize,
    /// Ticks left to pick before the first option auto-selects.
    pub choice_ticks_left: u32,
    /// Direction picked for the current collect event.
    pub current_option: Option<&'static str>,
    /// Harmful-spawn chance of the current event.
    pub bad_chance: f64,
    /// Ticks left in the current collect event.
    pub collect_ticks_left: u32,
    /// Ticks until the next spawn.
    pub spawn_cooldown: u32,
    pub items: Vec<FieldItem>,
    /// Directions picked so far, in node order.
    pub picked: Vec<&'static str>,
    pub rng_seed: u64,
}

impl RecoveryState {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Choice,
            node_index: 0,
            choice_ticks_left: CHOICE_TICKS,
            current_option: None,
            bad_chance: 0.0,
            collect_ticks_left: 0,
            spawn_cooldown: SPAWN_INTERVAL_TICKS,
            items: Vec::new(),
            picked: Vec::new(),
            rng_seed: seed,
        }
    }

    /// Options offered at the current node.
    pub fn options(&self) -> [&'static str; 3] {
        CHOICE_SETS
            .get(self.node_index)
            .copied()
            .unwrap_or(FALLBACK_CHOICES)
    }

    /// Object occupying `slot`, if any.
    pub fn item_in_slot(&self, slot: usize) -> Option<&FieldItem> {
        self.items.iter().find(|item| item.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_nodes_offer_their_own_options() {
        let mut state = RecoveryState::new(1);
        assert_eq!(state.options(), CHOICE_SETS[0]);
        state.node_index = 3;
        assert_eq!(state.options(), CHOICE_SETS[3]);
    }

    #[test]
    fn options_fall_back_past_the_script() {
        let mut state = RecoveryState::new(1);
        state.node_index = MAX_NODES + 2;
        assert_eq!(state.options(), FALLBACK_CHOICES);
    }

    #[test]
    fn later_options_carry_more_risk() {
        assert!(BAD_CHANCE[0] < BAD_CHANCE[1]);
        assert!(BAD_CHANCE[1] < BAD_CHANCE[2]);
    }
}
