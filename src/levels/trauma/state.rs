//! Card-sorting game state.

/// The three buckets a card can belong to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardKind {
    Fact,
    Feeling,
    Thought,
}

/// Buckets in display order, matching the `1`/`2`/`3` keys.
pub const ALL_KINDS: [CardKind; 3] = [CardKind::Fact, CardKind::Feeling, CardKind::Thought];

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Fact => "Факт",
            CardKind::Feeling => "Чувство",
            CardKind::Thought => "Мысль",
        }
    }
}

/// One card: its text and the bucket it belongs in.
pub struct Card {
    pub text: &'static str,
    pub kind: CardKind,
}

/// The fixed nine-card template the deck reshuffles from.
pub const DECK: [Card; 9] = [
    Card {
        text: "В 9:00 сообщение действительно пришло.",
        kind: CardKind::Fact,
    },
    Card {
        text: "Мне тревожно и тесно в груди.",
        kind: CardKind::Feeling,
    },
    Card {
        text: "Наверное, со мной что-то не так.",
        kind: CardKind::Thought,
    },
    Card {
        text: "В разговоре прозвучали две критические фразы.",
        kind: CardKind::Fact,
    },
    Card {
        text: "Я злюсь и хочу дистанции.",
        kind: CardKind::Feeling,
    },
    Card {
        text: "Если ошибусь, меня отвергнут.",
        kind: CardKind::Thought,
    },
    Card {
        text: "Сердце билось быстрее обычного.",
        kind: CardKind::Fact,
    },
    Card {
        text: "Я ощущаю стыд.",
        kind: CardKind::Feeling,
    },
    Card {
        text: "Надо срочно всё исправить, иначе катастрофа.",
        kind: CardKind::Thought,
    },
];

/// Card-sorting state. `deck` holds indices into [`DECK`]; the top card
/// is the last element.
pub struct TraumaState {
    pub deck: Vec<usize>,
    pub sorted_count: u32,
    pub correct_count: u32,
    pub rng_seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_balanced() {
        for kind in ALL_KINDS {
            let count = DECK.iter().filter(|c| c.kind == kind).count();
            assert_eq!(count, 3, "{} cards of kind {:?}", count, kind);
        }
    }

    #[test]
    fn labels_are_distinct() {
        assert_eq!(CardKind::Fact.label(), "Факт");
        assert_eq!(CardKind::Feeling.label(), "Чувство");
        assert_eq!(CardKind::Thought.label(), "Мысль");
    }
}
