//! Fixed game content: level metadata, transformation feature pools, and
//! the narrative strings shown on the hub and results screens.
//!
//! All user-facing text is Russian (product copy); everything here is
//! compile-time data consumed by the progress engine and the screens.

/// Highest character stage; also the length of both feature pools.
pub const STAGE_MAX: u8 = 5;

/// "Shadow" features removed from the character, one per first clear,
/// consumed in order.
pub const DEVIL_FEATURES: [&str; 5] = [
    "Рога защиты",
    "Шипованная броня",
    "Колючий хвост",
    "Маска ярости",
    "Цепи самоосуждения",
];

/// Human features gained by the character, one per first clear, in order.
pub const HUMAN_FEATURES: [&str; 5] = [
    "Тёплый взгляд",
    "Открытые ладони",
    "Ровное дыхание",
    "Мягкий голос",
    "Устойчивая походка",
];

pub struct LevelMeta {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const LEVEL_META: [LevelMeta; 5] = [
    LevelMeta { id: 1, title: "Подавление", subtitle: "Лабиринт дыхания" },
    LevelMeta { id: 2, title: "Раздражение", subtitle: "Бег по полосам" },
    LevelMeta { id: 3, title: "Травма", subtitle: "Сортировка карт" },
    LevelMeta { id: 4, title: "Самопринятие", subtitle: "Выбор отражения" },
    LevelMeta { id: 5, title: "Восстановление", subtitle: "Путь ресурсов" },
];

/// Look up level metadata by id.
pub fn level_meta(id: u8) -> Option<&'static LevelMeta> {
    LEVEL_META.iter().find(|m| m.id == id)
}

pub const HUB_INTRO: &str =
    "Я иду по внутреннему ландшафту: моя тень не враг, а проводник к форме, в которой я дышу свободнее.";

pub const DISCLAIMER: &str = "Игра метафорическая, не является диагностикой или лечением.";

/// Rotating quotes for the results card and share text.
pub const SHARE_QUOTES: [&str; 5] = [
    "Путь к целостности не прямой, но каждый шаг возвращает к себе.",
    "Там, где было напряжение, может появиться бережный ритм.",
    "Исцеление похоже на дорогу: важен не рывок, а устойчивый шаг.",
    "Баланс рождается, когда мы слышим себя и не спешим сражаться с собой.",
    "Свет внутри растет, когда мы выбираем контакт вместо внутренней войны.",
];
