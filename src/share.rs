//! Share text for the results screen.

use crate::content::{SHARE_QUOTES, STAGE_MAX};
use crate::progress::ProgressRecord;

/// Hashtags appended to every share.
pub const SHARE_TAGS: &str = "#TelegramMiniApp #ВнутреннийПуть";

/// Pick a results quote deterministically from a seed.
pub fn pick_quote(seed: u64) -> &'static str {
    SHARE_QUOTES[(seed % SHARE_QUOTES.len() as u64) as usize]
}

/// Plain-text share message for the current record.
pub fn share_text(record: &ProgressRecord, quote: &str) -> String {
    format!(
        "Внутренний путь — мой результат\n\
         Счёт: {}\n\
         Снято черт тени: {}/{}\n\
         Проявлено человеческих черт: {}/{}\n\
         «{}»\n\
         {}",
        record.total_score, record.devil_removed, STAGE_MAX, record.human_gained, STAGE_MAX, quote, SHARE_TAGS,
    )
}
