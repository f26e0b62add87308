//! Character stage derived from progress.
//!
//! The figure sheds one shadow trait per cleared level, moving from the
//! horned silhouette at stage 0 to the lit human one at stage 5.

use crate::content::STAGE_MAX;
use crate::progress::ProgressRecord;

pub const PORTRAIT_WIDTH: u16 = 13;
pub const PORTRAIT_HEIGHT: u16 = 7;

/// Portraits indexed by stage — 7 lines, 13 cells wide each.
const PORTRAITS: &[&[&str]] = &[
    &[
        "  /\\     /\\  ",
        " (  \\___/  ) ",
        " | -o   o- | ",
        " |    ^    | ",
        "  \\  ~~~  /  ",
        "   |_____|   ",
        "  /|     |\\  ",
    ],
    &[
        "   \\     /   ",
        " (  \\___/  ) ",
        " | -o   o- | ",
        " |    ^    | ",
        "  \\  ~~.  /  ",
        "   |_____|   ",
        "  /|     |\\  ",
    ],
    &[
        "    .   .    ",
        "  ._______.  ",
        " |  o   o  | ",
        " |    .    | ",
        "  \\  ---  /  ",
        "   |_____|   ",
        "   |     |   ",
    ],
    &[
        "   _______   ",
        "  /       \\  ",
        " |  o   o  | ",
        " |    .    | ",
        "  \\  ___  /  ",
        "   |_____|   ",
        "   |     |   ",
    ],
    &[
        "   _______   ",
        "  / .   . \\  ",
        " |  o   o  | ",
        " |    .    | ",
        "  \\  \\_/  /  ",
        "   |_____|   ",
        "   |     |   ",
    ],
    &[
        "    * * *    ",
        "   _______   ",
        "  / .   . \\  ",
        " |  ^   ^  | ",
        "  \\  \\_/  /  ",
        "   |_____|   ",
        "  *|     |*  ",
    ],
];

/// Current stage: one step per cleared level, capped at the pool size.
pub fn stage(record: &ProgressRecord) -> u8 {
    record.completed_levels.len().min(STAGE_MAX as usize) as u8
}

/// Stages to show on the transform screen. A first clear just advanced the
/// stage, so "before" steps one back; repeat clears show the same figure
/// on both sides.
pub fn transform_stages(record: &ProgressRecord, first_clear: bool) -> (u8, u8) {
    let after = stage(record);
    let before = if first_clear {
        after.saturating_sub(1)
    } else {
        after
    };
    (before, after)
}

pub fn portrait(stage: u8) -> &'static [&'static str] {
    PORTRAITS[stage.min(STAGE_MAX) as usize]
}
