/// Fixed story-card layout

use crate::rendering::paint::{FontSpec, PaintCommand};
use crate::story::StoryRecord;
use crate::ColorValue;

/// Canvas edge length; story cards are square.
pub const CANVAS_SIZE: u32 = 1080;
/// Height of the white caption bar at the bottom of the card.
pub const BAR_HEIGHT: u32 = 200;
/// Left margin of every caption line.
pub const TEXT_X: i32 = 20;
/// Distance from the bar's top edge to the first baseline.
pub const VERTICAL_PADDING: i32 = 60;
/// Baseline distance between consecutive caption lines.
pub const LINE_SPACING: i32 = 50;
pub const FONT_PX: u32 = 40;
pub const TITLE: &str = "Color Stories";

pub const TITLE_FONT: FontSpec = FontSpec::bold(FONT_PX);
pub const BODY_FONT: FontSpec = FontSpec::regular(FONT_PX);

/// Top row of the caption bar.
pub const fn bar_top() -> u32 {
    CANVAS_SIZE - BAR_HEIGHT
}

/// Baselines of the title, color and description lines.
pub const fn baselines() -> [i32; 3] {
    let first = bar_top() as i32 + VERTICAL_PADDING;
    [first, first + LINE_SPACING, first + 2 * LINE_SPACING]
}

/// Build the paint commands for one story card.
/// - full-canvas fill in the story color
/// - white caption bar spanning the bottom `BAR_HEIGHT` rows
/// - bold title, color code and "<Adjective> <Noun>" in black
pub fn compose_story(record: &StoryRecord) -> Vec<PaintCommand> {
    let [title_y, color_y, description_y] = baselines();

    vec![
        PaintCommand::SolidRect {
            x: 0,
            y: 0,
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            color: record.color,
        },
        PaintCommand::SolidRect {
            x: 0,
            y: bar_top() as i32,
            width: CANVAS_SIZE,
            height: BAR_HEIGHT,
            color: ColorValue::WHITE,
        },
        PaintCommand::Text {
            x: TEXT_X,
            y: title_y,
            text: TITLE.to_string(),
            font: TITLE_FONT,
            color: ColorValue::BLACK,
        },
        PaintCommand::Text {
            x: TEXT_X,
            y: color_y,
            text: record.color.to_string(),
            font: BODY_FONT,
            color: ColorValue::BLACK,
        },
        PaintCommand::Text {
            x: TEXT_X,
            y: description_y,
            text: record.description(),
            font: BODY_FONT,
            color: ColorValue::BLACK,
        },
    ]
}
