//! Card geometry, colors and text content.

use image::Rgba;

use super::CardDetails;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;
pub const CORNER_RADIUS: u32 = 30;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// `#C9A24B`
pub const GOLD: Rgba<u8> = Rgba([0xC9, 0xA2, 0x4B, 0xFF]);

pub const LOGO_X: i64 = 20;
pub const LOGO_Y: i64 = 0;
pub const LOGO_SIZE: u32 = 180;

pub const TEXT_X: i32 = 220;
pub const TITLE_SIZE: f32 = 32.0;
pub const BODY_SIZE: f32 = 19.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub y: i32,
    pub style: TextStyle,
    pub text: String,
}

fn line(y: i32, style: TextStyle, text: impl Into<String>) -> TextLine {
    TextLine {
        y,
        style,
        text: text.into(),
    }
}

/// Every line of text on the card, top to bottom.
pub fn lines(details: &CardDetails) -> Vec<TextLine> {
    use TextStyle::*;

    vec![
        line(30, Title, "MBABANE HIGHLANDERS AM"),
        line(70, Body, "Football Club | Est. 1952"),
        line(100, Body, "Ezimnyama Ngenkani – BLACK BULL"),
        line(160, Title, details.full_name.to_uppercase()),
        line(200, Body, format!("MEMBER CODE: {}", details.member_code)),
        line(230, Body, format!("MEMBERSHIP: {}", details.tier)),
        line(
            260,
            Body,
            format!("JOINED: {}", details.joined_at.format("%d %B %Y")),
        ),
        line(330, Body, "membership@mbabanehighlanders.com"),
        line(360, Body, "www.mbabanehighlanders.com"),
    ]
}
