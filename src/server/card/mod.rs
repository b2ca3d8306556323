//! Membership card rendering.
//!
//! Produces an 800×400 PNG with rounded transparent corners: the club logo on the left
//! and gold text on a black background on the right. Rendering is deterministic, so the
//! same member and assets always yield the same bytes.

mod layout;

use ab_glyph::{FontVec, PxScale};
use chrono::{DateTime, Utc};
use image::{imageops, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::{io::Cursor, path::Path};

use crate::server::{
    config::CardConfig,
    error::card::CardError,
    model::member::{Member, MembershipTier},
};

use layout::{TextLine, TextStyle};

/// Member fields printed on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub full_name: String,
    pub member_code: String,
    pub tier: MembershipTier,
    pub joined_at: DateTime<Utc>,
}

impl From<&Member> for CardDetails {
    fn from(member: &Member) -> Self {
        Self {
            full_name: member.full_name.clone(),
            member_code: member.member_code.clone(),
            tier: member.tier,
            joined_at: member.joined_at,
        }
    }
}

/// Logo and fonts the card is drawn with.
pub struct CardAssets {
    logo: RgbaImage,
    body_font: FontVec,
    title_font: FontVec,
}

impl CardAssets {
    /// Reads and decodes the logo and both fonts named in `config`.
    ///
    /// # Returns
    /// - `Ok(CardAssets)` - All assets loaded
    /// - `Err(CardError)` - A file is missing or cannot be decoded
    pub fn load(config: &CardConfig) -> Result<Self, CardError> {
        let logo = image::open(&config.logo_path)
            .map_err(|source| CardError::Logo {
                path: config.logo_path.clone(),
                source,
            })?
            .to_rgba8();

        Ok(Self {
            logo,
            body_font: load_font(&config.font_path)?,
            title_font: load_font(&config.bold_font_path)?,
        })
    }
}

fn load_font(path: &Path) -> Result<FontVec, CardError> {
    let bytes = std::fs::read(path).map_err(|source| CardError::FontFile {
        path: path.to_path_buf(),
        source,
    })?;

    FontVec::try_from_vec(bytes).map_err(|_| CardError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// Renders membership cards, reading assets from disk on every call.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    config: CardConfig,
}

impl CardRenderer {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    /// Loads the configured assets and renders the card for `details` as PNG bytes.
    pub fn render(&self, details: &CardDetails) -> Result<Vec<u8>, CardError> {
        let assets = CardAssets::load(&self.config)?;
        render_card(details, &assets)
    }
}

/// Draws the card for `details` with the given assets and encodes it as PNG.
pub fn render_card(details: &CardDetails, assets: &CardAssets) -> Result<Vec<u8>, CardError> {
    let mut card = RgbaImage::from_pixel(layout::WIDTH, layout::HEIGHT, layout::BACKGROUND);

    let logo = imageops::resize(
        &assets.logo,
        layout::LOGO_SIZE,
        layout::LOGO_SIZE,
        imageops::FilterType::Lanczos3,
    );
    imageops::overlay(&mut card, &logo, layout::LOGO_X, layout::LOGO_Y);

    for TextLine { y, style, text } in layout::lines(details) {
        let (font, size) = match style {
            TextStyle::Title => (&assets.title_font, layout::TITLE_SIZE),
            TextStyle::Body => (&assets.body_font, layout::BODY_SIZE),
        };
        draw_text_mut(
            &mut card,
            layout::GOLD,
            layout::TEXT_X,
            y,
            PxScale::from(size),
            font,
            &text,
        );
    }

    clip_corners(&mut card, layout::CORNER_RADIUS);

    let mut png = Vec::new();
    card.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(CardError::Encode)?;

    Ok(png)
}

/// Makes every pixel outside a rounded rectangle of the given corner radius transparent.
fn clip_corners(image: &mut RgbaImage, radius: u32) {
    let (width, height) = image.dimensions();
    let r = radius as f32;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let cx = if px < r {
            r
        } else if px > width as f32 - r {
            width as f32 - r
        } else {
            continue;
        };
        let cy = if py < r {
            r
        } else if py > height as f32 - r {
            height as f32 - r
        } else {
            continue;
        };

        let (dx, dy) = (px - cx, py - cy);
        if dx * dx + dy * dy > r * r {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}
