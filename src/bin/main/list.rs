//! Person list: one avatar row per person, laid out top to bottom.

use circleview_core::{
    Error,
    attributes::{AvatarAttributes, CircleAttributes},
    avatar::{AvatarRenderer, AvatarState},
    color::Argb,
    geometry::{Padding, ViewGeometry},
    touch::{TouchEvent, TouchResult},
};
use circleview_raster::FrameBuffer;
use embedded_graphics::{
    Drawable,
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X15},
    },
    pixelcolor::Rgb888,
    prelude::{Point, Primitive},
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use log::{debug, info};

use crate::{art::ArtResolver, people::Person};

pub const ROW_HEIGHT: usize = 64;
const AVATAR_SIZE: usize = 56;
const AVATAR_PADDING: i32 = 4;
const AVATAR_LEFT: usize = 8;
const AVATAR_TOP: usize = (ROW_HEIGHT - AVATAR_SIZE) / 2;
const LABEL_LEFT: usize = AVATAR_LEFT + AVATAR_SIZE + 12;
const INITIAL_TEXT_SIZE: f32 = 28.0;
const STROKE_WIDTH: f32 = 2.0;

const BACKGROUNDS: [Argb; 6] = [
    Argb::opaque(0xE53935),
    Argb::opaque(0x8E24AA),
    Argb::opaque(0x3949AB),
    Argb::opaque(0x00897B),
    Argb::opaque(0xF4511E),
    Argb::opaque(0x6D4C41),
];

const NAME_COLOR: Rgb888 = Rgb888::new(0x21, 0x21, 0x21);
const STATUS_COLOR: Rgb888 = Rgb888::new(0x75, 0x75, 0x75);
const DIVIDER_COLOR: Rgb888 = Rgb888::new(0xE0, 0xE0, 0xE0);

fn background_for(name: &str) -> Argb {
    let sum = name.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    BACKGROUNDS[sum % BACKGROUNDS.len()]
}

struct PersonRow {
    person: Person,
    avatar: AvatarRenderer,
    top: usize,
}

impl PersonRow {
    fn bind(person: Person, top: usize, resolver: &mut ArtResolver) -> Result<Self, Error> {
        let state = if person.avatar.is_some() {
            AvatarState::ShowImage
        } else {
            AvatarState::ShowInitial
        };
        let attributes = AvatarAttributes::default()
            .with_circle(CircleAttributes::default().with_stroke(Argb::WHITE, STROKE_WIDTH))
            .with_text(Some(person.name))
            .with_text_style(Argb::WHITE, INITIAL_TEXT_SIZE)
            .with_background(background_for(person.name))
            .with_state(state as i32);

        let mut avatar = AvatarRenderer::from_attributes(&attributes)?;
        avatar.on_resize(
            ViewGeometry::new(AVATAR_SIZE as i32, AVATAR_SIZE as i32)
                .with_padding(Padding::uniform(AVATAR_PADDING)),
        );
        if let Some(id) = person.avatar {
            avatar.circle_mut().set_image_resource(id, resolver);
        }

        Ok(Self {
            person,
            avatar,
            top: top + AVATAR_TOP,
        })
    }
}

/// Vertical list of avatar rows.
pub struct PersonList {
    rows: Vec<PersonRow>,
    width: usize,
    clicks: usize,
}

impl PersonList {
    pub fn new(people: &[Person], width: usize, resolver: &mut ArtResolver) -> Result<Self, Error> {
        let rows = people
            .iter()
            .enumerate()
            .map(|(i, person)| PersonRow::bind(*person, i * ROW_HEIGHT, resolver))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows,
            width,
            clicks: 0,
        })
    }

    pub fn height(&self) -> usize {
        self.rows.len() * ROW_HEIGHT
    }

    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Center of the avatar in row `index`, in list coordinates.
    pub fn avatar_center(&self, index: usize) -> Option<(f32, f32)> {
        let row = self.rows.get(index)?;
        let (cx, cy) = row.avatar.circle().circle_bounds().center();
        Some((cx + AVATAR_LEFT as f32, cy + row.top as f32))
    }

    /// Routes a list-space touch to the avatar under it.
    ///
    /// A press followed by a release inside the same avatar counts as a
    /// click and flips that avatar between its initial and its image.
    pub fn dispatch(&mut self, event: TouchEvent) -> TouchResult {
        let TouchEvent { x, y, phase } = event;
        if y < 0.0 {
            return TouchResult::NotHandled;
        }
        let index = y as usize / ROW_HEIGHT;
        let Some(row) = self.rows.get_mut(index) else {
            return TouchResult::NotHandled;
        };

        let local = TouchEvent::new(x - AVATAR_LEFT as f32, y - row.top as f32, phase);
        let was_pressed = row.avatar.circle().is_pressed();
        let result = row.avatar.on_touch(local);
        debug!(
            "list: {:?} at ({x}, {y}) on {} -> {:?}",
            phase, row.person.name, result
        );

        if was_pressed && !row.avatar.circle().is_pressed() && result.is_handled() {
            let next = match row.avatar.state() {
                AvatarState::ShowInitial => AvatarState::ShowImage,
                AvatarState::ShowImage => AvatarState::ShowInitial,
            };
            info!("list: {} clicked, showing {:?}", row.person.name, next);
            row.avatar.set_state(next);
            self.clicks += 1;
        }

        result
    }

    /// Draws every row and clears pending redraw requests.
    pub fn render(&mut self, frame: &mut FrameBuffer) {
        frame.clear(Argb::WHITE);

        let name_style = MonoTextStyle::new(&FONT_9X15, NAME_COLOR);
        let status_style = MonoTextStyle::new(&FONT_6X10, STATUS_COLOR);
        let divider = PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1);
        let mut redraws = 0usize;

        for (i, row) in self.rows.iter_mut().enumerate() {
            if row.avatar.take_redraw_request() {
                redraws += 1;
            }

            let mut tile = FrameBuffer::new(AVATAR_SIZE, AVATAR_SIZE);
            row.avatar.render(&mut tile);
            frame.blit(&tile, AVATAR_LEFT, row.top);

            let row_top = (i * ROW_HEIGHT) as i32;
            let _ = Text::with_baseline(
                row.person.name,
                Point::new(LABEL_LEFT as i32, row_top + 14),
                name_style,
                Baseline::Top,
            )
            .draw(frame);
            let _ = Text::with_baseline(
                row.person.status,
                Point::new(LABEL_LEFT as i32, row_top + 34),
                status_style,
                Baseline::Top,
            )
            .draw(frame);

            let bottom = row_top + ROW_HEIGHT as i32 - 1;
            let _ = Line::new(
                Point::new(LABEL_LEFT as i32, bottom),
                Point::new(self.width as i32 - 1, bottom),
            )
            .into_styled(divider)
            .draw(frame);
        }

        debug!("list: rendered {} rows, {redraws} had pending redraws", self.rows.len());
    }
}
