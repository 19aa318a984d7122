use std::{convert::Infallible, path::PathBuf};

use anyhow::{Context, Result};
use circleview_core::touch::{TouchEvent, TouchProvider};
use circleview_raster::FrameBuffer;
use log::info;

use art::ArtResolver;
use list::PersonList;
use people::PEOPLE;

#[path = "main/art.rs"]
mod art;
#[path = "main/export.rs"]
mod export;
#[path = "main/list.rs"]
mod list;
#[path = "main/people.rs"]
mod people;

const LIST_WIDTH: usize = 320;
const DEFAULT_OUTPUT: &str = "circleview-sample.png";

/// Replays a fixed sequence of list-space touches.
struct ScriptedTouches {
    events: Vec<TouchEvent>,
    cursor: usize,
}

impl TouchProvider for ScriptedTouches {
    type Error = Infallible;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

/// Press-and-slide-out on the first row, a click on the second, a press
/// outside the circle on the fourth, and a press held on the third so the
/// highlight shows in the output.
fn touch_script(list: &PersonList) -> ScriptedTouches {
    let mut events = Vec::new();

    if let Some((x, y)) = list.avatar_center(0) {
        events.push(TouchEvent::down(x, y));
        events.push(TouchEvent::up(x + 1000.0, y));
    }
    if let Some((x, y)) = list.avatar_center(1) {
        events.push(TouchEvent::down(x, y));
        events.push(TouchEvent::up(x + 3.0, y - 2.0));
    }
    if let Some((x, y)) = list.avatar_center(3) {
        // Corner of the avatar box, outside its circle.
        events.push(TouchEvent::down(x - 26.0, y - 26.0));
    }
    if let Some((x, y)) = list.avatar_center(2) {
        events.push(TouchEvent::down(x, y));
    }

    ScriptedTouches { events, cursor: 0 }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut resolver = ArtResolver::default();
    let mut list = PersonList::new(&PEOPLE, LIST_WIDTH, &mut resolver)
        .context("binding person list")?;
    info!(
        "sample: {} people, {} avatar pictures resolved",
        PEOPLE.len(),
        resolver.resolved()
    );

    let mut touches = touch_script(&list);
    let mut handled = 0usize;
    while let Ok(Some(event)) = touches.poll_touch() {
        if list.dispatch(event).is_handled() {
            handled += 1;
        }
    }

    let mut frame = FrameBuffer::new(LIST_WIDTH, list.height());
    list.render(&mut frame);
    export::write_png(&frame, &output)?;

    info!(
        "sample: {handled} touches handled, {} clicks, wrote {}x{} frame to {}",
        list.clicks(),
        frame.width(),
        frame.height(),
        output.display()
    );
    Ok(())
}
