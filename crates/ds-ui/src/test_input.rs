//! Headless egui frames driven by synthetic pointer events

use egui::{CentralPanel, Context, Event, Frame, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, Vec2};

pub const SCREEN: Vec2 = Vec2::new(400.0, 800.0);

pub fn press(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::NONE,
    }
}

pub fn release(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::NONE,
    }
}

/// A context plus a clock; every frame is a frameless central panel filling the screen
#[derive(Default)]
pub struct Screen {
    ctx: Context,
    time: f64,
}

impl Screen {
    pub fn rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, SCREEN)
    }

    /// Run one frame `dt` seconds after the previous one
    pub fn frame(&mut self, dt: f64, events: Vec<Event>, add_contents: impl FnOnce(&mut Ui)) {
        self.time += dt;
        let input = RawInput {
            screen_rect: Some(Self::rect()),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default()
                .frame(Frame::none())
                .show(ctx, add_contents);
        });
    }
}
