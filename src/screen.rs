use crate::palette::{Rgb, Rgba};
use crate::scene::{Scene, Surface};

use iced::alignment;
use iced::mouse;
use iced::touch;
use iced::widget::canvas;
use iced::widget::canvas::event::{self, Event};
use iced::widget::canvas::{Cache, Canvas, Frame, Geometry, Path, Text};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector};

/// The canvas that shows the latest [`Scene`] and reports pointer presses.
pub struct Screen {
    scene: Scene,
    cache: Cache,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    PointerDown,
}

impl Screen {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            cache: Cache::default(),
        }
    }

    pub fn show(&mut self, scene: Scene) {
        self.scene = scene;
        self.cache.clear();
    }

    pub fn view(&self) -> Element<Message> {
        Canvas::new(self).width(Fill).height(Fill).into()
    }
}

impl canvas::Program<Message> for Screen {
    type State = ();

    fn update(
        &self,
        _state: &mut (),
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(_)) if cursor.is_over(bounds) => {
                (event::Status::Captured, Some(Message::PointerDown))
            }
            Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(position) =>
            {
                (event::Status::Captured, Some(Message::PointerDown))
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let life = self.cache.draw(renderer, bounds.size(), |frame| {
            self.scene.paint(&mut FrameSurface::new(frame));
        });

        let status = {
            let mut frame = Frame::new(renderer, bounds.size());
            let scene = &self.scene;

            let text = Text {
                color: Color::from_rgb8(0x40, 0x44, 0x4B),
                size: 12.0.into(),
                position: Point::new(frame.width() - 4.0, frame.height() - 4.0),
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Bottom,
                ..Text::default()
            };

            let hovered = cursor
                .position_in(bounds)
                .and_then(|position| scene.cell_at(position.x, position.y));

            if let Some(cell) = hovered {
                let content = match scene.region_of(cell) {
                    Some(region) => format!(
                        "({}, {}) · region #{} · {} cell{}",
                        cell.column,
                        cell.row,
                        region.id().get(),
                        region.len(),
                        if region.len() == 1 { "" } else { "s" },
                    ),
                    None => format!("({}, {})", cell.column, cell.row),
                };

                frame.fill_text(Text {
                    content,
                    position: text.position - Vector::new(0.0, 16.0),
                    ..text.clone()
                });
            }

            frame.fill_text(Text {
                content: format!(
                    "gen {} · {} cell{} · {} regions · {} shapes",
                    scene.generation,
                    scene.population,
                    if scene.population == 1 { "" } else { "s" },
                    scene.regions,
                    scene.shapes,
                ),
                ..text
            });

            frame.into_geometry()
        };

        vec![life, status]
    }

    fn mouse_interaction(
        &self,
        _state: &(),
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draws onto an iced canvas frame.
pub struct FrameSurface<'a> {
    frame: &'a mut Frame,
    fill: Color,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self {
            frame,
            fill: Color::BLACK,
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn background(&mut self, color: Rgb) {
        let background = Path::rectangle(Point::ORIGIN, self.frame.size());
        self.frame.fill(&background, Color::from(color));
    }

    fn fill(&mut self, color: Rgba) {
        self.fill = Color::from(color);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.frame
            .fill_rectangle(Point::new(x, y), Size::new(width, height), self.fill);
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::from_rgb8(color.r, color.g, color.b)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
    }
}
