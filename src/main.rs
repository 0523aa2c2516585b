//! Conway's Game of Life on a small wrap-around board, where every connected
//! group of live cells is painted with a colour remembered for its shape.
//! Click the board to reseed it.
mod board;
mod config;
mod palette;
mod regions;
mod rule;
mod scene;
mod screen;
mod simulation;

use config::Settings;
use screen::Screen;
use simulation::Simulation;

use iced::time;
use iced::widget::container;
use iced::{Element, Fill, Size, Subscription, Task, Theme};
use std::time::Duration;
use tracing::{info, warn};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let settings = Settings::load().unwrap_or_else(|error| {
        warn!(%error, "using default settings");
        Settings::default()
    });

    info!(
        ?settings,
        columns = settings.columns(),
        rows = settings.rows(),
        "starting"
    );

    let window = Size::new(settings.width as f32, settings.height as f32);

    iced::application("Region Life", RegionLife::update, RegionLife::view)
        .subscription(RegionLife::subscription)
        .theme(|_| Theme::Light)
        .window_size(window)
        .resizable(false)
        .centered()
        .run_with(move || (RegionLife::new(&settings), Task::none()))
}

struct RegionLife {
    simulation: Simulation,
    screen: Screen,
    frame_interval: Duration,
}

#[derive(Debug, Clone)]
enum Message {
    Screen(screen::Message),
    Tick,
}

impl RegionLife {
    fn new(settings: &Settings) -> Self {
        let mut simulation = Simulation::new(settings);
        let screen = Screen::new(simulation.frame());

        Self {
            simulation,
            screen,
            frame_interval: settings.frame_interval(),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                let scene = self.simulation.frame();
                self.screen.show(scene);
            }
            Message::Screen(screen::Message::PointerDown) => {
                self.simulation.reseed();
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(self.frame_interval).map(|_| Message::Tick)
    }

    fn view(&self) -> Element<Message> {
        container(self.screen.view().map(Message::Screen))
            .width(Fill)
            .height(Fill)
            .into()
    }
}
