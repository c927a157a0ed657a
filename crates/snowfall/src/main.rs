use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use snowfall_config::SnowfallConfig;
use snowfall_core::{Color, Viewport};
use snowfall_field::Snowfall;
use snowfall_raster::Raster;
use tracing::{debug, info};

mod logging;
mod pacing;
mod screen;

use pacing::FramePacer;
use screen::SnowScreen;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init()?;
    let config = SnowfallConfig::load()?;
    info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "snowfall starting");

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();

    info!("snowfall shutdown complete");
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Host settings.
    config: SnowfallConfig,
    /// Animation state.
    snowfall: Snowfall,
    /// Supersampled drawing surface handed to the animation each frame.
    raster: Raster,
    /// Frame timing and redraw requests.
    pacer: FramePacer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: SnowfallConfig) -> Self {
        let snowfall = match config.seed {
            Some(seed) => Snowfall::seeded(seed),
            None => Snowfall::from_entropy(),
        };
        let pacer = FramePacer::new(config.frame_interval());
        Self {
            running: false,
            config,
            snowfall,
            raster: Raster::new(0, 0),
            pacer,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.pacer.frame_presented(Instant::now());
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance the animation and draw it.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let scale = u32::from(self.config.supersample);
        let width = u32::from(area.width) * scale;
        let height = u32::from(area.height) * 2 * scale;

        if (self.raster.width(), self.raster.height()) != (width, height) {
            debug!(width, height, "resizing raster");
            self.raster.resize(width, height);
        }
        self.snowfall.sync_viewport(Viewport::new(width as f32, height as f32));

        self.raster.clear(Color::TRANSPARENT);
        self.pacer.begin_frame();
        self.snowfall.on_draw(&mut self.raster, &mut self.pacer);

        let background = self.config.background;
        frame.render_widget(
            SnowScreen::new(&self.raster, scale, [background.r, background.g, background.b]),
            area,
        );
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        while self.running {
            let timeout = self.pacer.remaining(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                // Redraw right away; the new size reseeds the field
                Event::Resize(_, _) => break,
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
