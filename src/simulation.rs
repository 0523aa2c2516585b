use crate::board::Board;
use crate::config::Settings;
use crate::palette::Palette;
use crate::regions::{RegionMap, SignatureMode};
use crate::scene::Scene;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// All state of a running automaton: the board, the shape colours seen so far
/// and the randomness used to reseed.
///
/// Each frame first captures the current generation as a [`Scene`] and only
/// then advances the board, so colours always describe what is on screen.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    palette: Palette,
    rng: StdRng,
    density: f64,
    cell_size: f32,
    signature: SignatureMode,
    generation: u64,
}

impl Simulation {
    /// Creates a board of the configured size and seeds it.
    pub fn new(settings: &Settings) -> Self {
        let board = Board::new(settings.columns(), settings.rows());
        let mut simulation = Self::with_board(board, settings);
        simulation.reseed();

        simulation
    }

    /// Wraps an existing board without touching its cells.
    pub fn with_board(board: Board, settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let palette = Palette::new(StdRng::from_rng(&mut rng));

        Self {
            board,
            palette,
            rng,
            density: settings.density,
            cell_size: f32::from(settings.cell_size),
            signature: settings.signature,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Randomizes the board and restarts the generation count. Shape colours
    /// are kept.
    pub fn reseed(&mut self) {
        self.board.randomize(self.density, &mut self.rng);
        self.generation = 0;

        info!(
            population = self.board.population(),
            density = self.density,
            "board reseeded"
        );
    }

    /// Colours the current generation without advancing it.
    pub fn scene(&mut self) -> Scene {
        let regions = RegionMap::label(&self.board, self.signature);

        Scene::capture(
            &self.board,
            regions,
            &mut self.palette,
            self.cell_size,
            self.generation,
        )
    }

    pub fn advance(&mut self) {
        self.board.step();
        self.generation += 1;
    }

    /// Captures the current generation, then advances to the next one.
    pub fn frame(&mut self) -> Scene {
        let scene = self.scene();
        self.advance();

        debug!(
            generation = scene.generation,
            population = scene.population,
            regions = scene.regions,
            shapes = scene.shapes,
            "frame"
        );

        scene
    }
}
