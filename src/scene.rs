//! What gets drawn for one generation, and the drawing surface it is drawn on.
use crate::board::{Board, Cell};
use crate::palette::{Palette, Rgb, Rgba};
use crate::regions::{Region, RegionId, RegionMap};

pub const BACKGROUND: Rgb = Rgb::WHITE;
pub const DEAD: Rgb = Rgb::new(220, 220, 220);

/// An immediate-mode drawing target. The fill colour is sticky: it applies to
/// every following `rect` until it is changed.
pub trait Surface {
    fn background(&mut self, color: Rgb);

    fn fill(&mut self, color: Rgba);

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// A coloured snapshot of one generation.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    columns: usize,
    rows: usize,
    cell_size: f32,
    labels: RegionMap,
    /// One colour per region, in id order.
    colors: Vec<Rgb>,
    pub generation: u64,
    pub population: usize,
    pub regions: usize,
    pub shapes: usize,
}

impl Scene {
    /// Colours every region of the board's current generation by its shape.
    pub fn capture(
        board: &Board,
        labels: RegionMap,
        palette: &mut Palette,
        cell_size: f32,
        generation: u64,
    ) -> Self {
        let colors = labels
            .regions()
            .iter()
            .map(|region| palette.color_for(region.signature()))
            .collect();

        Self {
            columns: board.columns(),
            rows: board.rows(),
            cell_size,
            regions: labels.len(),
            labels,
            colors,
            generation,
            population: board.population(),
            shapes: palette.len(),
        }
    }

    fn color_of(&self, id: RegionId) -> Rgb {
        self.colors[id.get() as usize - 1]
    }

    #[cfg(test)]
    pub fn color_at(&self, column: usize, row: usize) -> Option<Rgb> {
        self.labels
            .region_at(column, row)
            .map(|id| self.color_of(id))
    }

    /// The cell under a point in canvas pixels.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        if x < 0.0 || y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }

        let cell = Cell::new((x / self.cell_size) as usize, (y / self.cell_size) as usize);
        (cell.column < self.columns && cell.row < self.rows).then_some(cell)
    }

    /// The region a cell belongs to, or `None` for a dead cell.
    pub fn region_of(&self, cell: Cell) -> Option<&Region> {
        self.labels
            .region_at(cell.column, cell.row)
            .map(|id| self.labels.region(id))
    }

    pub fn paint(&self, surface: &mut impl Surface) {
        surface.background(BACKGROUND);

        if self.columns == 0 || self.rows == 0 {
            return;
        }

        surface.fill(DEAD.opaque());
        for column in 0..self.columns {
            for row in 0..self.rows {
                if self.labels.region_at(column, row).is_none() {
                    self.cell(surface, Cell::new(column, row));
                }
            }
        }

        for region in self.labels.regions() {
            surface.fill(self.color_of(region.id()).opaque());

            for &cell in region.cells() {
                self.cell(surface, cell);
            }
        }
    }

    fn cell(&self, surface: &mut impl Surface, cell: Cell) {
        surface.rect(
            cell.column as f32 * self.cell_size,
            cell.row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::SignatureMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Background(Rgb),
        Fill(Rgba),
        Rect(f32, f32, f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn background(&mut self, color: Rgb) {
            self.calls.push(Call::Background(color));
        }

        fn fill(&mut self, color: Rgba) {
            self.calls.push(Call::Fill(color));
        }

        fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
            self.calls.push(Call::Rect(x, y, width, height));
        }
    }

    fn capture(board: &Board, palette: &mut Palette) -> Scene {
        let labels = RegionMap::label(board, SignatureMode::Absolute);
        Scene::capture(board, labels, palette, 20.0, 0)
    }

    #[test]
    fn cells_of_one_region_share_a_color() {
        let board = Board::with_cells(
            6,
            6,
            [Cell::new(1, 1), Cell::new(2, 2), Cell::new(4, 4)],
        );
        let mut palette = Palette::new(StdRng::seed_from_u64(1));

        let scene = capture(&board, &mut palette);

        assert!(scene.color_at(1, 1).is_some());
        assert_eq!(scene.color_at(1, 1), scene.color_at(2, 2));
        assert!(scene.color_at(4, 4).is_some());
        assert_eq!(scene.color_at(0, 0), None);
        assert_eq!(scene.regions, 2);
        assert_eq!(scene.population, 3);
        assert_eq!(scene.shapes, 2);
    }

    #[test]
    fn paint_draws_every_cell() {
        let board = Board::with_cells(3, 2, [Cell::new(2, 1)]);
        let mut palette = Palette::new(StdRng::seed_from_u64(1));
        let scene = capture(&board, &mut palette);
        let live = scene.color_at(2, 1).unwrap();

        let mut recorder = Recorder::default();
        scene.paint(&mut recorder);

        assert_eq!(recorder.calls.len(), 1 + 1 + 5 + 1 + 1);
        assert_eq!(recorder.calls[0], Call::Background(BACKGROUND));
        assert_eq!(recorder.calls[1], Call::Fill(DEAD.opaque()));
        assert_eq!(recorder.calls[2], Call::Rect(0.0, 0.0, 20.0, 20.0));
        assert_eq!(recorder.calls[7], Call::Fill(live.opaque()));
        assert_eq!(recorder.calls[8], Call::Rect(40.0, 20.0, 20.0, 20.0));

        let rects = recorder
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Rect(..)))
            .count();
        assert_eq!(rects, 6);
    }

    #[test]
    fn regions_paint_their_member_cells_in_their_color() {
        let board = Board::with_cells(
            5,
            5,
            [Cell::new(0, 0), Cell::new(1, 1), Cell::new(3, 4)],
        );
        let mut palette = Palette::new(StdRng::seed_from_u64(4));
        let scene = capture(&board, &mut palette);

        let mut recorder = Recorder::default();
        scene.paint(&mut recorder);

        let mut fill = None;
        let mut painted = Vec::new();
        for call in &recorder.calls {
            match call {
                Call::Fill(color) => fill = Some(*color),
                Call::Rect(x, y, ..) => {
                    let cell = Cell::new((x / 20.0) as usize, (y / 20.0) as usize);
                    painted.push(cell);

                    let expected = scene.color_at(cell.column, cell.row).unwrap_or(DEAD);
                    assert_eq!(fill, Some(expected.opaque()), "{cell:?}");
                }
                Call::Background(_) => {}
            }
        }

        painted.sort();
        painted.dedup();
        assert_eq!(painted.len(), 25);
    }

    #[test]
    fn points_map_to_cells_and_regions() {
        let board = Board::with_cells(4, 3, [Cell::new(1, 1), Cell::new(2, 1)]);
        let mut palette = Palette::new(StdRng::seed_from_u64(2));
        let scene = capture(&board, &mut palette);

        assert_eq!(scene.cell_at(25.0, 39.9), Some(Cell::new(1, 1)));
        assert_eq!(scene.cell_at(-1.0, 5.0), None);
        assert_eq!(scene.cell_at(80.0, 5.0), None);
        assert_eq!(scene.cell_at(5.0, 60.0), None);

        let region = scene.region_of(Cell::new(2, 1)).unwrap();
        assert_eq!(region.len(), 2);
        assert_eq!(region.id().get(), 1);
        assert!(scene.region_of(Cell::new(0, 0)).is_none());
    }

    #[test]
    fn empty_scene_only_clears() {
        let mut recorder = Recorder::default();
        Scene::default().paint(&mut recorder);

        assert_eq!(recorder.calls, vec![Call::Background(BACKGROUND)]);
    }
}
