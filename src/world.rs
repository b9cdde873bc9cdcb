use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GameArea;
use crate::grid::Grid;
use crate::pattern::BEEHIVE;
use crate::pattern::BLINKER;
use crate::pattern::BLOCK;
use crate::pattern::GLIDER;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// One random cell is switched on for every this many cells of the grid
const RANDOM_DIVISOR: usize = 10;

pub struct World {
    /// The current generation. Never written to while a step is being computed.
    grid: Grid,

    /// Life rules
    rules: RuleSet,

    /// Number of steps taken since seeding
    generation: u64,

    /// Source of the random seeding phase. Owned here so that two worlds never share state.
    rng: StdRng,
}

impl World {
    /// Create a `height × width` world and seed it.
    ///
    /// Seeding stamps a glider, a blinker, a block and a beehive at fixed fractions of the grid,
    /// then switches on `height * width / 10` cells at uniformly drawn positions. Draws may land
    /// on cells that are already alive. Passing a `seed` makes the random phase reproducible.
    pub fn new(height: usize, width: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = Self {
            grid: Grid::new(width, height),
            rules: B3S23,
            generation: 0,
            rng,
        };

        let random = height * width / RANDOM_DIVISOR;

        world.seed_patterns();
        world.seed_random(random);

        debug!(
            height,
            width,
            random,
            alive = world.alive_count(),
            "seeded world"
        );

        world
    }

    /// Create a world filling a [`GameArea`]
    pub fn from_area(area: GameArea, seed: Option<u64>) -> Self {
        Self::new(area.height, area.width, seed)
    }

    /// Wrap an existing grid without any seeding
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            rules: B3S23,
            generation: 0,
            rng: StdRng::from_entropy(),
        }
    }

    fn seed_patterns(&mut self) {
        let (h, w) = self.dimensions();

        self.grid.stamp(&GLIDER, h / 4, w / 4);
        self.grid.stamp(&BLINKER, h / 2, w / 2);
        self.grid.stamp(&BLOCK, 3 * h / 4, w / 3);
        self.grid.stamp(&BEEHIVE, h / 3, 2 * w / 3);
    }

    fn seed_random(&mut self, n: usize) {
        let (h, w) = self.dimensions();

        for _ in 0..n {
            let y = self.rng.gen_range(0..h);
            let x = self.rng.gen_range(0..w);
            self.grid.set_alive(y, x, true);
        }
    }

    /// Advance the world by exactly one generation.
    ///
    /// The next generation is written into a fresh grid and only swapped in once every cell has
    /// been computed. Updating in place would feed half-updated neighbors into later cells.
    pub fn step(&mut self) {
        let (h, w) = self.dimensions();
        let mut next = Grid::new(w, h);

        for y in 0..h {
            for x in 0..w {
                let neighbors = self.grid.live_neighbors(y, x);
                let alive = self.rules.next(self.grid.is_alive(y, x), neighbors);

                next.set_alive(y, x, alive);
            }
        }

        self.grid = next;
        self.generation += 1;
    }

    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    /// `(height, width)` of the world
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.height(), self.grid.width())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod test {
    use super::World;
    use crate::config::GameArea;
    use crate::grid::Grid;
    use crate::pattern::BEEHIVE;
    use crate::pattern::BLINKER;
    use crate::pattern::BLOCK;
    use crate::pattern::GLIDER;

    fn patterns_only(height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        grid.stamp(&GLIDER, height / 4, width / 4);
        grid.stamp(&BLINKER, height / 2, width / 2);
        grid.stamp(&BLOCK, 3 * height / 4, width / 3);
        grid.stamp(&BEEHIVE, height / 3, 2 * width / 3);
        grid
    }

    #[test]
    fn seeding_keeps_every_pattern_cell() {
        let world = World::new(40, 60, Some(7));
        let patterns = patterns_only(40, 60);

        for cell in patterns.cells().filter(|c| c.alive) {
            assert!(world.grid().is_alive(cell.y, cell.x), "{cell:?}");
        }
    }

    #[test]
    fn seeding_is_bounded() {
        let world = World::new(40, 60, Some(7));
        let bound = GLIDER.len() + BLINKER.len() + BLOCK.len() + BEEHIVE.len() + 40 * 60 / 10;

        assert!(world.alive_count() <= bound);
        assert!(world.alive_count() >= patterns_only(40, 60).alive_count());
    }

    #[test]
    fn step_counts_generations() {
        let mut world = World::new(10, 10, Some(1));
        assert_eq!(world.generation(), 0);

        world.step();
        world.step();
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn from_area_uses_area_dimensions() {
        let world = World::from_area(GameArea { height: 9, width: 12 }, Some(3));
        assert_eq!(world.dimensions(), (9, 12));
    }

    #[test]
    fn unseeded_worlds_contain_patterns() {
        let world = World::new(20, 20, None);
        assert!(world.alive_count() >= patterns_only(20, 20).alive_count());
    }
}
