mod maze_builder;
mod maze_drawer;

pub(crate) use maze_builder::MazeBuilder;
pub(crate) use maze_drawer::{MazeDrawer, SvgMazeDrawer, TextMazeDrawer};

pub(crate) struct RngHandler;

impl RngHandler {
    #[cfg(not(test))]
    pub fn rng() -> impl rand::Rng {
        rand::rng()
    }

    #[cfg(test)]
    pub fn rng() -> impl rand::Rng {
        use crate::constants::TEST_RNG_SEED;
        use rand::{SeedableRng, rngs::StdRng};

        StdRng::seed_from_u64(TEST_RNG_SEED)
    }

    pub fn seeded(seed: u64) -> impl rand::Rng {
        use rand::{SeedableRng, rngs::StdRng};

        StdRng::seed_from_u64(seed)
    }
}
