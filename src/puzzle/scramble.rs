use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::puzzle::common::{Axis, Spin};
use crate::puzzle::cube::Cube;
use crate::puzzle::moves::Move;

/// How long a scramble runs. Each round is one reorientation followed by one
/// front turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleSettings {
    #[serde(default = "min_rounds_default")]
    pub min_rounds: usize,
    #[serde(default = "max_rounds_default")]
    pub max_rounds: usize,
}

fn min_rounds_default() -> usize {
    50
}

fn max_rounds_default() -> usize {
    69
}

impl Default for ScrambleSettings {
    fn default() -> Self {
        Self {
            min_rounds: min_rounds_default(),
            max_rounds: max_rounds_default(),
        }
    }
}

impl ScrambleSettings {
    pub fn rounds(&self) -> RangeInclusive<usize> {
        self.min_rounds..=self.max_rounds.max(self.min_rounds)
    }
}

#[rustfmt::skip]
const REORIENTATIONS: [(Axis, Spin); 6] = [
    (Axis::X, Spin::Clockwise), (Axis::X, Spin::AntiClockwise),
    (Axis::Y, Spin::Clockwise), (Axis::Y, Spin::AntiClockwise),
    (Axis::Z, Spin::Clockwise), (Axis::Z, Spin::AntiClockwise),
];

impl Cube {
    /// Scrambles with the thread rng and default settings, returning the
    /// moves made.
    pub fn scramble(&mut self) -> Vec<Move> {
        self.scramble_with(&mut rand::thread_rng(), &ScrambleSettings::default())
    }

    /// Scrambles with a random number of rounds from `settings`. An
    /// anti-clockwise reorientation straight after the clockwise one on the
    /// same axis would cancel it, so the clockwise one is repeated instead.
    pub fn scramble_with<R: Rng>(
        &mut self,
        rng: &mut R,
        settings: &ScrambleSettings,
    ) -> Vec<Move> {
        let rounds = rng.gen_range(settings.rounds());
        log::debug!("scrambling with {rounds} rounds");

        let mut moves = Vec::with_capacity(rounds * 2);
        let mut previous: Option<(Axis, Spin)> = None;
        for _ in 0..rounds {
            let (axis, mut spin) = REORIENTATIONS[rng.gen_range(0..REORIENTATIONS.len())];
            if previous == Some((axis, Spin::Clockwise)) && spin == Spin::AntiClockwise {
                spin = Spin::Clockwise;
            }
            previous = Some((axis, spin));

            let turn = if rng.gen_bool(0.5) {
                Spin::Clockwise
            } else {
                Spin::AntiClockwise
            };

            for mv in [Move::Cube(axis, spin), Move::Front(turn)] {
                log::trace!("scramble move {mv}");
                self.apply(mv);
                moves.push(mv);
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::common::Color;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rounds_stay_in_range() {
        let settings = ScrambleSettings::default();
        for seed in 0..20 {
            let mut cube = Cube::default();
            let moves = cube.scramble_with(&mut StdRng::seed_from_u64(seed), &settings);
            assert_eq!(moves.len() % 2, 0);
            assert!(settings.rounds().contains(&(moves.len() / 2)));
            assert_eq!(cube.validate(), Ok(()));
        }
    }

    /// Rounds alternate a reorientation and a front turn.
    #[test]
    fn rounds_pair_reorientation_with_turn() {
        let mut cube = Cube::default();
        let moves = cube.scramble_with(&mut StdRng::seed_from_u64(7), &ScrambleSettings::default());
        for (reorientation, turn) in moves.iter().tuples() {
            assert!(reorientation.is_reorientation());
            assert!(!turn.is_reorientation());
        }
    }

    #[test]
    fn no_cancelling_reorientations() {
        let settings = ScrambleSettings {
            min_rounds: 200,
            max_rounds: 200,
        };
        let mut cube = Cube::default();
        let moves = cube.scramble_with(&mut StdRng::seed_from_u64(3), &settings);
        let reorientations: Vec<_> = moves.iter().step_by(2).collect();
        for (a, b) in reorientations.iter().tuple_windows() {
            if let (Move::Cube(axis_a, Spin::Clockwise), Move::Cube(axis_b, spin_b)) = (a, b) {
                assert!(
                    !(axis_a == axis_b && *spin_b == Spin::AntiClockwise),
                    "{a} followed by {b}"
                );
            }
        }
    }

    /// Replaying the returned moves on a fresh cube reproduces the scramble.
    #[test]
    fn scramble_replays() {
        let mut cube = Cube::new(Color::Red);
        let moves = cube.scramble_with(&mut StdRng::seed_from_u64(11), &ScrambleSettings::default());
        assert!(!cube.is_solved());

        let mut replayed = Cube::new(Color::Red);
        replayed.apply_all(moves.iter().copied());
        assert_eq!(replayed, cube);

        cube.apply_all(moves.iter().rev().map(|mv| mv.inverse()));
        assert_eq!(cube, Cube::new(Color::Red));
    }

    #[test]
    fn inverted_range_collapses() {
        let settings = ScrambleSettings {
            min_rounds: 5,
            max_rounds: 2,
        };
        assert_eq!(settings.rounds(), 5..=5);
    }
}
