use rand::Rng;
use std::path::Path;

use crate::puzzle::common::Color;
use crate::puzzle::cube::Cube;
use crate::puzzle::moves::Move;
use crate::puzzle::scramble::ScrambleSettings;

/// A cube together with how it got to its current state.
#[derive(Debug, Clone)]
pub struct Session {
    pub primary: Color,
    pub scramble: Vec<Move>,
    pub cube: Cube,
    pub twists: Vec<Move>,
    pub undid_twists: Vec<Move>,
}

impl Session {
    pub fn new(primary: Color) -> Session {
        Session {
            primary,
            scramble: vec![],
            cube: Cube::new(primary),
            twists: vec![],
            undid_twists: vec![],
        }
    }

    pub fn twist(&mut self, mv: Move) {
        self.cube.apply(mv);
        self.twists.push(mv);
        self.undid_twists = vec![];
    }

    pub fn undo(&mut self) {
        if let Some(mv) = self.twists.pop() {
            self.undid_twists.push(mv);
            self.cube.apply(mv.inverse());
        } else {
            // no undo left
        }
    }

    pub fn redo(&mut self) {
        if let Some(mv) = self.undid_twists.pop() {
            self.twists.push(mv);
            self.cube.apply(mv);
        } else {
            // no redo left
        }
    }

    /// Replaces the last twist by its inverse.
    pub fn do_inverse(&mut self) {
        if let Some(mv) = self.twists.pop() {
            let inverse = mv.inverse();
            self.twists.push(inverse);
            self.undid_twists = vec![];
            self.cube.apply_n(inverse, 2);
        } else {
            // no undo left
        }
    }

    pub fn reset(&mut self) {
        self.cube = Cube::new(self.primary);
        self.scramble = vec![];
        self.twists = vec![];
        self.undid_twists = vec![];
    }

    /// Resets, then scrambles. History starts over from the scrambled state.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R, settings: &ScrambleSettings) {
        self.reset();
        self.scramble = self.cube.scramble_with(rng, settings);
    }

    /// The moves that take the cube back to solved.
    pub fn inverse_sequence(&self) -> Vec<Move> {
        self.scramble
            .iter()
            .chain(&self.twists)
            .rev()
            .map(|mv| mv.inverse())
            .collect()
    }

    pub fn to_log(&self) -> SessionLog {
        let names = |moves: &[Move]| -> Vec<String> {
            moves.iter().map(|mv| mv.name()).collect()
        };
        SessionLog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            primary: self.primary,
            scramble: names(&self.scramble),
            twists: names(&self.twists),
        }
    }

    /// Rebuilds a session by replaying a log's scramble and twists.
    pub fn from_log(log: &SessionLog) -> eyre::Result<Session> {
        let parse = |names: &[String]| -> eyre::Result<Vec<Move>> {
            Ok(names
                .iter()
                .map(|name| name.parse::<Move>())
                .collect::<Result<_, _>>()?)
        };

        let mut session = Session::new(log.primary);
        session.scramble = parse(&log.scramble)?;
        session.cube.apply_all(session.scramble.iter().copied());
        for mv in parse(&log.twists)? {
            session.twist(mv);
        }
        Ok(session)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string(&self.to_log())?)?;
        log::debug!("saved session to {}", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Session> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let log: SessionLog = serde_json::from_reader(reader)?;
        Session::from_log(&log)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionLog {
    pub version: String,
    pub primary: Color,
    pub scramble: Vec<String>,
    pub twists: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::common::{Axis, Spin};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const F: Move = Move::Front(Spin::Clockwise);
    const X: Move = Move::Cube(Axis::X, Spin::Clockwise);

    #[test]
    fn undo_redo() {
        let mut session = Session::new(Color::White);
        session.twist(F);
        session.twist(X);
        let twisted = session.cube.clone();

        session.undo();
        session.undo();
        session.undo();
        assert_eq!(session.cube, Cube::new(Color::White));
        assert_eq!(session.undid_twists, vec![X, F]);

        session.redo();
        session.redo();
        assert_eq!(session.cube, twisted);
        assert!(session.undid_twists.is_empty());
    }

    #[test]
    fn twisting_clears_redo() {
        let mut session = Session::new(Color::White);
        session.twist(F);
        session.undo();
        session.twist(X);
        session.redo();
        assert_eq!(session.twists, vec![X]);
    }

    /// F followed by inverting it leaves F' applied.
    #[test]
    fn do_inverse_swaps_last_twist() {
        let mut session = Session::new(Color::Orange);
        session.twist(F);
        session.do_inverse();
        assert_eq!(session.twists, vec![F.inverse()]);

        let mut expected = Cube::new(Color::Orange);
        expected.apply(F.inverse());
        assert_eq!(session.cube, expected);
    }

    #[test]
    fn inverse_sequence_solves() {
        let mut session = Session::new(Color::Green);
        session.scramble(&mut StdRng::seed_from_u64(5), &ScrambleSettings::default());
        session.twist(F);
        session.twist(X.inverse());
        assert!(!session.scramble.is_empty());

        for mv in session.inverse_sequence() {
            session.twist(mv);
        }
        assert_eq!(session.cube, Cube::new(Color::Green));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut session = Session::new(Color::Blue);
        session.scramble(&mut StdRng::seed_from_u64(1), &ScrambleSettings::default());
        session.twist(F);
        session.reset();
        assert!(session.scramble.is_empty());
        assert!(session.twists.is_empty());
        assert_eq!(session.cube, Cube::new(Color::Blue));
    }

    #[test]
    fn log_replays() {
        let mut session = Session::new(Color::Yellow);
        session.scramble(&mut StdRng::seed_from_u64(9), &ScrambleSettings::default());
        session.twist(X);
        session.twist(F.inverse());

        let log = session.to_log();
        assert_eq!(log.twists, vec!["X".to_string(), "F'".to_string()]);

        let json = serde_json::to_string(&log).unwrap();
        let parsed: SessionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);

        let replayed = Session::from_log(&parsed).unwrap();
        assert_eq!(replayed.cube, session.cube);
        assert_eq!(replayed.twists, session.twists);
    }

    #[test]
    fn bad_log_is_rejected() {
        let log = SessionLog {
            version: "0".to_string(),
            primary: Color::White,
            scramble: vec!["F".to_string(), "Q".to_string()],
            twists: vec![],
        };
        assert!(Session::from_log(&log).is_err());
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("rubiks_cube_session_{}", std::process::id()))
            .join("session.json");
        let mut session = Session::new(Color::Red);
        session.twist(F);
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.cube, session.cube);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
