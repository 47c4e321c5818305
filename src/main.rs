use rubiks_cube::preferences::Preferences;
use rubiks_cube::session::Session;

fn main() -> eyre::Result<()> {
    env_logger::builder()
        .filter_module(
            "rubiks_cube",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .init();

    let prefs = Preferences::load()?;
    let mut session = Session::new(prefs.primary);
    println!("{}", session.cube);

    session.scramble(&mut rand::thread_rng(), &prefs.scramble);
    log::info!("scrambled with {} moves", session.scramble.len());
    println!("{}", session.cube);

    for mv in session.inverse_sequence() {
        session.twist(mv);
    }
    session.cube.validate()?;
    log::info!("solved again: {}", session.cube.is_solved());
    println!("{}", session.cube);

    session.save(&prefs.session_log)?;
    Ok(())
}
