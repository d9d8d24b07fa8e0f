use grid_pathwalk::render::Renderer;
use grid_pathwalk::{
    ensure_solvable, find_path, input::Prompter, GeneratorConfig, Grid, GridError, COLS, ROWS,
    STEP_DELAY,
};
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

fn run() -> grid_pathwalk::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let (a, b) = Prompter::new(stdin.lock(), &mut stdout, ROWS, COLS).ask_endpoints()?;

    let mut grid = Grid::with_endpoints(ROWS, COLS, a, b)?;
    let mut rng = rand::thread_rng();
    match ensure_solvable(&mut grid, &mut rng, &GeneratorConfig::default()) {
        Ok(_) => {}
        Err(GridError::NonTerminatingGeneration { attempts }) => {
            info!("Generation gave up after {} batches", attempts);
        }
        Err(e) => return Err(e),
    }

    // The grid is final from here on.
    let grid = grid;
    let path = find_path(&grid, a, b);
    if path.is_empty() {
        writeln!(stdout, "No path found!")?;
        return Ok(());
    }
    debug_assert!(grid_pathwalk::solver::path_is_valid(&grid, &path, a, b));
    info!("Playing back a path of {} cells", path.len());
    Renderer::new(&grid, &path).play(&mut stdout, STEP_DELAY)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
