mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::config::{parse_seed, GameConfig};
use flappy::core::CoreGame;
use flappy::input::{map_key, GameInput};
use flappy::logging;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    logging::init_for_terminal(options.log_path.as_deref())?;

    // Fail before touching the terminal so the error is readable
    let (config, source) = GameConfig::resolve(options.config_path.as_deref())?;
    log::info!("{} starting with {}", build_info::version_string(), source);

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = CoreGame::new(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &mut rng, config.tick_interval_ms);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal loop failed: {}", e);
    }
    result
}

/// Draw, poll input for at most one tick, then feed the elapsed time to the
/// clock. Returns when the player quits.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut CoreGame,
    rng: &mut ChaCha8Rng,
    tick_interval_ms: u64,
) -> io::Result<()> {
    let poll_timeout = Duration::from_millis(tick_interval_ms);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, game))?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    GameInput::Quit => {
                        log::info!("quit after {} games", game.games_played());
                        return Ok(());
                    }
                    GameInput::PrimaryAction => game.primary_action(),
                    GameInput::Other => {}
                }
            }
        }

        // Carry sub-millisecond remainders over to the next frame
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);

        let result = game.frame(dt_ms, rng);
        if result.pairs_spawned > 0 || result.pipes_passed > 0 {
            log::debug!(
                "frame: {} ticks, {} pairs spawned, {} pipes passed",
                result.ticks,
                result.pairs_spawned,
                result.pipes_passed
            );
        }
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--config" | "-c" if i + 1 < args.len() => {
                options.config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--log" if i + 1 < args.len() => {
                options.log_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--seed" | "-s" if i + 1 < args.len() => match parse_seed(&args[i + 1]) {
                Ok(seed) => {
                    options.seed = Some(seed);
                    i += 1;
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown or incomplete argument: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Flappy - terminal side-scroller\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  -c, --config <FILE>  Load tunables from a JSON file");
    println!("                       (default: ~/.flappy/config.json if present)");
    println!("  -s, --seed <N>       Seed the pipe generator");
    println!("      --log <FILE>     Write logs to FILE (filter with RUST_LOG)");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Controls: Space/Up/Enter to flap or restart, Esc/q to quit.");
}
