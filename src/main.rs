use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::cli::{self, Command, Options, USAGE};
use flappy::core::LOG_FILTER_ENV;
use flappy::error::Result;
use flappy::input::{map_event, GameInput};
use flappy::ui::{draw_ui, TerminalFrontend};
use flappy::{FrameClock, FrameRequest, GameConfig, GameSession};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

/// Input poll timeout while no frame is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(50);

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match cli::parse_args(std::env::args().skip(1))? {
        Command::Version => println!("{}", build_info::version_line()),
        Command::Help => println!("{}", USAGE),
        Command::DumpConfig(options) => {
            let config = load_config(&options)?;
            print!("{}", config.to_toml()?);
        }
        Command::Play(options) => {
            if let Some(path) = &options.log_file {
                init_logging(path)?;
            }
            let config = load_config(&options)?;
            let rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play(config, rng)?;
            println!("Thanks for flying!");
        }
    }
    Ok(())
}

fn load_config(options: &Options) -> Result<GameConfig> {
    match &options.config {
        Some(path) => Ok(GameConfig::load(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Log to a file; stderr would scribble over the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_FILTER_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn play(config: GameConfig, rng: StdRng) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, config, rng);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn game_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
    mut rng: StdRng,
) -> Result<()> {
    let mut clock = FrameClock::new(&config.timing);
    let mut session = GameSession::new(config);
    let mut ui = TerminalFrontend::new();
    session.present(&mut ui);
    info!("ready");

    loop {
        terminal.draw(|frame| draw_ui(frame, &ui, &session))?;

        let timeout = clock.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                Some(GameInput::Action) => {
                    if session.action(&mut ui) {
                        clock.start(Instant::now());
                    }
                }
                Some(GameInput::Reset) => session.reset_game(&mut ui),
                Some(GameInput::Quit) => break,
                None => {}
            }
        }

        for _ in 0..clock.due_frames(Instant::now()) {
            if session.frame(&mut rng, &mut ui) == FrameRequest::Halt {
                clock.stop();
                break;
            }
        }
    }

    info!("quit with score {}", session.score());
    Ok(())
}
