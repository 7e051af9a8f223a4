mod constants;
mod fruit_match;
mod input;
mod lobby;
mod settings;
mod ui;
mod utils;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::ThreadRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use constants::TICK_INTERVAL_MS;
use input::InputResult;
use lobby::LobbyState;
use settings::Settings;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("parlor {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Parlor - Terminal Game Lobby\n");
                println!("Usage: parlor [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'parlor --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut state = LobbyState::new(Settings::load(), &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut state, &mut rng);

    // Restore terminal even if the loop errored.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut LobbyState,
    rng: &mut ThreadRng,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, state))?;

        let timeout = Duration::from_millis(TICK_INTERVAL_MS)
            .saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && input::handle_key(state, key, rng) == InputResult::Exit
                {
                    return Ok(());
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
            let dt_ms = elapsed.as_millis() as u64;
            last_tick = Instant::now();
            state.tick(dt_ms);
            fruit_match::tick_game(&mut state.match_game, dt_ms, rng);
        }
    }
}
