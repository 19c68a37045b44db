use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use zombie_jumper::compute::{init_world, tick};
use zombie_jumper::display;
use zombie_jumper::entities::{GamePhase, World, FPS};
use zombie_jumper::input::InputSampler;
use zombie_jumper::scores::{high_score_path, ScoreBoard};

const FRAME: Duration = Duration::from_millis(1000 / FPS); // ≈60 FPS

/// How long the WASTED / YOU WIN banner stays up before the session returns
/// to the menu.
const END_BANNER_HOLD: Duration = Duration::from_secs(5);

const NAME_MAX_LEN: usize = 12;

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    board: &ScoreBoard,
) -> std::io::Result<MenuResult> {
    display::render_menu(out, board)?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                if code == KeyCode::Enter {
                    return Ok(MenuResult::Start);
                }
                if is_quit(code, modifiers) {
                    return Ok(MenuResult::Quit);
                }
            }
            Err(_) => return Ok(MenuResult::Quit),
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until the world leaves `Playing` or the user quits.
/// Returns `true` → quit program,  `false` → world reached a terminal phase.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();
    let mut sampler = InputSampler::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev {
                if kind == KeyEventKind::Press && is_quit(code, modifiers) {
                    return Ok(true);
                }
                sampler.record(code, kind, frame);
            }
        }

        let intent = sampler.sample(frame);
        *world = tick(world, intent, &mut rng);

        display::render(out, world)?;

        if world.phase != GamePhase::Playing {
            return Ok(false);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── End screen ────────────────────────────────────────────────────────────────

/// Hold the end banner for a fixed real-time period.  Returns `true` if the
/// user asked to quit while it was up.
fn end_screen<W: Write>(
    out: &mut W,
    world: &World,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    display::render_end(out, world)?;

    let deadline = Instant::now() + END_BANNER_HOLD;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        match rx.recv_timeout(deadline - now) {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                if is_quit(code, modifiers) {
                    return Ok(true);
                }
                // Any other key skips the wait
                return Ok(false);
            }
            Ok(_) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => return Ok(false),
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(true),
        }
    }
}

/// Collect a name for the high-score table.  Commas are rejected because
/// the score file has no escaping.  `None` = the player skipped entry.
fn prompt_name<W: Write>(
    out: &mut W,
    score: u32,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<Option<String>> {
    let mut name = String::new();
    loop {
        display::render_name_entry(out, &name, score)?;
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Enter => {
                    let name = if name.is_empty() { "anon".to_string() } else { name };
                    return Ok(Some(name));
                }
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    name.pop();
                }
                KeyCode::Char(c) if c != ',' && name.chars().count() < NAME_MAX_LEN => {
                    name.push(c);
                }
                _ => {}
            },
            Err(_) => return Ok(None),
            _ => {}
        }
    }
}

// ── Session manager ───────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let score_path = high_score_path();
    let mut board = ScoreBoard::load(&score_path);

    loop {
        match show_menu(out, rx, &board)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                // A fresh world per session; the old one is dropped whole.
                let mut world = init_world();
                if game_loop(out, &mut world, rx)? {
                    break;
                }
                if end_screen(out, &world, rx)? {
                    break;
                }
                if board.qualifies(world.score) {
                    if let Some(name) = prompt_name(out, world.score, rx)? {
                        board.record(name, world.score);
                        let _ = board.save(&score_path);
                    }
                }
                // Back to the menu
            }
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
