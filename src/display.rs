/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of game
/// state.  No game logic is performed; this module only projects world
/// coordinates (800×600) onto the terminal cell grid and queues crossterm
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Entity, Facing, GamePhase, World, SCREEN_WIDTH};
use crate::scores::ScoreBoard;

// ── World → cell projection ───────────────────────────────────────────────────

/// One cell covers 10×25 world units, so the 800×600 world is 80×24 cells.
const CELL_W: f32 = 10.0;
const CELL_H: f32 = 25.0;
pub const GRID_W: u16 = 80;
/// Rows 1..=24 are the play area; row 0 is the HUD, row 25 the controls hint.
pub const GRID_H: u16 = 26;

const HUD_ROW: u16 = 0;
const PLAY_TOP: u16 = 1;
const HINT_ROW: u16 = 25;

fn col_of(x: f32) -> Option<u16> {
    if (0.0..SCREEN_WIDTH).contains(&x) {
        Some((x / CELL_W) as u16)
    } else {
        None
    }
}

fn row_of(y: f32) -> u16 {
    PLAY_TOP + (y.max(0.0) / CELL_H) as u16
}

/// Row containing a bottom edge (an entity resting at y = 600 occupies the
/// last play row, not the one past it).
fn bottom_row_of(bottom: f32) -> u16 {
    row_of((bottom - 1.0).max(0.0))
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ZOMBIE: Color = Color::Green;
const C_COIN: Color = Color::Yellow;
const C_PLATFORM: Color = Color::Grey;
const C_SKYLINE: Color = Color::DarkGrey;
const C_GROUND: Color = Color::DarkGreen;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete playing frame.
pub fn render<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, world)?;
    for block in &world.blocks {
        draw_platform(out, block)?;
    }
    for coin in world.pickups.iter().filter(|c| c.alive) {
        draw_coin(out, coin)?;
    }
    for zombie in world.hazards.iter().filter(|z| z.alive) {
        draw_zombie(out, zombie)?;
    }
    draw_player(out, &world.player)?;
    draw_hud(out, world)?;
    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// Rough building silhouettes at fixed offsets inside each tile: enough to
/// make the two-tile ring buffer visibly scroll and wrap.
const SKYLINE: &[(f32, u16)] = &[
    (60.0, 5),
    (180.0, 8),
    (310.0, 4),
    (440.0, 7),
    (570.0, 6),
    (690.0, 3),
];

fn draw_background<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SKYLINE))?;
    for &tile in &world.tiles {
        for &(offset, height) in SKYLINE {
            let Some(col) = col_of(tile + offset) else {
                continue;
            };
            let base = PLAY_TOP + 23;
            for row in (base - height)..base {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("░░"))?;
            }
        }
    }

    // Ground line along the bottom of the play area
    out.queue(style::SetForegroundColor(C_GROUND))?;
    out.queue(cursor::MoveTo(0, PLAY_TOP + 23))?;
    out.queue(Print("▔".repeat(GRID_W as usize)))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HUD_ROW))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", world.score)))?;

    let coins_left = format!("Coins left: {:>2}", world.pickups.len());
    let rx = GRID_W.saturating_sub(coins_left.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, HUD_ROW))?;
    out.queue(style::SetForegroundColor(C_COIN))?;
    out.queue(Print(&coins_left))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, player: &Entity) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //    O      ← head
    //   /|>     ← body, arm toward the facing side
    let center = player.body.x + player.body.w / 2.0;
    let Some(col) = col_of(center) else {
        return Ok(());
    };
    let foot = bottom_row_of(player.body.bottom());
    let lx = col.saturating_sub(1);

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, foot.saturating_sub(1)))?;
    out.queue(Print("O"))?;
    out.queue(cursor::MoveTo(lx, foot))?;
    match player.facing {
        Facing::Right => out.queue(Print("/|>"))?,
        Facing::Left => out.queue(Print("<|\\"))?,
    };
    Ok(())
}

fn draw_zombie<W: Write>(out: &mut W, zombie: &Entity) -> std::io::Result<()> {
    // Row 0:  [Z]
    // Row 1:  / \   (legs trail the walk direction)
    let center = zombie.body.x + zombie.body.w / 2.0;
    let Some(col) = col_of(center) else {
        return Ok(());
    };
    let foot = bottom_row_of(zombie.body.bottom());
    let lx = col.saturating_sub(1);

    out.queue(style::SetForegroundColor(C_ZOMBIE))?;
    out.queue(cursor::MoveTo(lx, foot.saturating_sub(1)))?;
    out.queue(Print("[Z]"))?;
    out.queue(cursor::MoveTo(lx, foot))?;
    match zombie.facing {
        Facing::Right => out.queue(Print("/ >"))?,
        Facing::Left => out.queue(Print("< \\"))?,
    };
    Ok(())
}

fn draw_coin<W: Write>(out: &mut W, coin: &Entity) -> std::io::Result<()> {
    let center = coin.body.x + coin.body.w / 2.0;
    let Some(col) = col_of(center) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row_of(coin.body.y)))?;
    out.queue(style::SetForegroundColor(C_COIN))?;
    out.queue(Print("●"))?;
    Ok(())
}

fn draw_platform<W: Write>(out: &mut W, block: &Entity) -> std::io::Result<()> {
    let start = block.body.x.max(0.0);
    let end = block.body.right().min(SCREEN_WIDTH);
    if start >= end {
        return Ok(());
    }
    let c0 = (start / CELL_W) as u16;
    let c1 = ((end - 1.0) / CELL_W) as u16;
    let width = (c1 - c0 + 1) as usize;

    out.queue(cursor::MoveTo(c0, row_of(block.body.y)))?;
    out.queue(style::SetForegroundColor(C_PLATFORM))?;
    out.queue(Print("▀".repeat(width)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   W / SPACE : Jump   Q : Quit"))?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Title screen with the high-score table.
pub fn render_menu<W: Write>(out: &mut W, board: &ScoreBoard) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = GRID_W / 2;

    let title = "★  URBAN  ZOMBIE  WARRIOR  ★";
    out.queue(cursor::MoveTo(center_col(cx, title), 3))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let prompt = "PRESS ENTER TO CONTINUE";
    out.queue(cursor::MoveTo(center_col(cx, prompt), 6))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(prompt))?;

    if !board.entries().is_empty() {
        let header = "High Scores";
        out.queue(cursor::MoveTo(center_col(cx, header), 9))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(header))?;

        out.queue(style::SetForegroundColor(Color::Grey))?;
        for (i, entry) in board.entries().iter().enumerate() {
            let line = format!("{:>2}. {:<12} {:>6}", i + 1, entry.name, entry.score);
            out.queue(cursor::MoveTo(center_col(cx, &line), 10 + i as u16))?;
            out.queue(Print(&line))?;
        }
    }

    out.queue(cursor::MoveTo(center_col(cx, "Stomp zombies, grab coins."), 22))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Stomp zombies, grab coins."))?;
    draw_controls_hint(out)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── End-state banner ──────────────────────────────────────────────────────────

/// Draw the frozen final frame with a WASTED / YOU WIN banner over it.
pub fn render_end<W: Write>(out: &mut W, world: &World) -> std::io::Result<()> {
    render(out, world)?;

    let (message, color) = match world.phase {
        GamePhase::Won => ("Y O U   W I N", Color::Green),
        GamePhase::Lost => ("W A S T E D", Color::Red),
        GamePhase::Playing => return Ok(()),
    };

    let score_line = format!("Final Score: {}", world.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", color),
        ("║                      ║", color),
        ("╚══════════════════════╝", color),
        (&score_line, Color::Yellow),
    ];

    let cx = GRID_W / 2;
    let start_row = GRID_H / 2 - 2;
    for (i, (msg, c)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(center_col(cx, msg), start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*c))?;
        out.queue(Print(*msg))?;
    }
    // Message inside the box
    out.queue(cursor::MoveTo(center_col(cx, message), start_row + 1))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(message))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── High-score name entry ─────────────────────────────────────────────────────

pub fn render_name_entry<W: Write>(out: &mut W, name: &str, score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = GRID_W / 2;

    let headline = format!("NEW HIGH SCORE: {}", score);
    out.queue(cursor::MoveTo(center_col(cx, &headline), 8))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&headline))?;

    let prompt = format!("Enter your name: {}_", name);
    out.queue(cursor::MoveTo(center_col(cx, &prompt), 11))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(&prompt))?;

    let hint = "ENTER to save   ESC to skip";
    out.queue(cursor::MoveTo(center_col(cx, hint), 14))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn center_col(cx: u16, text: &str) -> u16 {
    cx.saturating_sub(text.chars().count() as u16 / 2)
}
