use crate::grid::Direction;
use crate::haus::Command;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use std::io;
use std::time::Instant;

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Up | KeyCode::Char('w') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Command::Turn(Direction::Right),
        _ => return None,
    };
    Some(command)
}

/// Collects commands from the terminal until `deadline`. Stops early on quit.
pub fn drain_until(deadline: Instant) -> io::Result<Vec<Command>> {
    let mut commands = Vec::new();
    while event::poll(deadline.saturating_duration_since(Instant::now()))? {
        if let Event::Key(key) = event::read()? {
            if let Some(command) = command_for(key) {
                debug!("Input {:?}", command);
                commands.push(command);
                if command == Command::Quit {
                    break;
                }
            }
        }
    }
    Ok(commands)
}
