use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// No free cell is left for the apple.
    GridFull { width: u16, height: u16 },
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GridFull { width, height } => {
                write!(f, "no free cell left on the {}x{} grid", width, height)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for io::Error {
    fn from(e: GameError) -> Self {
        io::Error::other(e)
    }
}

pub type Result<T = ()> = std::result::Result<T, GameError>;
