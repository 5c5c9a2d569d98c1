#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

/// Fixed board geometry. `cell_width` is only read by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
    pub cell_width: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell_width: u16) -> Self {
        Grid {
            width,
            height,
            cell_width,
        }
    }

    /// Reduces an arbitrary coordinate pair onto the torus.
    pub fn wrap(&self, x: i32, y: i32) -> Pos {
        Pos {
            x: x.rem_euclid(self.width as i32) as u16,
            y: y.rem_euclid(self.height as i32) as u16,
        }
    }

    pub fn wrapped_add(&self, pos: Pos, delta: PosDelta) -> Pos {
        self.wrap(pos.x as i32 + delta.x, pos.y as i32 + delta.y)
    }

    pub fn center(&self) -> Pos {
        Pos {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos { x, y }))
    }
}
