use crate::grid::{Direction, Grid, Pos};
use std::collections::VecDeque;

/// The player's snake. `body[0]` is the head.
#[derive(Debug)]
pub struct Snek {
    spawn: Pos,
    body: VecDeque<Pos>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    vacated: Option<Pos>,
}

impl Snek {
    pub fn new(spawn: Pos) -> Self {
        Snek {
            spawn,
            body: VecDeque::from([spawn]),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            vacated: None,
        }
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Tail cell dropped by the last move, kept so the renderer can erase it.
    pub fn vacated(&self) -> Option<Pos> {
        self.vacated
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    /// Requests a turn for the next tick. A request to reverse onto the
    /// committed direction is discarded.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    pub fn slither(&mut self, grid: &Grid) {
        let new_head = grid.wrapped_add(self.head(), self.direction.into());
        self.body.push_front(new_head);

        // Growth shows up here: the tail stays when length was bumped
        self.vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// The segment right behind the head is never a collision.
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(2).any(|&pos| pos == head)
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.body.contains(&pos)
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.spawn);
        self.length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.vacated = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10, 1)
    }

    fn snek_with_body(body: &[Pos], direction: Direction) -> Snek {
        Snek {
            spawn: Pos { x: 5, y: 5 },
            body: body.iter().copied().collect(),
            length: body.len(),
            direction,
            pending_direction: None,
            vacated: None,
        }
    }

    #[test]
    fn test_new_snek() {
        let snek = Snek::new(Pos { x: 5, y: 5 });
        assert_eq!(snek.body().len(), 1);
        assert_eq!(snek.head(), Pos { x: 5, y: 5 });
        assert_eq!(snek.length(), 1);
        assert_eq!(snek.direction(), Direction::Right);
        assert_eq!(snek.pending_direction(), None);
        assert_eq!(snek.vacated(), None);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snek = Snek::new(Pos { x: 5, y: 5 });

        snek.set_pending_direction(Direction::Left);
        assert_eq!(snek.pending_direction(), None);
        snek.commit_direction();
        assert_eq!(snek.direction(), Direction::Right);
    }

    #[test]
    fn test_latest_valid_request_wins() {
        let mut snek = Snek::new(Pos { x: 5, y: 5 });

        snek.set_pending_direction(Direction::Up);
        snek.set_pending_direction(Direction::Down);
        // Discarded, Down survives
        snek.set_pending_direction(Direction::Left);
        snek.commit_direction();

        assert_eq!(snek.direction(), Direction::Down);
        assert_eq!(snek.pending_direction(), None);
    }

    #[test]
    fn test_reversal_checked_against_committed_direction() {
        let mut snek = Snek::new(Pos { x: 5, y: 5 });

        // Up is pending but not committed, so Left is still a reversal of Right
        snek.set_pending_direction(Direction::Up);
        snek.set_pending_direction(Direction::Left);
        snek.commit_direction();
        assert_eq!(snek.direction(), Direction::Up);
    }

    #[test]
    fn test_commit_without_pending_keeps_direction() {
        let mut snek = Snek::new(Pos { x: 5, y: 5 });
        snek.commit_direction();
        assert_eq!(snek.direction(), Direction::Right);
    }

    #[test]
    fn test_snek_movement() {
        let grid = grid();
        let mut snek = snek_with_body(
            &[Pos { x: 5, y: 5 }, Pos { x: 4, y: 5 }, Pos { x: 3, y: 5 }],
            Direction::Right,
        );

        snek.slither(&grid);

        assert_eq!(snek.head(), Pos { x: 6, y: 5 });
        assert_eq!(snek.body()[1], Pos { x: 5, y: 5 });
        assert_eq!(snek.body()[2], Pos { x: 4, y: 5 });
        assert_eq!(snek.body().len(), 3, "Length remained the same");
        assert_eq!(snek.vacated(), Some(Pos { x: 3, y: 5 }));
    }

    #[test]
    fn test_slither_wraps_right_edge() {
        let grid = grid();
        let mut snek = Snek::new(Pos { x: 9, y: 2 });
        snek.slither(&grid);
        assert_eq!(snek.head(), Pos { x: 0, y: 2 });
        assert_eq!(snek.vacated(), Some(Pos { x: 9, y: 2 }));
    }

    #[test]
    fn test_growth_appears_on_next_move() {
        let grid = grid();
        let mut snek = Snek::new(Pos { x: 5, y: 5 });

        snek.grow();
        assert_eq!(snek.length(), 2);
        assert_eq!(snek.body().len(), 1, "Grow has no immediate effect");

        snek.slither(&grid);
        assert_eq!(snek.body().len(), 2);
        assert_eq!(snek.vacated(), None, "Nothing is vacated while growing");

        snek.slither(&grid);
        assert_eq!(snek.body().len(), 2);
        assert_eq!(snek.vacated(), Some(Pos { x: 5, y: 5 }));
    }

    #[test]
    fn test_self_collision_skips_neck() {
        let head = Pos { x: 5, y: 5 };

        let neck_overlap = snek_with_body(&[head, head, Pos { x: 5, y: 6 }], Direction::Up);
        assert!(!neck_overlap.has_self_collision());

        let body_overlap = snek_with_body(
            &[head, Pos { x: 5, y: 6 }, head, Pos { x: 4, y: 5 }],
            Direction::Up,
        );
        assert!(body_overlap.has_self_collision());

        let tail_overlap = snek_with_body(
            &[
                head,
                Pos { x: 5, y: 6 },
                Pos { x: 4, y: 6 },
                Pos { x: 4, y: 5 },
                head,
            ],
            Direction::Up,
        );
        assert!(tail_overlap.has_self_collision());
    }

    #[test]
    fn test_no_collision_for_straight_body() {
        let snek = snek_with_body(
            &[Pos { x: 5, y: 5 }, Pos { x: 4, y: 5 }, Pos { x: 3, y: 5 }],
            Direction::Right,
        );
        assert!(!snek.has_self_collision());
        assert!(snek.occupies(Pos { x: 4, y: 5 }));
        assert!(!snek.occupies(Pos { x: 6, y: 5 }));
    }

    #[test]
    fn test_loop_into_self() {
        let grid = grid();
        let mut snek = snek_with_body(
            &[
                Pos { x: 5, y: 5 },
                Pos { x: 4, y: 5 },
                Pos { x: 3, y: 5 },
                Pos { x: 3, y: 4 },
                Pos { x: 4, y: 4 },
            ],
            Direction::Right,
        );
        // Up, Left, Down brings the head back onto (4, 5)
        snek.set_pending_direction(Direction::Up);
        snek.commit_direction();
        snek.slither(&grid);
        snek.set_pending_direction(Direction::Left);
        snek.commit_direction();
        snek.slither(&grid);
        assert!(!snek.has_self_collision());

        snek.set_pending_direction(Direction::Down);
        snek.commit_direction();
        snek.slither(&grid);
        assert_eq!(snek.head(), Pos { x: 4, y: 5 });
        assert!(snek.has_self_collision());
    }

    #[test]
    fn test_reset() {
        let grid = grid();
        let mut snek = Snek::new(Pos { x: 5, y: 5 });
        snek.grow();
        snek.grow();
        snek.set_pending_direction(Direction::Down);
        snek.commit_direction();
        snek.slither(&grid);
        snek.slither(&grid);
        snek.set_pending_direction(Direction::Left);

        snek.reset();

        assert_eq!(snek.length(), 1);
        assert_eq!(snek.body(), &VecDeque::from([Pos { x: 5, y: 5 }]));
        assert_eq!(snek.direction(), Direction::Right);
        assert_eq!(snek.pending_direction(), None);
        assert_eq!(snek.vacated(), None);
    }
}
