use crate::game::action::Direction;
use crate::game::grid::Cell;

/// The snake body: occupied cells in order, head at index 0.
///
/// The body is never empty once a round is set up, and holds no duplicate
/// cells while the snake is alive. Only the engine mutates it: a prepend on
/// every move, and a tail drop on moves that don't land on food.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Lay out a snake of `length` cells with the tail trailing away from
    /// `direction`. `length` must be at least 1.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32).map(|i| head.offset(-dx * i, -dy * i)).collect();
        Self { body }
    }

    /// Head cell. Panics if the body is empty, which the engine never allows.
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Prepend a new head. The caller decides separately whether the tail
    /// drops (plain move) or stays (growth).
    pub fn advance(&mut self, new_head: Cell) {
        self.body.insert(0, new_head);
    }

    /// Remove the tail cell. The engine always advances first, so the body
    /// stays non-empty.
    pub fn drop_tail(&mut self) {
        self.body.pop();
    }

    /// Linear membership scan, used for self-collision and food placement
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Occupied cells, head to tail
    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_layout() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.cells(), &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
    }

    #[test]
    fn test_single_cell_snake() {
        let snake = Snake::new(Cell::new(20, 15), Direction::Right, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(20, 15));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_then_drop_keeps_length() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        snake.advance(Cell::new(6, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(6, 5));

        snake.drop_tail();
        assert_eq!(snake.len(), 3);
        assert!(!snake.contains(Cell::new(3, 5)));
    }

    #[test]
    fn test_advance_without_drop_grows() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        snake.advance(Cell::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.cells(), &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn test_contains() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Down, 3);
        assert!(snake.contains(Cell::new(5, 5)));
        assert!(snake.contains(Cell::new(5, 4)));
        assert!(snake.contains(Cell::new(5, 3)));
        assert!(!snake.contains(Cell::new(6, 5)));
    }
}
