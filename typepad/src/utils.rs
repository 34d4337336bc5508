use ratatui::widgets::{Block, BorderType};

/// A block with a rounded border
pub const ROUNDED_BLOCK: Block = Block::bordered().border_type(BorderType::Rounded);

/// How far to scroll so that `position` stays inside a view of `size` cells,
/// given the current `offset`
pub const fn follow(position: usize, offset: usize, size: usize) -> usize {
    if size == 0 || position < offset {
        position
    } else if position >= offset + size {
        position + 1 - size
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow() {
        // Inside the view
        assert_eq!(follow(3, 0, 10), 0);
        assert_eq!(follow(12, 5, 10), 5);
        // Below the view
        assert_eq!(follow(10, 0, 10), 1);
        assert_eq!(follow(25, 0, 10), 16);
        // Above the view
        assert_eq!(follow(2, 5, 10), 2);
        // Nothing visible
        assert_eq!(follow(7, 0, 0), 7);
    }
}
