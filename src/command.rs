/// Navigation requests produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    First,
    Last,
}

/// Which way a slide change reads, used to pick the transition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Command {
    /// Direction of the move from `from` to `to` caused by this command.
    ///
    /// `Next`/`Previous` keep their direction even when the cursor wraps.
    pub fn direction(self, from: usize, to: usize) -> Direction {
        match self {
            Command::Next => Direction::Forward,
            Command::Previous => Direction::Backward,
            Command::GoTo(_) | Command::First | Command::Last => {
                if to >= from {
                    Direction::Forward
                } else {
                    Direction::Backward
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_next_still_reads_forward() {
        assert_eq!(Command::Next.direction(6, 0), Direction::Forward);
        assert_eq!(Command::Previous.direction(0, 6), Direction::Backward);
    }

    #[test]
    fn jumps_follow_index_order() {
        assert_eq!(Command::GoTo(4).direction(1, 4), Direction::Forward);
        assert_eq!(Command::GoTo(1).direction(4, 1), Direction::Backward);
        assert_eq!(Command::First.direction(3, 0), Direction::Backward);
        assert_eq!(Command::Last.direction(3, 6), Direction::Forward);
    }
}
