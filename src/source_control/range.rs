/// An inclusive, 1-based range of lines in a file.
///
/// `start <= end` always holds; [`LineRange::new`] orders its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    #[must_use]
    pub fn new(first: u32, second: u32) -> Self {
        Self {
            start: first.min(second),
            end: first.max(second),
        }
    }

    #[must_use]
    pub fn single(line: u32) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    #[must_use]
    pub fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> u32 {
        self.end
    }

    #[must_use]
    pub fn is_single(self) -> bool {
        self.start == self.end
    }
}
