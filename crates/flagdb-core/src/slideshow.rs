// crates/flagdb-core/src/slideshow.rs
use crate::model::FlagRecord;
use serde::Serialize;

/// Direction of the most recent move, used by front ends to pick the
/// slide-in side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// A wrapping cursor over an ordered list of flags.
///
/// Moving past either end wraps around. An empty slideshow has no current
/// flag and every move returns `None`.
///
/// ```rust
/// use flagdb_core::{FlagCatalog, Slideshow};
///
/// let catalog = FlagCatalog::bundled().unwrap();
/// let mut show = Slideshow::new(&catalog);
///
/// let first = show.current().unwrap().code.clone();
/// show.go_prev();
/// show.go_next();
/// assert_eq!(show.current().unwrap().code, first);
/// ```
#[derive(Debug, Clone)]
pub struct Slideshow<'a> {
    flags: Vec<&'a FlagRecord>,
    index: usize,
    direction: Direction,
    autoplay: bool,
}

impl<'a> Slideshow<'a> {
    pub fn new<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = &'a FlagRecord>,
    {
        Self {
            flags: flags.into_iter().collect(),
            index: 0,
            direction: Direction::Forward,
            autoplay: false,
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn current(&self) -> Option<&'a FlagRecord> {
        self.flags.get(self.index).copied()
    }

    /// Zero-based index of the current slide.
    pub fn position(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn go_next(&mut self) -> Option<&'a FlagRecord> {
        if self.is_empty() {
            return None;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.flags.len();
        self.current()
    }

    pub fn go_prev(&mut self) -> Option<&'a FlagRecord> {
        if self.is_empty() {
            return None;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.flags.len() - 1) % self.flags.len();
        self.current()
    }

    /// Moves to the flag with `code` (case-insensitive). The cursor stays put
    /// when the code is not in this slideshow.
    pub fn jump_to(&mut self, code: &str) -> Option<&'a FlagRecord> {
        let code = code.trim();
        let target = self
            .flags
            .iter()
            .position(|f| f.code.eq_ignore_ascii_case(code))?;
        self.direction = if target >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        self.current()
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        self.autoplay
    }

    /// Called once per [`SLIDESHOW_AUTO_INTERVAL`](crate::common::SLIDESHOW_AUTO_INTERVAL);
    /// advances only while autoplay is on.
    pub fn tick(&mut self) -> Option<&'a FlagRecord> {
        if self.autoplay {
            self.go_next()
        } else {
            self.current()
        }
    }
}
