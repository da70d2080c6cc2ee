use std::ops::Range;

/// A selection inside a field, in UTF-16 code units.
///
/// `start <= end` always holds; an empty selection is a caret. The fields
/// are private so every selection goes through [`Selection::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Selection {
  start: usize,
  end:   usize,
}

impl Selection {
  #[must_use]
  pub const fn new(anchor: usize, head: usize) -> Self {
    if anchor <= head {
      Self {
        start: anchor,
        end:   head,
      }
    } else {
      Self {
        start: head,
        end:   anchor,
      }
    }
  }

  #[must_use]
  pub const fn caret(pos: usize) -> Self {
    Self {
      start: pos,
      end:   pos,
    }
  }

  #[must_use]
  pub const fn start(&self) -> usize {
    self.start
  }

  #[must_use]
  pub const fn end(&self) -> usize {
    self.end
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.start == self.end
  }

  #[must_use]
  pub const fn len(&self) -> usize {
    self.end - self.start
  }

  /// Whether the selection fits inside a text of `len` code units.
  #[must_use]
  pub const fn fits(&self, len: usize) -> bool {
    self.end <= len
  }

  #[must_use]
  pub const fn as_range(&self) -> Range<usize> {
    self.start..self.end
  }
}

impl From<Range<usize>> for Selection {
  fn from(range: Range<usize>) -> Self {
    Self::new(range.start, range.end)
  }
}

impl From<(usize, usize)> for Selection {
  fn from((start, end): (usize, usize)) -> Self {
    Self::new(start, end)
  }
}

#[cfg(test)]
mod test {
  use super::Selection;

  #[test]
  fn endpoints_are_ordered() {
    let selection = Selection::new(3, 1);
    assert_eq!((selection.start(), selection.end()), (1, 3));
    assert_eq!(selection.len(), 2);
    assert_eq!(Selection::from(2..5), Selection::new(5, 2));
    assert_eq!(Selection::from((4, 0)), Selection::new(0, 4));
  }
}
