use std::iter::FusedIterator;

use super::Path;

/// A lazy iterator over the segments of a [`Path`].
///
/// Segments are yielded as slices of the path's own string, without allocating. Every segment
/// keeps its trailing separator if it has one, so concatenating all yielded segments in order
/// reconstructs the path exactly.
///
/// # Examples
/// ```rust
/// # use dirpath::path::Path;
/// let path = Path::from("/Foo/Bar");
/// let segments: Vec<&str> = path.segments().collect();
/// assert_eq!(segments, ["/", "Foo/", "Bar"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    pub(crate) path: &'a str,
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head >= self.tail {
            return None;
        }
        let end = match self.path[self.head..self.tail].find('/') {
            Some(sep) => self.head + sep + 1,
            None => self.tail,
        };
        let segment = &self.path[self.head..end];
        self.head = end;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.tail - self.head;
        if bytes == 0 {
            (0, Some(0))
        } else {
            // Every remaining segment covers at least one byte.
            (1, Some(bytes))
        }
    }
}

impl<'a> DoubleEndedIterator for Segments<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head >= self.tail {
            return None;
        }
        // Skip the region's trailing separator, if any, so that the scan finds the start of the
        // last segment rather than its end.
        let scan_end = if self.path.as_bytes()[self.tail - 1] == b'/' {
            self.tail - 1
        } else {
            self.tail
        };
        let start = match self.path[self.head..scan_end].rfind('/') {
            Some(sep) => self.head + sep + 1,
            None => self.head,
        };
        let segment = &self.path[start..self.tail];
        self.tail = start;
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

/// A bidirectional cursor over the segments of a path string.
///
/// Unlike [`Segments`], a cursor can change direction at any point and reports its position both
/// as a byte offset and as a segment index. Movement saturates at either end of the path instead
/// of failing.
///
/// A cursor borrows the path it walks, so mutating the path first requires dropping the cursor.
///
/// # Examples
/// ```rust
/// # use dirpath::path::Path;
/// let path = Path::from("Foo/Bar");
/// let mut cursor = path.cursor_front();
/// assert_eq!(cursor.segment(), "Foo/");
/// cursor.move_next();
/// assert_eq!(cursor.segment(), "Bar");
/// cursor.move_prev();
/// assert!(cursor.at_front());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    pub(crate) path: &'a str,
    pub(crate) pos: usize,
}

impl<'a> Cursor<'a> {
    /// Returns the segment under the cursor, keeping its trailing separator if it has one.
    ///
    /// Returns an empty string if the cursor has moved past the final segment.
    pub fn segment(&self) -> &'a str {
        if self.pos >= self.path.len() {
            return "";
        }
        match self.path[self.pos..].find('/') {
            Some(sep) => &self.path[self.pos..self.pos + sep + 1],
            None => &self.path[self.pos..],
        }
    }

    /// Moves the cursor to the next segment, stopping past the final segment.
    pub fn move_next(&mut self) -> &mut Self {
        match self.path[self.pos..].find('/') {
            Some(sep) => self.pos += sep + 1,
            None => self.pos = self.path.len(),
        }
        self
    }

    /// Moves the cursor to the previous segment, stopping at the first.
    pub fn move_prev(&mut self) -> &mut Self {
        if self.pos < 2 {
            self.pos = 0;
        } else {
            // Start the backward scan one byte early to skip the trailing separator of the
            // segment the cursor is leaving.
            self.pos = match self.path.as_bytes()[..self.pos - 1]
                .iter()
                .rposition(|byte| *byte == b'/')
            {
                Some(sep) => sep + 1,
                None => 0,
            };
        }
        self
    }

    /// Returns true if the cursor is on the first segment.
    pub const fn at_front(&self) -> bool {
        self.pos == 0
    }

    /// Returns true if the cursor has moved past the final segment.
    pub const fn at_end(&self) -> bool {
        self.pos >= self.path.len()
    }

    /// Returns the cursor's position as a byte offset into the path's string.
    pub const fn byte_pos(&self) -> usize {
        self.pos
    }

    /// Returns the index of the segment under the cursor, counting from the front of the path.
    ///
    /// Equal to the path's segment count when the cursor has moved past the final segment.
    pub fn index(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.path.as_bytes()[..self.pos - 1]
                .iter()
                .filter(|byte| **byte == b'/')
                .count()
                + 1
        }
    }

    /// Returns true if the segment under the cursor refers to the current directory.
    pub fn is_current_dir(&self) -> bool {
        matches!(self.segment(), "." | "./")
    }

    /// Returns true if the segment under the cursor refers to the parent directory.
    pub fn is_parent_dir(&self) -> bool {
        matches!(self.segment(), ".." | "../")
    }
}
