use std::borrow::Borrow;
use std::ops::{Add, AddAssign};

use crate::util::result::ResultExtension;

use super::error::{AbsoluteAppendError, NoParentError};
use super::iter::{Cursor, Segments};
use super::normalize;

/// A directory path held as a single string in canonical form.
///
/// A path is a sequence of segments separated by `/`, either relative or anchored at a root. It
/// never touches a filesystem: paths are plain values, compared and combined as strings.
///
/// # Invariants
/// The held string is canonical at all times:
/// - `/` is the only separator, and separators never repeat.
/// - No segment refers to the current directory, and parent references only survive as a run at
///   the front of a relative path.
/// - The string ends with a separator only when it is exactly a root.
///
/// Every constructor and mutation re-establishes this form, so two paths which name the same
/// location through different spellings compare equal.
///
/// # Examples
/// ```rust
/// # use dirpath::path::Path;
/// let path = Path::from("C:\\Foo\\.\\Bar\\..\\Baz");
/// assert_eq!(path, "C:/Foo/Baz");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    pub(crate) inner: String,
}

impl Path {
    /// Constructs a new, empty path.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::Path;
    /// let path = Path::new();
    /// assert!(path.is_empty());
    /// ```
    pub const fn new() -> Path {
        Path {
            inner: String::new(),
        }
    }

    /// Returns the path's canonical string.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of segments in the path.
    ///
    /// A root counts as one segment, so `/Foo/Bar` has three segments while `Foo/Bar` has two.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::Path;
    /// assert_eq!(Path::from("/Foo/Bar").len(), 3);
    /// assert_eq!(Path::from("Foo/Bar").len(), 2);
    /// assert_eq!(Path::from("/").len(), 1);
    /// assert_eq!(Path::new().len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else if self.is_root() {
            1
        } else {
            self.separator_count() + 1
        }
    }

    /// Returns true if the path consists of exactly a root.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::Path;
    /// assert!(Path::from("/").is_root());
    /// assert!(Path::from("C:/").is_root());
    /// assert!(!Path::from("/Foo").is_root());
    /// ```
    pub fn is_root(&self) -> bool {
        normalize::root_len(&self.inner) == Some(self.inner.len())
    }

    /// Returns true if the path starts with a root.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::Path;
    /// assert!(Path::from("/Foo/Bar").is_absolute());
    /// assert!(Path::from("C:/Foo").is_absolute());
    /// assert!(!Path::from("Foo/Bar").is_absolute());
    /// ```
    pub fn is_absolute(&self) -> bool {
        normalize::root_len(&self.inner).is_some()
    }

    /// Returns true if the path doesn't start with a root.
    ///
    /// The empty path counts as relative.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Removes all segments from the path.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Appends `rhs` to the path, segment by segment.
    ///
    /// Appending onto an empty path copies `rhs` in whole, including a root. Otherwise `rhs`
    /// must be relative, and parent references at its front ascend out of the existing content:
    /// each one cancels the final segment, stopping at a root and accumulating at the front once
    /// a relative path has nothing left to cancel.
    ///
    /// Equivalent to [`insert`](Path::insert) at the path's segment count.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::{AbsoluteAppendError, Path};
    /// let mut path = Path::from("Foo/Bar");
    /// path.push_back(&Path::from("../Lol"))?;
    /// assert_eq!(path, "Foo/Lol");
    /// # Ok::<(), AbsoluteAppendError>(())
    /// ```
    pub fn push_back(&mut self, rhs: &Path) -> Result<(), AbsoluteAppendError> {
        self.insert(self.len(), rhs)
    }

    /// Removes the final segment of the path.
    ///
    /// Removing the final segment of a root leaves the path empty. Fails if the path is empty or
    /// is a single relative segment, as there is nothing above it to move to.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::{NoParentError, Path};
    /// let mut path = Path::from("/Foo/Bar");
    /// path.pop_back()?;
    /// assert_eq!(path, "/Foo");
    /// path.pop_back()?;
    /// assert_eq!(path, "/");
    /// # Ok::<(), NoParentError>(())
    /// ```
    pub fn pop_back(&mut self) -> Result<(), NoParentError> {
        if self.is_root() {
            self.inner.clear();
            return Ok(());
        }
        match self.inner.rfind('/') {
            Some(sep) => {
                self.inner.truncate(sep + 1);
                normalize::canonicalize(&mut self.inner);
                self.debug_check();
                Ok(())
            }
            None => Err(NoParentError),
        }
    }

    /// Inserts `rhs` into the path so that its first segment lands at `index`, shifting later
    /// segments towards the back. An `index` equal to the path's segment count appends.
    ///
    /// Inserting into an empty path copies `rhs` in whole, including a root. Otherwise `rhs`
    /// must be relative. The result is re-normalized as a whole, so inserted parent references
    /// reduce against the segments in front of them.
    ///
    /// # Panics
    /// Panics if `index` is greater than the path's segment count.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::{AbsoluteAppendError, Path};
    /// let mut path = Path::from("Foo/Bar");
    /// path.insert(1, &Path::from("Mid"))?;
    /// assert_eq!(path, "Foo/Mid/Bar");
    /// # Ok::<(), AbsoluteAppendError>(())
    /// ```
    pub fn insert(&mut self, index: usize, rhs: &Path) -> Result<(), AbsoluteAppendError> {
        let count = self.len();
        assert!(
            index <= count,
            "index {} out of bounds for path with {} segments",
            index,
            count
        );
        if self.is_empty() {
            // An empty path has no content for a root in rhs to conflict with.
            self.inner.push_str(rhs.as_str());
            return Ok(());
        }
        if rhs.is_absolute() {
            return Err(AbsoluteAppendError);
        }
        let at = self.segment_offset(index);
        if at == self.inner.len() {
            if !self.inner.ends_with('/') {
                self.inner.push('/');
            }
            self.inner.push_str(rhs.as_str());
        } else {
            self.inner.insert(at, '/');
            self.inner.insert_str(at, rhs.as_str());
        }
        normalize::canonicalize(&mut self.inner);
        self.debug_check();
        Ok(())
    }

    /// Removes the segment at `index` and returns it, keeping its trailing separator if it had
    /// one. The rest of the path is re-normalized as a whole.
    ///
    /// Removing a root turns the remainder into a relative path.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```rust
    /// # use dirpath::path::Path;
    /// let mut path = Path::from("/Foo/Bar");
    /// assert_eq!(path.remove(0), "/");
    /// assert_eq!(path, "Foo/Bar");
    /// ```
    pub fn remove(&mut self, index: usize) -> String {
        let count = self.len();
        assert!(
            index < count,
            "index {} out of bounds for path with {} segments",
            index,
            count
        );
        let start = self.segment_offset(index);
        let end = start
            + Cursor {
                path: &self.inner,
                pos: start,
            }
            .segment()
            .len();
        let removed = String::from(&self.inner[start..end]);
        self.inner.replace_range(start..end, "");
        normalize::canonicalize(&mut self.inner);
        self.debug_check();
        removed
    }

    /// Returns a lazy iterator over the path's segments.
    ///
    /// See [`Segments`] for the exact form the segments take.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            path: &self.inner,
            head: 0,
            tail: self.inner.len(),
        }
    }

    /// Returns a cursor over the path's segments, positioned on the first.
    ///
    /// If the path is empty, the cursor starts past the end.
    pub fn cursor_front(&self) -> Cursor<'_> {
        Cursor {
            path: &self.inner,
            pos: 0,
        }
    }

    /// Returns a cursor over the path's segments, positioned on the last.
    pub fn cursor_back(&self) -> Cursor<'_> {
        let mut cursor = Cursor {
            path: &self.inner,
            pos: self.inner.len(),
        };
        cursor.move_prev();
        cursor
    }

    /// Converts a segment index into the byte offset of that segment's start. An index equal to
    /// the segment count maps to the end of the string.
    fn segment_offset(&self, index: usize) -> usize {
        let mut cursor = self.cursor_front();
        for _ in 0..index {
            cursor.move_next();
        }
        cursor.byte_pos()
    }

    fn separator_count(&self) -> usize {
        self.inner
            .as_bytes()
            .iter()
            .filter(|byte| **byte == b'/')
            .count()
    }

    fn debug_check(&self) {
        debug_assert!(
            normalize::is_canonical(&self.inner),
            "path left canonical form: {:?}",
            self.inner
        );
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Path {
        Path::from(String::from(value))
    }
}

impl From<String> for Path {
    fn from(mut value: String) -> Path {
        normalize::canonicalize(&mut value);
        Path { inner: value }
    }
}

impl From<Path> for String {
    fn from(value: Path) -> String {
        value.inner
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    /// Concatenates two paths without modifying either.
    ///
    /// # Panics
    /// Panics if `rhs` is absolute while `self` has content, with the message of
    /// [`AbsoluteAppendError`].
    fn add(self, rhs: &Path) -> Path {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add<&Path> for Path {
    type Output = Path;

    /// Concatenates two paths, consuming the left-hand one.
    ///
    /// # Panics
    /// Panics if `rhs` is absolute while `self` has content, with the message of
    /// [`AbsoluteAppendError`].
    fn add(mut self, rhs: &Path) -> Path {
        self += rhs;
        self
    }
}

impl AddAssign<&Path> for Path {
    /// Appends `rhs` to the path via [`push_back`](Path::push_back).
    ///
    /// # Panics
    /// Panics if `rhs` is absolute while the path has content, with the message of
    /// [`AbsoluteAppendError`].
    fn add_assign(&mut self, rhs: &Path) {
        self.push_back(rhs).throw();
    }
}
