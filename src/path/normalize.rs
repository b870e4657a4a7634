//! Canonicalization passes over raw path strings.
//!
//! Each pass rewrites the string in place. [`canonicalize`] chains them in a fixed order, and
//! every operation which can disturb a path's form funnels through it, so the canonical-form
//! rules live here and nowhere else.

use super::iter::Cursor;

/// Rewrites `s` into canonical form.
///
/// The passes run in order: separator substitution and collapsing, removal of current-directory
/// segments, reduction of parent-directory references, then the trailing-separator policy.
pub(crate) fn canonicalize(s: &mut String) {
    substitute_separators(s);
    strip_current_dir_segments(s);
    collapse_parent_refs(s);
    apply_trailing_policy(s);
}

/// Returns true if `s` is already in canonical form.
pub(crate) fn is_canonical(s: &str) -> bool {
    let mut copy = String::from(s);
    canonicalize(&mut copy);
    copy == s
}

/// Returns the byte length of the root prefix of `s`, if it starts with one.
///
/// A root is either a single leading separator or an ASCII drive letter followed by a colon and
/// a separator.
pub(crate) fn root_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'/') => Some(1),
        Some(drive)
            if drive.is_ascii_alphabetic()
                && bytes.get(1) == Some(&b':')
                && bytes.get(2) == Some(&b'/') =>
        {
            Some(3)
        }
        _ => None,
    }
}

/// Replaces backslash separators with forward slashes and collapses each run of separators down
/// to a single one.
fn substitute_separators(s: &mut String) {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_sep = false;
    for ch in s.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' {
            if !prev_was_sep {
                out.push('/');
            }
            prev_was_sep = true;
        } else {
            out.push(ch);
            prev_was_sep = false;
        }
    }
    *s = out;
}

/// Deletes every segment which refers to the current directory, along with its trailing
/// separator.
fn strip_current_dir_segments(s: &mut String) {
    let mut pos = 0;
    while pos < s.len() {
        let cursor = Cursor { path: s.as_str(), pos };
        let len = cursor.segment().len();
        if cursor.is_current_dir() {
            s.replace_range(pos..pos + len, "");
        } else {
            pos += len;
        }
    }
}

/// Reduces `Seg/..` pairs until none remain. After a deletion the scan resumes one segment back,
/// which catches pairs made adjacent by the deletion. A parent reference directly below the root
/// is swallowed, as the root has no parent to move to.
fn collapse_parent_refs(s: &mut String) {
    let mut cur_start = 0;
    loop {
        let cursor = Cursor { path: s.as_str(), pos: cur_start };
        let cur_end = cur_start + cursor.segment().len();
        if cur_end >= s.len() {
            break;
        }
        let cur_is_parent = cursor.is_parent_dir();
        let cur_is_root = cur_start == 0 && root_len(s.as_str()) == Some(cur_end);
        let next = Cursor { path: s.as_str(), pos: cur_end };
        let next_is_parent = next.is_parent_dir();
        let next_end = cur_end + next.segment().len();

        if next_is_parent && cur_is_root {
            s.replace_range(cur_end..next_end, "");
        } else if next_is_parent && !cur_is_parent {
            s.replace_range(cur_start..next_end, "");
            let mut back = Cursor { path: s.as_str(), pos: cur_start };
            back.move_prev();
            cur_start = back.byte_pos();
        } else {
            cur_start = cur_end;
        }
    }
}

/// Drops a trailing separator unless the path is exactly a root.
fn apply_trailing_policy(s: &mut String) {
    if root_len(s.as_str()) == Some(s.len()) {
        return;
    }
    if s.ends_with('/') {
        s.pop();
    }
}
