//! This crate is a small model of directory paths as plain strings.
//!
//! # Purpose
//! [`Path`](path::Path) owns a path string and keeps it in a canonical form through every
//! operation: `/` as the only separator, no current-directory segments and no reducible parent
//! references. The point is to have one value type which tooling code can compare, combine and
//! iterate without re-checking the string's shape at every step, and without dragging a real
//! filesystem into unit tests.
//!
//! # Method
//! Everything here works on the string alone. Nothing resolves symlinks, checks what exists on
//! disk or asks the OS for an interpretation; a path naming a file that doesn't exist is still a
//! perfectly good value. Any operation which could disturb the canonical form re-runs the same
//! normalization that construction applies, so the rules live in one place rather than being
//! patched into each operation separately.
//!
//! Iteration borrows segments straight out of the path's own string. A pleasant side effect is
//! that the borrow checker rules out mutating a path mid-iteration, which I would otherwise have
//! to detect at runtime.
//!
//! # Error Handling
//! Operations which can fail on reasonable inputs (appending an absolute path, ascending out of
//! a path with no parent) return strongly typed [`Result`]s, with structs (ZSTs) that implement
//! [`Error`](std::error::Error) and an enum combining them for static dispatch. Index-based
//! operations panic on misuse instead, the same way std's collections do. The concatenation
//! operators panic where the methods they wrap would return an error, because an operator has no
//! way to surface a [`Result`].
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
//!
//! # Potential Future Additions
//! - File name and extension accessors
//! - Computing one path relative to another
//! - A borrowed path slice type, mirroring `String` / `str`
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod path;

pub(crate) mod util;
