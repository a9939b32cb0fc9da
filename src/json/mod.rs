//! Purpose: Internal JSON parsing boundary shared by the document and decode paths.
//! Exports: `parse` module with decode helpers.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
