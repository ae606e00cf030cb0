// Local edit state for a generated profile. Single-owner, synchronous; nothing here
// does I/O or holds state beyond the form instance that owns it.

pub mod email;
pub mod list;
pub mod service_lines;
pub mod session;
