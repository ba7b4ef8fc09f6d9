//! Low-level SQL string representation: fragment buffers, the per-compilation
//! parameter collector, and the compiled statement handed to the execution
//! boundary.

pub mod sql;
