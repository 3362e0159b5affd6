//! Small filesystem helpers shared by the library and the binary.

pub mod paths;
