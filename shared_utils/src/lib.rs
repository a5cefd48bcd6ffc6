//! Small helpers shared by the workspace members.

pub mod env;
