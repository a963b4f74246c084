pub mod mirror;

pub use mirror::{JobsMirror, MirrorScope, MirrorSnapshot, MirrorStatus};
