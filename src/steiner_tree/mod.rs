pub mod algorithms;
pub(crate) mod tree;
