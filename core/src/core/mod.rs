pub mod config;
pub mod drop_output;
pub mod git;
pub mod repo;
pub mod stash;
pub mod working_tree;
