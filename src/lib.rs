pub mod cli;
pub mod commands;
pub mod error;
pub mod fs_util;
pub mod git;
pub mod hooks;
pub mod installer;
