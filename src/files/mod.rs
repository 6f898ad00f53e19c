//! Native file and message dialogs
//!
//! This module provides the rfd-backed implementations of the transfer's
//! path selector and dialog presenter.

pub mod dialogs;

pub use dialogs::{NativeDialogs, NativePathSelector};
