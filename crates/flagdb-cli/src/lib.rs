//! flagdb-cli
//! ==========
//!
//! Command-line interface for the `flagdb-core` flag catalog.
//!
//! The binary (`flagdb`) is the primary deliverable; the library target
//! holds its argument definitions and command handlers so they can be
//! tested without spawning a process.
//!
//! Basic usage:
//!
//! ```text
//! flagdb --help
//! flagdb stats
//! flagdb show fr
//! flagdb filter --color white --color red --continent europe
//! flagdb slideshow --random 5 --seed 42
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`flagdb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod commands;
