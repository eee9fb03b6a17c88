//! Beantheory: a thin web front end for a seminar and conference
//! listing site.
//!
//! The interesting part lives in [`forms`], a small declarative widget
//! library for building HTML search forms with distinct browse and
//! refine layouts. The rest is glue: routes, hand-rolled page
//! templates, a health check, and a git-metadata banner.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod git_info;
pub mod knowls;
pub mod server;

/// Release string displayed in the page footer.
pub const BEANTHEORY_VERSION: &str = "Beantheory Release 0.1";
