//! Deterministic decoration of heap-analysis report pages.
//!
//! A [`Page`] parses report HTML into an in-memory DOM and applies the
//! page's load-time passes: tree indentation codes become glyph images,
//! result tables get alternating row colors, and marked lists become
//! collapsible. Clicks can then be dispatched to the toggle icons and the
//! result inspected or serialized.

use std::collections::{HashMap, VecDeque};

mod config;
mod core_dom_utils;
mod core_impl;
mod page_api;
mod runtime_state;
mod selector;

pub use config::{DomCapabilities, IconNames, Markers, PageConfig, StripeColors};
pub use core_dom_utils::{Error, Result};
pub use page_api::{DecorationReport, Page};
pub use runtime_state::ToggleState;

pub(crate) use config::*;
pub(crate) use core_dom_utils::*;
pub(crate) use core_impl::*;
pub(crate) use runtime_state::*;
pub(crate) use selector::*;
