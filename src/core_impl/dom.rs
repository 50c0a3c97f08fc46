use super::html::is_void_tag;
use super::*;

mod content;
mod mutation;
mod nodes;
mod selector_matching;
mod style;
mod traversal;
