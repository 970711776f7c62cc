//! Route handlers. Each returns an HTML fragment (or a `<script>` snippet)
//! for HTMX to swap into the page.

pub mod collection;
pub mod filters;
pub mod monsters;
pub mod render;
pub mod team;
pub mod theme;
pub mod util;
