//! Planar set cover: points on a plane, grouped by polygons, covered greedily.
//!
//! The [`Engine`] is the session object. It owns the canonical [`PointStore`], the pending
//! polygon vertices and edges, the closed [`CoverSet`]s, the undo [`History`], and the
//! step-by-step [`CoverSelector`]. A view layer drives it and listens through a [`Notifier`].
use rustc_hash::FxHashSet as HashSet;
use std::fmt;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod autorun;
mod config;
mod engine;
mod extents;
mod generator;
mod history;
mod line;
mod notify;
mod point;
pub mod polygon;
mod selector;
mod set;
mod store;

pub use autorun::*;
pub use config::*;
pub use engine::*;
pub use extents::*;
pub use generator::*;
pub use history::*;
pub use line::*;
pub use notify::*;
pub use point::*;
pub use polygon::*;
pub use selector::*;
pub use set::*;
pub use store::*;

/// Test if an object lays _inside_ another.
pub trait Envelops<O> {
    fn envelops(&self, object: O) -> bool;
}

#[cfg(test)]
fn square(x: i32, y: i32, size: i32) -> Polygon {
    Polygon::from_vertices([
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ])
}
