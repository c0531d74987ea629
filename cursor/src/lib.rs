//! Bounded N-dimensional index spaces and the cursors that walk them.
//!
//! An [`Extents`] describes a closed rectangular region of integer coordinates. A [`Position`] is
//! a cursor over one `Extents` that can step through it in linear-index order (dimension 0 varies
//! fastest), jump to a linear index, or be addressed coordinate by coordinate.

mod coordinate;
mod error;
mod extents;
mod position;
mod positions;

pub use coordinate::*;
pub use error::*;
pub use extents::*;
pub use position::*;
pub use positions::*;

use static_assertions::assert_impl_all;

pub trait Contains<Other> {
    fn contains(&self, other: Other) -> bool;
}

// Many positions may read one extents from different threads.
assert_impl_all!(Extents: Send, Sync, Clone);
assert_impl_all!(Position<'static>: Send, Sync, Clone);
