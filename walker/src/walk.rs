use anyhow::{Context, Result};
use ndspace_cursor::{Extents, Position};
use serde::Deserialize;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub direction: WalkDirection,
    /// Linear index to start at. Without one, the walk starts at the first (forward) or last
    /// (backward) position.
    pub start: Option<i64>,
    /// Maximum number of positions to visit.
    pub limit: Option<u64>,
}

/// Walk through `extents` and call `visit` for every position passed, including the starting one.
///
/// Returns the number of visited positions.
pub fn walk(
    extents: &Extents,
    walk: &Walk,
    mut visit: impl FnMut(&Position<'_>) -> Result<()>,
) -> Result<u64> {
    let mut position = extents.create_position();
    match walk.start {
        Some(start) => position
            .set_index(start)
            .with_context(|| format!("Invalid start index {start}"))?,
        None => step(&mut position, walk.direction)?,
    }

    let mut visited = 0;
    while walk.limit.is_none_or(|limit| visited < limit) {
        visit(&position)?;
        visited += 1;

        let more = match walk.direction {
            WalkDirection::Forward => position.has_next(),
            WalkDirection::Backward => position.has_prev(),
        };
        if !more {
            break;
        }
        step(&mut position, walk.direction)?;
    }

    Ok(visited)
}

fn step(position: &mut Position<'_>, direction: WalkDirection) -> Result<()> {
    match direction {
        WalkDirection::Forward => position.fwd()?,
        WalkDirection::Backward => position.bck()?,
    }
    Ok(())
}
