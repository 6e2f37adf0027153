//! Read-only report projections over a built chart.
//!
//! Nothing here computes chart semantics; every function walks a
//! [`natalis_chart::Chart`] and shapes it for display: per-house
//! occupancy rows, sign-grouped table rows with the house-boundary
//! marker, the boundary footnote, and formatted position lines.

pub mod positions;
pub mod summary;

pub use positions::{ascendant_line, position_lines};
pub use summary::{
    HouseRow, SignCell, SignRow, boundary_note, house_summary, moved_bodies, sign_rows,
};
