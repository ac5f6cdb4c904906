//! Reading seat layouts from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use seatsim_grid::Grid;

/// Read and parse the layout file at `path`.
///
/// Trailing newlines are ignored; any malformed row is reported with the
/// file name attached.
pub fn load_layout(path: impl AsRef<Path>) -> anyhow::Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read seat layout {}", path.display()))?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("failed to parse seat layout {}", path.display()))?;
    let (rows, cols) = grid.dimensions();
    tracing::info!(path = %path.display(), rows, cols, "loaded seat layout");
    Ok(grid)
}
