/// A grid cell as (row, column)
pub type Cell = (usize, usize);

/// Grid dimensions as (rows, columns)
pub type GridSize = (usize, usize);

/// Parse a grid size such as `5x7`
pub fn parse_grid_size(s: &str) -> std::result::Result<GridSize, String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{}'", s))?;
    let rows = parse_dimension(rows)?;
    let cols = parse_dimension(cols)?;
    Ok((rows, cols))
}

/// Parse a cell such as `2,3`
pub fn parse_cell(s: &str) -> std::result::Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    Ok((row, col))
}

fn parse_dimension(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("grid dimensions must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid grid dimension '{}': {}", s, e)),
    }
}
