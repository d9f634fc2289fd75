//! Line-based prompting for interactive play

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};

/// Print `query` and read one trimmed line; `None` once input is exhausted
pub fn prompt<R, W>(input: &mut R, output: &mut W, query: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{query}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse "row col" (also "row,col") into a coordinate pair.
///
/// Range checks are left to the board so the error names the position.
pub fn parse_coordinates(line: &str) -> Result<(usize, usize)> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(anyhow!("expected two numbers 'row col', got '{line}'"));
    };
    let row = row
        .parse()
        .map_err(|_| anyhow!("row '{row}' is not a number"))?;
    let col = col
        .parse()
        .map_err(|_| anyhow!("column '{col}' is not a number"))?;
    Ok((row, col))
}
