use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use super::{JaggedGrid, ParseConfig};
use crate::GridError;

impl<T> JaggedGrid<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Reads a grid with one row per line.
    ///
    /// A blank line is an empty row. Lines starting with the comment
    /// character are skipped and do not count as rows.
    ///
    /// # Errors
    /// [`GridError::Parse`] naming the 1-based line and column of the first
    /// cell that fails to parse.
    ///
    /// # Example
    /// ```
    /// use gridwalk::{GridError, JaggedGrid, ParseConfig};
    ///
    /// let config = ParseConfig::new(Some(','), Some('#'));
    /// let grid: JaggedGrid<u8> = JaggedGrid::parse_with_config("# header\n1,2\n\n3", &config).unwrap();
    /// assert_eq!(grid.rows(), &[vec![1, 2], vec![], vec![3]]);
    ///
    /// let err = JaggedGrid::<u8>::parse_with_config("1,x", &config).unwrap_err();
    /// assert!(matches!(err, GridError::Parse { line: 1, column: 2, .. }));
    /// ```
    pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if config.comment.is_some_and(|c| line.starts_with(c)) {
                continue;
            }
            rows.push(parse_row(line, index + 1, config)?);
        }
        debug!("Parsed {} rows", rows.len());
        Ok(Self::from_rows(rows))
    }
}

fn parse_row<T>(line: &str, line_number: usize, config: &ParseConfig) -> Result<Vec<T>, GridError>
where
    T: FromStr,
    T::Err: Display,
{
    if line.is_empty() {
        return Ok(Vec::new());
    }
    let cells: Vec<&str> = match config.separator {
        Some(separator) => line.split(separator).map(str::trim).collect(),
        None => line.split_whitespace().collect(),
    };
    cells
        .into_iter()
        .enumerate()
        .map(|(column, cell)| {
            cell.parse().map_err(|e: T::Err| GridError::Parse {
                line: line_number,
                column: column + 1,
                reason: format!("`{cell}`: {e}"),
            })
        })
        .collect()
}

/// Parses with [`ParseConfig::default`].
impl<T> FromStr for JaggedGrid<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_config(s, &ParseConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{make_grid, GridLike};
    use pretty_assertions::assert_eq;

    #[test]
    fn whitespace_separated_rows() {
        let grid: JaggedGrid<i64> = "10 20  30\n40\t50\n".parse().unwrap();
        assert_eq!(grid, make_grid![[10, 20, 30], [40, 50]]);
    }

    #[test]
    fn blank_lines_are_empty_rows() {
        let grid: JaggedGrid<i64> = "1 2\n\n   \n3".parse().unwrap();
        assert_eq!(grid, make_grid![[1, 2], [], [], [3]]);
        assert_eq!(grid.iter().count(), 3);
    }

    #[test]
    fn comments_are_not_rows() {
        let grid: JaggedGrid<u8> = "# a maze\n1\n  # indented comment\n2".parse().unwrap();
        assert_eq!(grid, make_grid![[1], [2]]);
    }

    #[test]
    fn comments_can_be_disabled() {
        let config = ParseConfig::new(None, None);
        let grid: JaggedGrid<String> = JaggedGrid::parse_with_config("# x", &config).unwrap();
        assert_eq!(grid.rows(), &[vec!["#".to_string(), "x".to_string()]]);
    }

    #[test]
    fn custom_separator_trims_cells() {
        let config = ParseConfig::new(Some(';'), None);
        let grid: JaggedGrid<i32> = JaggedGrid::parse_with_config(" 1 ; -2;3 ", &config).unwrap();
        assert_eq!(grid, make_grid![[1, -2, 3]]);
    }

    #[test]
    fn whitespace_separator_falls_back_to_any_whitespace() {
        let config = ParseConfig::new(Some(' '), None);
        assert_eq!(config.separator, None);
        let grid: JaggedGrid<i32> = JaggedGrid::parse_with_config("1   2", &config).unwrap();
        assert_eq!(grid, make_grid![[1, 2]]);
    }

    #[test]
    fn reports_where_parsing_failed() {
        let err = "1 2\n3 four".parse::<JaggedGrid<i32>>().unwrap_err();
        match err {
            GridError::Parse {
                line,
                column,
                reason,
            } => {
                assert_eq!((line, column), (2, 2));
                assert!(reason.starts_with("`four`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_cell_between_separators_is_an_error() {
        let config = ParseConfig::new(Some(','), None);
        assert!(JaggedGrid::<i32>::parse_with_config("1,,2", &config).is_err());
    }
}
