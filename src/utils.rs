use crate::engine::{Board, N};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, top to bottom. Exactly `N` rows of `N`
/// characters are required; the valid characters are the digits `'1'..='9'`,
/// with `'9'` denoting the blank. The parsed board is validated to be a
/// permutation of `1..=9`.
///
/// # Arguments
/// * `s`: a slice of `N` string slices, each `N` characters long.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(String)` if the row count or a row length is wrong, a character is
///   not a digit in `1..=9`, or the layout is not a permutation of `1..=9`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
/// use eight_puzzle_solver::engine::{Board, BLANK};
///
/// let board = board_from_str_array(&["123", "456", "789"]).unwrap();
/// assert_eq!(board, Board::goal());
/// assert_eq!(board.tile(2, 2), BLANK);
///
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// assert!(board_from_str_array(&["123", "456", "78X"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() != N {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            N,
            s.len()
        ));
    }

    let mut grid = [[0u8; N]; N];

    for (r, row_str) in s.iter().enumerate() {
        let chars: Vec<char> = row_str.chars().collect();
        if chars.len() != N {
            return Err(format!(
                "Row {} has {} characters (expected {})",
                r,
                chars.len(),
                N
            ));
        }

        for (c, ch) in chars.into_iter().enumerate() {
            grid[r][c] = match ch.to_digit(10) {
                Some(d @ 1..=9) => d as u8,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            };
        }
    }

    let board = Board::from_grid(grid);
    board.validate()?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BLANK;

    #[test]
    fn test_parse_goal_layout() {
        let board = board_from_str_array(&["123", "456", "789"]).unwrap();
        assert_eq!(board, Board::goal());
    }

    #[test]
    fn test_parse_blank_anywhere() {
        let board = board_from_str_array(&["192", "345", "678"]).unwrap();
        assert_eq!(board.tile(0, 1), BLANK);
        assert_eq!(board.blank_position(), Ok((0, 1)));
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        let result = board_from_str_array(&["123", "456"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let result = board_from_str_array(&["123", "45", "789"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 1 has 2 characters"));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let result = board_from_str_array(&["123", "456", "78X"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character 'X'"));
    }

    #[test]
    fn test_parse_rejects_zero_digit() {
        // '0' is a digit but not a tile value.
        let result = board_from_str_array(&["120", "456", "789"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_tiles() {
        let result = board_from_str_array(&["123", "455", "789"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("more than once"));
    }
}
