/// Configuration for reading grids from text.
///
/// # Example
/// ```
/// use gridwalk::ParseConfig;
///
/// let config = ParseConfig::default();
/// assert_eq!(config.separator, None);
/// assert_eq!(config.comment, Some('#'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Cell separator (default: any whitespace)
    pub separator: Option<char>,
    /// Lines starting with this character are skipped (default: `#`)
    pub comment: Option<char>,
}

impl ParseConfig {
    /// Creates a new `ParseConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use gridwalk::ParseConfig;
    ///
    /// let config = ParseConfig::new(Some(','), None);
    /// assert_eq!(config.separator, Some(','));
    /// assert_eq!(config.comment, None);
    /// ```
    pub fn new(separator: Option<char>, comment: Option<char>) -> Self {
        Self {
            // Whitespace is already the fallback; an explicit whitespace separator would
            // turn runs of spaces into empty cells.
            separator: separator.filter(|c| !c.is_whitespace()),
            comment,
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig::new(None, Some(DEFAULT_COMMENT))
    }
}

const DEFAULT_COMMENT: char = '#';
