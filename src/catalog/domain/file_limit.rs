use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Selection policy for the file collector: every file, or the first N
/// files in walk order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLimit {
    #[default]
    All,
    First(NonZeroUsize),
}

impl FileLimit {
    pub fn first(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(FileLimit::First)
    }

    /// Truncates `items` in place according to this policy
    pub fn apply<T>(&self, items: &mut Vec<T>) {
        if let FileLimit::First(n) = self {
            items.truncate(n.get());
        }
    }
}

impl FromStr for FileLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(FileLimit::All);
        }

        trimmed
            .parse::<usize>()
            .ok()
            .and_then(FileLimit::first)
            .ok_or_else(|| {
                format!(
                    "Invalid file count: {}. Please specify a positive number or 'all'",
                    s
                )
            })
    }
}

impl fmt::Display for FileLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileLimit::All => write!(f, "all"),
            FileLimit::First(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_case_insensitive() {
        assert_eq!(FileLimit::from_str("all").unwrap(), FileLimit::All);
        assert_eq!(FileLimit::from_str("ALL").unwrap(), FileLimit::All);
    }

    #[test]
    fn test_parse_presets() {
        for preset in ["5", "10", "15"] {
            assert!(FileLimit::from_str(preset).is_ok());
        }
        assert_eq!(FileLimit::from_str("10").unwrap(), FileLimit::first(10).unwrap());
    }

    #[test]
    fn test_parse_rejects_zero_and_garbage() {
        assert!(FileLimit::from_str("0").is_err());
        assert!(FileLimit::from_str("-3").is_err());
        let err = FileLimit::from_str("many").unwrap_err();
        assert!(err.contains("Invalid file count"));
    }

    #[test]
    fn test_apply_truncates() {
        let mut items = vec![1, 2, 3, 4, 5];
        FileLimit::first(2).unwrap().apply(&mut items);
        assert_eq!(items, vec![1, 2]);

        let mut items = vec![1, 2, 3];
        FileLimit::All.apply(&mut items);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileLimit::All.to_string(), "all");
        assert_eq!(FileLimit::first(15).unwrap().to_string(), "15");
    }
}
