use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a thread count constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_usize() {
        assert_eq!(parse_positive_usize("1024"), Ok(1024));
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("-3").is_err());
        assert!(parse_positive_usize("many").is_err());
    }

    #[test]
    fn test_jobs_bounds() {
        assert_eq!(parse_jobs("1"), Ok(1));
        assert_eq!(parse_jobs("512"), Ok(512));
        assert_eq!(
            parse_jobs("513"),
            Err("value must be at most 512".to_string())
        );
        assert_eq!(parse_jobs("0"), Err("value must be at least 1".to_string()));
    }
}
