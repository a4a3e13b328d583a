//! "m:ss" phase markers used to seek into the analyzed video.

/// Parse an "m:ss" marker into whole seconds.
pub fn parse_timecode(marker: &str) -> Result<u32, TimecodeError> {
    let (mins, secs) = marker
        .split_once(':')
        .ok_or_else(|| TimecodeError::Malformed(marker.to_string()))?;
    let mins: u32 = mins
        .trim()
        .parse()
        .map_err(|_| TimecodeError::Malformed(marker.to_string()))?;
    let secs: u32 = secs
        .trim()
        .parse()
        .map_err(|_| TimecodeError::Malformed(marker.to_string()))?;
    if secs >= 60 {
        return Err(TimecodeError::SecondsOutOfRange(marker.to_string()));
    }
    Ok(mins * 60 + secs)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("invalid timecode '{0}': expected m:ss")]
    Malformed(String),
    #[error("invalid timecode '{0}': seconds must be below 60")]
    SecondsOutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minutes_and_seconds() {
        assert_eq!(parse_timecode("0:00"), Ok(0));
        assert_eq!(parse_timecode("0:07"), Ok(7));
        assert_eq!(parse_timecode("1:30"), Ok(90));
        assert_eq!(parse_timecode("12:05"), Ok(725));
    }

    #[test]
    fn test_rejects_malformed_markers() {
        assert!(matches!(
            parse_timecode("90"),
            Err(TimecodeError::Malformed(_))
        ));
        assert!(matches!(
            parse_timecode("a:b"),
            Err(TimecodeError::Malformed(_))
        ));
        assert!(matches!(
            parse_timecode("1:75"),
            Err(TimecodeError::SecondsOutOfRange(_))
        ));
    }
}
