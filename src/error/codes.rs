/// Error code registry for appagenda
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input (schedule, metadata, plenary, roster) errors
/// - 3000-3999: Output (sink) errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_MISSING_REQUIRED: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_SCHEDULE_MALFORMED: u16 = 2002;
    pub const INPUT_METADATA_MALFORMED: u16 = 2003;
    pub const INPUT_PLENARY_MALFORMED: u16 = 2004;
    pub const INPUT_ROSTER_MALFORMED: u16 = 2005;
    pub const INPUT_IO_ERROR: u16 = 2006;

    // Output errors (3000-3999)
    pub const OUTPUT_IO_ERROR: u16 = 3001;
    pub const OUTPUT_PERMISSION_DENIED: u16 = 3002;
    pub const OUTPUT_CSV_ERROR: u16 = 3003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_YAML => "Invalid YAML syntax in configuration",
        ErrorCode::CONFIG_MISSING_REQUIRED => "Required configuration field missing",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",

        ErrorCode::INPUT_GENERIC => "General input error",
        ErrorCode::INPUT_NOT_FOUND => "Input file not found",
        ErrorCode::INPUT_SCHEDULE_MALFORMED => "Schedule file could not be parsed",
        ErrorCode::INPUT_METADATA_MALFORMED => "Metadata file could not be parsed",
        ErrorCode::INPUT_PLENARY_MALFORMED => "Plenary info file could not be parsed",
        ErrorCode::INPUT_ROSTER_MALFORMED => "Attendee roster could not be parsed",
        ErrorCode::INPUT_IO_ERROR => "Input I/O error",

        ErrorCode::OUTPUT_IO_ERROR => "Output I/O error",
        ErrorCode::OUTPUT_PERMISSION_DENIED => "Permission denied writing output",
        ErrorCode::OUTPUT_CSV_ERROR => "Failed to write CSV output",

        _ => "Unrecognized error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_descriptions() {
        assert_eq!(
            describe_error_code(ErrorCode::CONFIG_NOT_FOUND),
            "Configuration file not found"
        );
        assert_eq!(
            describe_error_code(ErrorCode::INPUT_ROSTER_MALFORMED),
            "Attendee roster could not be parsed"
        );
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(4242), "Unrecognized error code");
    }
}
