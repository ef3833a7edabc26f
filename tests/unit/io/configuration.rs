//! Tests for default configuration values

#[cfg(test)]
mod tests {
    use unshred::io::configuration::{
        DEFAULT_SHRED_WIDTH, FALLBACK_FORMAT, MAX_INDIVIDUAL_PROGRESS_BARS, MIN_SHREDS,
        OUTPUT_SUFFIX, SHREDDED_SUFFIX,
    };

    // Defaults match the documented command-line behaviour
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_SHRED_WIDTH, 32);
        assert_eq!(MIN_SHREDS, 2);
        assert_eq!(OUTPUT_SUFFIX, "_unshredded");
        assert_eq!(FALLBACK_FORMAT, image::ImageFormat::Png);
    }

    // Generated file suffixes never collide
    #[test]
    fn test_suffixes_distinct() {
        assert_ne!(OUTPUT_SUFFIX, SHREDDED_SUFFIX);
        assert!(!OUTPUT_SUFFIX.ends_with(SHREDDED_SUFFIX));
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
    }
}
