//! Unit tests for sink-core primitives.

#[cfg(test)]
fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[cfg(test)]
mod time {
    use super::at;
    use crate::{Clock, FixedClock, SinkError, Timestamp};

    #[test]
    fn display_is_twelve_digits() {
        let ts = Timestamp::from_datetime(at(2024, 3, 9, 7, 5, 0));
        assert_eq!(ts.to_string(), "202403090705");
    }

    #[test]
    fn seconds_are_truncated() {
        let a = Timestamp::from_datetime(at(2024, 3, 9, 14, 5, 0));
        let b = Timestamp::from_datetime(at(2024, 3, 9, 14, 5, 59));
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "202403091405");
    }

    #[test]
    fn parse_roundtrip() {
        let ts = Timestamp::parse("199912312359").unwrap();
        assert_eq!(ts.datetime(), at(1999, 12, 31, 23, 59, 0));
        assert_eq!(ts.to_string(), "199912312359");
        assert_eq!("199912312359".parse::<Timestamp>().unwrap(), ts);
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        for bad in ["", "20240309140", "2024030914055", "2024O3091405", "+20403091405"] {
            assert!(
                matches!(Timestamp::parse(bad), Err(SinkError::InvalidTimestamp(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(Timestamp::parse("202413011200").is_err()); // month 13
        assert!(Timestamp::parse("202302291200").is_err()); // not a leap year
        assert!(Timestamp::parse("202403092460").is_err()); // hour 24, minute 60
    }

    #[test]
    fn ordering_matches_digit_order() {
        let earlier = Timestamp::parse("202403091405").unwrap();
        let later = Timestamp::parse("202403100001").unwrap();
        assert!(earlier < later);
        assert!(earlier.to_string() < later.to_string());
    }

    #[test]
    fn fixed_clock_stamp() {
        let mut clock = FixedClock::new(at(2024, 1, 2, 3, 4, 5));
        assert_eq!(clock.stamp().to_string(), "202401020304");
        clock.set(at(2025, 11, 30, 22, 10, 0));
        assert_eq!(clock.now(), at(2025, 11, 30, 22, 10, 0));
        assert_eq!(clock.stamp().to_string(), "202511302210");
    }
}

#[cfg(test)]
mod naming {
    use super::at;
    use crate::{OutputPattern, Timestamp};

    #[test]
    fn file_name_shape() {
        let p = OutputPattern::reddit().unwrap();
        let ts = Timestamp::from_datetime(at(2024, 3, 9, 14, 5, 12));
        assert_eq!(p.file_name(ts), "reddit-202403091405.txt");
        assert!(p.matches(&p.file_name(ts)));
    }

    #[test]
    fn matches_whole_names_only() {
        let p = OutputPattern::reddit().unwrap();
        assert!(p.matches("reddit-202403091405.txt"));

        assert!(!p.matches("reddit-20240309140.txt"));      // 11 digits
        assert!(!p.matches("reddit-2024030914055.txt"));    // 13 digits
        assert!(!p.matches("reddit-202403091405Xtxt"));     // dot is literal
        assert!(!p.matches("reddit-202403091405.txt.bak"));
        assert!(!p.matches("old-reddit-202403091405.txt"));
        assert!(!p.matches("notes.txt"));
    }

    #[test]
    fn neighbouring_names_do_not_combine() {
        // Joined, these two names would contain `reddit-202403091405.txt`.
        let p = OutputPattern::reddit().unwrap();
        let names = ["a-reddit-2024", "03091405.txt"];
        assert!(p.matches(&names.concat()[2..]));
        assert!(names.iter().all(|n| !p.matches(n)));
    }

    #[test]
    fn stamp_of_extracts_timestamp() {
        let p = OutputPattern::reddit().unwrap();
        assert_eq!(
            p.stamp_of("reddit-202403091405.txt"),
            Some(Timestamp::parse("202403091405").unwrap())
        );
        assert_eq!(p.stamp_of("reddit-202499991405.txt"), None);
        assert_eq!(p.stamp_of("other.txt"), None);
    }

    #[test]
    fn custom_prefix_is_escaped() {
        let p = OutputPattern::new("hn.top", "log").unwrap();
        assert!(p.matches("hn.top-202403091405.log"));
        assert!(!p.matches("hnXtop-202403091405.log"));
        assert_eq!(p.prefix(), "hn.top");
        assert_eq!(p.extension(), "log");
    }
}

#[cfg(test)]
mod config {
    use std::path::Path;

    use crate::SaverConfig;

    #[test]
    fn defaults_to_reddit_names() {
        let cfg = SaverConfig::new("/var/lib/scrape");
        assert_eq!(cfg.target_dir, Path::new("/var/lib/scrape"));
        assert_eq!(cfg.prefix, "reddit");
        assert_eq!(cfg.extension, "txt");
        assert!(cfg.pattern().unwrap().matches("reddit-202403091405.txt"));
    }

    #[test]
    fn pattern_follows_fields() {
        let mut cfg = SaverConfig::new("out");
        cfg.prefix = "lobsters".into();
        cfg.extension = "csv".into();
        let p = cfg.pattern().unwrap();
        assert!(p.matches("lobsters-202403091405.csv"));
        assert!(!p.matches("reddit-202403091405.txt"));
    }
}
