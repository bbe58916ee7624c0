use anyhow::{Context, Result};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    TumblrCdn,
    Tumblr,
    TumblrSized,
    Uuid,
    AndroidBurst,
    Android,
    Telegram,
    RunkeeperApp,
    RunkeeperWeb,
    Flipboard,
    User,
}

const BUILTIN_FILTERS: &[(Convention, &str)] = &[
    (
        Convention::TumblrCdn,
        r"^https?%[0-9a-fA-F]{2}%[0-9a-fA-F]{2}%[0-9a-fA-F]{4}.media.tumblr.com(%[0-9a-fA-F]{34})?%[0-9a-fA-F]{2}tumblr_[0-9a-zA-Z]{19}(_.{2})?_[0-9]{3,4}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::Tumblr,
        r"^tumblr_\w{19}_[0-9]{3,4}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::TumblrSized,
        r"^tumblr_\w{19,20}_\w{2}_[0-9]{3}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::Uuid,
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::AndroidBurst,
        r"^IMG_[0-9]{8}_[0-9]{6}_[0-9]{3}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::Android,
        r"^IMG_[0-9]{8}_[0-9]{6}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::Telegram,
        r"^[0-9]{9}_[0-9]{5,6}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::RunkeeperApp,
        r"^[0-9]{13}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::RunkeeperWeb,
        r"^\w{24}\.(?i:jpe?g|png|gif|bmp)$",
    ),
    (
        Convention::Flipboard,
        r"^[0-9a-fA-F]{40}\.(?i:jpe?g|png|gif|bmp)$",
    ),
];

#[derive(Debug)]
struct Filter {
    convention: Convention,
    regex: Regex,
}

#[derive(Debug)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Result<Self> {
        Self::with_extra_patterns(&[])
    }

    pub fn with_extra_patterns(extra_patterns: &[String]) -> Result<Self> {
        let mut filters = Vec::with_capacity(BUILTIN_FILTERS.len() + extra_patterns.len());

        for (convention, pattern) in BUILTIN_FILTERS {
            let regex = Regex::new(pattern)
                .with_context(|| format!("組み込みフィルタを解析できませんでした: {pattern}"))?;
            filters.push(Filter {
                convention: *convention,
                regex,
            });
        }

        for pattern in extra_patterns {
            let regex = Regex::new(pattern)
                .with_context(|| format!("追加フィルタを解析できませんでした: {pattern}"))?;
            filters.push(Filter {
                convention: Convention::User,
                regex,
            });
        }

        Ok(Self { filters })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matched_convention(file_name).is_some()
    }

    pub fn matched_convention(&self, file_name: &str) -> Option<Convention> {
        self.filters
            .iter()
            .find(|filter| filter.regex.is_match(file_name))
            .map(|filter| filter.convention)
    }
}

#[cfg(test)]
mod tests {
    use super::{Convention, FilterSet};

    fn filters() -> FilterSet {
        FilterSet::new().expect("builtin filters must compile")
    }

    #[test]
    fn matches_one_sample_per_convention() {
        let filters = filters();
        let samples = [
            (
                "http%3A%2F%2F40.media.tumblr.com%2Ftumblr_abcdefghij012345678_500.jpg",
                Convention::TumblrCdn,
            ),
            (
                "tumblr_nabcdefghij01234567_1280.png",
                Convention::Tumblr,
            ),
            (
                "tumblr_abcdefghij0123456789_r1_250.gif",
                Convention::TumblrSized,
            ),
            (
                "123e4567-e89b-12d3-a456-426614174000.JPG",
                Convention::Uuid,
            ),
            ("IMG_20230401_120000_001.jpg", Convention::AndroidBurst),
            ("IMG_20230401_120000.jpeg", Convention::Android),
            ("123456789_12345.jpg", Convention::Telegram),
            ("1357924680123.jpg", Convention::RunkeeperApp),
            ("abcdefghijklmnopqrstuvwx.png", Convention::RunkeeperWeb),
            (
                "0123456789abcdef0123456789abcdef01234567.jpg",
                Convention::Flipboard,
            ),
        ];

        for (file_name, expected) in samples {
            assert_eq!(
                filters.matched_convention(file_name),
                Some(expected),
                "{file_name}"
            );
        }
    }

    #[test]
    fn rejects_foreign_and_canonical_names() {
        let filters = filters();
        let rejected = [
            "holiday.jpg",
            "IMG_2023_1200.jpg",
            "IMG_20230401_120000.tiff",
            "tumblr_short_500.jpg",
            "123456789_1234.jpg",
            "2023-04-01 12.00.05.jpg",
        ];

        for file_name in rejected {
            assert!(!filters.matches(file_name), "{file_name}");
        }
    }

    #[test]
    fn filters_are_anchored_to_the_whole_name() {
        let filters = filters();
        assert!(!filters.matches("prefix_IMG_20230401_120000.jpg"));
        assert!(!filters.matches("IMG_20230401_120000.jpg.bak"));
    }

    #[test]
    fn extra_patterns_extend_the_builtin_set() {
        let extra = vec![r"^scan_[0-9]{4}\.(?i:jpe?g)$".to_string()];
        let filters = FilterSet::with_extra_patterns(&extra).expect("extra filter must compile");

        assert_eq!(
            filters.matched_convention("scan_0042.jpg"),
            Some(Convention::User)
        );
        assert!(filters.matches("IMG_20230401_120000.jpg"));
    }

    #[test]
    fn invalid_extra_pattern_is_a_startup_error() {
        let extra = vec!["([unclosed".to_string()];
        assert!(FilterSet::with_extra_patterns(&extra).is_err());
    }
}
