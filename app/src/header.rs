use chrono::{DateTime, Local, Locale, TimeZone};

pub const TITLE: &str = "Podcastr";
pub const TAGLINE: &str = "O melhor para você ouvir, sempre";

/// Application masthead: static branding plus today's date.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Header;

impl Header {
    pub fn view(&self) -> String {
        format!("{}\n{}\n{}", TITLE, TAGLINE, format_date(Local::now()))
    }
}

/// Abbreviated weekday, day and month, in the app's fixed locale.
pub fn format_date<Tz: TimeZone>(date: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format_localized("%a, %-d %B", Locale::pt_BR).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_a_pinned_date_in_portuguese() {
        // A Friday.
        let date = Utc.with_ymd_and_hms(2021, 4, 23, 12, 0, 0).unwrap();
        let formatted = format_date(date).to_lowercase();

        assert!(formatted.starts_with("sex"));
        assert!(formatted.contains("23"));
        assert!(formatted.contains("abril"));
    }

    #[test]
    fn view_carries_the_branding() {
        let view = Header.view();

        assert!(view.contains(TITLE));
        assert!(view.contains(TAGLINE));
        assert_eq!(view.lines().count(), 3);
    }
}
