use std::time::Duration;

pub const PLACEHOLDER: &str = "-:--";

/// Field layout shared by the elapsed and total labels of one track.
///
/// The total duration decides it once, so the elapsed label keeps the same
/// width for the whole track: hours appear only if the total reaches an
/// hour, and the leading field is zero-padded once the total's hours or
/// minutes exceed 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLayout {
    pub show_hours: bool,
    pub wide: bool,
}

impl TimeLayout {
    pub fn for_total(total: Duration) -> Self {
        let secs = total.as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        Self { show_hours: hours > 0, wide: hours > 9 || minutes > 9 }
    }

    pub fn format(&self, d: Duration) -> String {
        let secs = d.as_secs();
        let s = secs % 60;

        if self.show_hours {
            let h = secs / 3600;
            let m = (secs % 3600) / 60;
            if self.wide {
                format!("{:02}:{:02}:{:02}", h, m, s)
            } else {
                format!("{}:{:02}:{:02}", h, m, s)
            }
        } else {
            let m = secs / 60;
            if self.wide {
                format!("{:02}:{:02}", m, s)
            } else {
                format!("{}:{:02}", m, s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn short_tracks_use_minutes_and_seconds() {
        let layout = TimeLayout::for_total(secs(45));
        assert_eq!(layout.format(secs(45)), "0:45");
        assert_eq!(TimeLayout::default().format(secs(125)), "2:05");
    }

    #[test]
    fn long_minutes_pad_the_leading_field() {
        let layout = TimeLayout::for_total(secs(12 * 60));
        assert_eq!(layout.format(secs(45)), "00:45");
        assert_eq!(layout.format(secs(12 * 60)), "12:00");
    }

    #[test]
    fn hours_appear_when_total_reaches_an_hour() {
        let layout = TimeLayout::for_total(secs(3661));
        assert_eq!(layout.format(secs(3661)), "1:01:01");
        assert_eq!(layout.format(secs(45)), "0:00:45");
    }

    #[test]
    fn wide_hours_are_padded() {
        let layout = TimeLayout::for_total(secs(10 * 3600));
        assert_eq!(layout.format(secs(3661)), "01:01:01");
        let layout = TimeLayout::for_total(secs(3600 + 15 * 60));
        assert_eq!(layout.format(secs(3600 + 15 * 60)), "01:15:00");
    }

    #[test]
    fn fractional_seconds_are_floored() {
        assert_eq!(TimeLayout::default().format(Duration::from_millis(59_999)), "0:59");
    }
}
