//! Number and text formatting used by the dashboard widgets.

/// Rounds exact halves away from zero, the way the browser's `toFixed` displays them.
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Formats a raw count in millions, e.g. `12_345_678.0` with 2 decimals -> `"12.35 M"`.
pub fn millions(value: f64, decimals: usize) -> String {
    format!("{} M", fixed(value / 1_000_000.0, decimals))
}

pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals))
}

/// Percentage as sent by the API, without forcing decimals (`15.47` -> `"15.47%"`).
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "N/A".to_string(),
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(12_345_678.0, 2, "12.35 M")]
    #[test_case(1_000_000.0, 1, "1.0 M")]
    #[test_case(250_000.0, 2, "0.25 M")]
    #[test_case(0.0, 1, "0.0 M")]
    #[test_case(20_250_000.0, 1, "20.3 M" ; "half rounds up with one decimal")]
    #[test_case(125_000.0, 2, "0.13 M" ; "half rounds up with two decimals")]
    fn formats_millions(value: f64, decimals: usize, expected: &str) {
        assert_eq!(millions(value, decimals), expected);
    }

    #[test]
    fn formats_fixed() {
        assert_eq!(fixed(3.14159, 2), "3.14");
        assert_eq!(fixed(7.0, 2), "7.00");
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(2.5, 0), "3");
    }

    #[test]
    fn formats_percent() {
        assert_eq!(percent(Some(15.47)), "15.47%");
        assert_eq!(percent(Some(20.0)), "20%");
        assert_eq!(percent(None), "N/A");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }
}
