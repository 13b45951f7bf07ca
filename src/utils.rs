use chrono::{DateTime, Utc};

/// Compact vote counts: 999 stays "999", 1200 becomes "1.2k".
pub fn k_convert(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() => format!("{:.1}", r),
        _ => "N/A".to_string(),
    }
}

/// Money with the currency symbol in front, dropping a zero fraction.
pub fn format_amount(currency: &str, amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", currency, rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        format!("{}{}", currency, text.trim_end_matches('0'))
    }
}

pub fn format_show_time(at: &DateTime<Utc>) -> String {
    at.format("%a, %b %-d, %Y %-I:%M %p").to_string()
}

pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    let path = poster_path.filter(|p| !p.is_empty())?;
    Some(format!("{}{}", image_base_url.trim_end_matches('/'), path))
}
