use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A now-playing movie as the backend passes it through from TMDB.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default, deserialize_with = "lenient_date")]
    pub release_date: Option<NaiveDate>,
}

/// One scheduled screening inside a creation request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShowCreationRequest {
    pub movie_id: String,
    pub shows_input: Vec<ShowInput>,
    pub show_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user: BookingUser,
    pub show: BookedShow,
    #[serde(default)]
    pub booked_seats: Vec<String>,
    pub amount: f64,
    #[serde(default)]
    pub is_paid: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingUser {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookedShow {
    pub movie: BookedMovie,
    pub show_date_time: DateTime<Utc>,
    #[serde(default)]
    pub show_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookedMovie {
    pub title: String,
}

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

// TMDB sends "" for unreleased titles.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_accepts_numeric_ids_and_blank_release_dates() {
        let value = json!({
            "id": 1022789,
            "title": "Inside Out 2",
            "poster_path": "/vpnVM9B6NMmQpWeZvzLvDESb2QY.jpg",
            "vote_average": 7.6,
            "vote_count": 4123,
            "release_date": ""
        });
        let movie: MovieSummary = serde_json::from_value(value).expect("movie deserialize");
        assert_eq!(movie.id, "1022789");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, Some(7.6));
    }

    #[test]
    fn movie_tolerates_missing_optional_fields() {
        let value = json!({ "id": "m1", "title": "Dune", "release_date": "2024-03-01" });
        let movie: MovieSummary = serde_json::from_value(value).expect("movie deserialize");
        assert_eq!(movie.vote_count, 0);
        assert_eq!(movie.vote_average, None);
        assert_eq!(
            movie.release_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn creation_request_uses_camel_case_wire_names() {
        let req = ShowCreationRequest {
            movie_id: "m1".to_string(),
            shows_input: vec![ShowInput {
                date: "2024-05-01".to_string(),
                time: "18:30".to_string(),
            }],
            show_price: 250.0,
        };
        let value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            value,
            json!({
                "movieId": "m1",
                "showsInput": [{ "date": "2024-05-01", "time": "18:30" }],
                "showPrice": 250.0
            })
        );
    }

    #[test]
    fn booking_reads_mongo_style_ids() {
        let value = json!({
            "_id": "b1",
            "user": { "name": "Ada" },
            "show": {
                "movie": { "title": "Dune" },
                "showDateTime": "2024-05-07T18:30:00.000Z",
                "showPrice": 12.5
            },
            "bookedSeats": ["A1", "A2"],
            "amount": 25.0,
            "isPaid": true
        });
        let booking: Booking = serde_json::from_value(value).expect("booking deserialize");
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.booked_seats, vec!["A1".to_string(), "A2".to_string()]);
        assert!(booking.is_paid);
    }
}
