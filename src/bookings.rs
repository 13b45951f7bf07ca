use std::sync::Arc;
use tracing::{info, warn};

use crate::api::ShowApi;
use crate::models::Booking;
use crate::notice::Notice;
use crate::utils::{format_amount, format_show_time};

/// One printable line of the admin booking table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub user_name: String,
    pub movie_title: String,
    pub show_time: String,
    pub seats: String,
    pub amount: String,
}

pub struct BookingList {
    api: Arc<dyn ShowApi>,
    currency: String,
    bookings: Vec<Booking>,
    loading: bool,
}

impl BookingList {
    pub fn new(api: Arc<dyn ShowApi>, currency: impl Into<String>) -> Self {
        Self {
            api,
            currency: currency.into(),
            bookings: Vec::new(),
            loading: true,
        }
    }

    pub async fn load(&mut self) -> Option<Notice> {
        let result = self.api.all_bookings().await;
        self.loading = false;
        match result {
            Ok(bookings) => {
                info!("Loaded {} bookings", bookings.len());
                self.bookings = bookings;
                None
            }
            Err(e) => {
                warn!("Failed to fetch bookings: {}", e);
                Some(Notice::error(e.user_message()))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn rows(&self) -> Vec<BookingRow> {
        self.bookings
            .iter()
            .map(|b| BookingRow {
                user_name: b.user.name.clone(),
                movie_title: b.show.movie.title.clone(),
                show_time: format_show_time(&b.show.show_date_time),
                seats: b.booked_seats.join(", "),
                amount: format_amount(&self.currency, b.amount),
            })
            .collect()
    }
}
