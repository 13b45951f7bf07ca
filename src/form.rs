//! State behind the admin "add shows" page.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::ShowApi;
use crate::error::ApiResult;
use crate::models::{AdminUser, MovieSummary, ShowCreationRequest};
use crate::notice::Notice;
use crate::selection::{parse_date_time_input, DateTimeSelection};
use crate::utils::{format_rating, k_convert, poster_url};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const CATALOG_FAILED: &str = "Failed to fetch movies";

/// What the page should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub enum FormView {
    Loading,
    Ready(Vec<MovieCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub poster_url: Option<String>,
    pub rating: String,
    pub votes: String,
    pub release_date: Option<NaiveDate>,
    pub selected: bool,
}

pub struct ShowSelectionForm {
    api: Arc<dyn ShowApi>,
    image_base_url: String,
    catalog: Vec<MovieSummary>,
    selected_movie: Option<String>,
    price_input: String,
    date_time_input: String,
    selection: DateTimeSelection,
    submitting: bool,
}

impl ShowSelectionForm {
    pub fn new(api: Arc<dyn ShowApi>, image_base_url: impl Into<String>) -> Self {
        Self {
            api,
            image_base_url: image_base_url.into(),
            catalog: Vec::new(),
            selected_movie: None,
            price_input: String::new(),
            date_time_input: String::new(),
            selection: DateTimeSelection::new(),
            submitting: false,
        }
    }

    /// Fetches the now-playing catalog. Nothing is requested until a user is signed in.
    pub async fn load_catalog(&mut self, user: Option<&AdminUser>) -> Option<Notice> {
        let Some(user) = user else {
            debug!("No signed-in user, catalog not requested");
            return None;
        };
        match self.api.now_playing().await {
            Ok(movies) => {
                info!("Loaded {} now-playing movies for {}", movies.len(), user.name);
                self.catalog = movies;
                None
            }
            Err(e) => {
                warn!("Error fetching movies: {}", e);
                Some(Notice::error(CATALOG_FAILED))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &[MovieSummary] {
        &self.catalog
    }

    pub fn view(&self) -> FormView {
        if self.is_loading() {
            return FormView::Loading;
        }
        let cards = self
            .catalog
            .iter()
            .map(|movie| MovieCard {
                id: movie.id.clone(),
                title: movie.title.clone(),
                poster_url: poster_url(&self.image_base_url, movie.poster_path.as_deref()),
                rating: format_rating(movie.vote_average),
                votes: k_convert(movie.vote_count),
                release_date: movie.release_date,
                selected: self.selected_movie.as_deref() == Some(movie.id.as_str()),
            })
            .collect();
        FormView::Ready(cards)
    }

    pub fn select_movie(&mut self, movie_id: &str) {
        self.selected_movie = Some(movie_id.to_string());
    }

    pub fn selected_movie(&self) -> Option<&str> {
        self.selected_movie.as_deref()
    }

    pub fn set_price(&mut self, input: &str) {
        self.price_input = input.trim().to_string();
    }

    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// The entered price, if it is a non-negative number.
    pub fn price(&self) -> Option<f64> {
        if self.price_input.is_empty() {
            return None;
        }
        self.price_input
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
    }

    pub fn set_date_time_input(&mut self, input: &str) {
        self.date_time_input = input.to_string();
    }

    pub fn date_time_input(&self) -> &str {
        &self.date_time_input
    }

    /// Moves the pending `datetime-local` value into the selection. Input that
    /// does not split into date and time is left in place; anything else clears it.
    pub fn add_date_time(&mut self) -> bool {
        let Some((date, time)) = parse_date_time_input(&self.date_time_input) else {
            return false;
        };
        let added = self.selection.add(date, time);
        self.date_time_input.clear();
        added
    }

    pub fn remove_date_time(&mut self, date: &str, time: &str) -> bool {
        self.selection.remove(date, time)
    }

    pub fn selection(&self) -> &DateTimeSelection {
        &self.selection
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Adding..."
        } else {
            "Add Show"
        }
    }

    /// Validates the draft and raises the submitting flag. On `Err` nothing
    /// should be sent.
    pub fn begin_submit(&mut self) -> Result<ShowCreationRequest, Notice> {
        if self.submitting {
            return Err(Notice::info("A show is already being added"));
        }
        self.submitting = true;

        let request = match (self.selected_movie.as_ref(), self.price()) {
            (Some(movie_id), Some(price)) if !self.selection.is_empty() => ShowCreationRequest {
                movie_id: movie_id.clone(),
                shows_input: self.selection.flatten(),
                show_price: price,
            },
            _ => {
                self.submitting = false;
                return Err(Notice::info(MISSING_FIELDS));
            }
        };
        debug!(
            movie_id = %request.movie_id,
            shows = request.shows_input.len(),
            "Submitting show"
        );
        Ok(request)
    }

    /// Applies the backend's answer. Only success clears the draft.
    pub fn finish_submit(&mut self, outcome: ApiResult<String>) -> Notice {
        self.submitting = false;
        match outcome {
            Ok(message) => {
                info!("Show added: {}", message);
                self.reset_draft();
                Notice::success(message)
            }
            Err(e) => {
                warn!("Submission error: {}", e);
                Notice::error(e.user_message())
            }
        }
    }

    pub async fn submit(&mut self) -> Notice {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(notice) => return notice,
        };
        let outcome = self.api.add_show(&request).await;
        self.finish_submit(outcome)
    }

    fn reset_draft(&mut self) {
        self.selected_movie = None;
        self.price_input.clear();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Booking;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl ShowApi for Unreachable {
        async fn now_playing(&self) -> ApiResult<Vec<MovieSummary>> {
            panic!("no network expected")
        }
        async fn add_show(&self, _request: &ShowCreationRequest) -> ApiResult<String> {
            panic!("no network expected")
        }
        async fn all_bookings(&self) -> ApiResult<Vec<Booking>> {
            panic!("no network expected")
        }
    }

    fn form() -> ShowSelectionForm {
        ShowSelectionForm::new(Arc::new(Unreachable), "https://img")
    }

    fn filled_form() -> ShowSelectionForm {
        let mut f = form();
        f.select_movie("m1");
        f.set_price("250");
        f.set_date_time_input("2024-05-01T18:30");
        assert!(f.add_date_time());
        f
    }

    #[test]
    fn price_must_be_a_non_negative_number() {
        let mut f = form();
        assert_eq!(f.price(), None);
        f.set_price("abc");
        assert_eq!(f.price(), None);
        f.set_price("-1");
        assert_eq!(f.price(), None);
        f.set_price("0");
        assert_eq!(f.price(), Some(0.0));
        f.set_price(" 12.50 ");
        assert_eq!(f.price(), Some(12.5));
    }

    #[test]
    fn malformed_date_time_input_is_kept_for_editing() {
        let mut f = form();
        f.set_date_time_input("2024-05-01");
        assert!(!f.add_date_time());
        assert_eq!(f.date_time_input(), "2024-05-01");
        assert!(f.selection().is_empty());
    }

    #[test]
    fn duplicate_date_time_clears_input_without_changing_selection() {
        let mut f = filled_form();
        f.set_date_time_input("2024-05-01T18:30");
        assert!(!f.add_date_time());
        assert_eq!(f.date_time_input(), "");
        assert_eq!(f.selection().pair_count(), 1);
    }

    #[test]
    fn missing_fields_fail_validation_and_release_the_flag() {
        let mut f = form();
        f.set_price("10");
        let err = f.begin_submit().unwrap_err();
        assert_eq!(err, Notice::info(MISSING_FIELDS));
        assert!(!f.is_submitting());
    }

    #[test]
    fn second_begin_is_refused_while_pending() {
        let mut f = filled_form();
        let request = f.begin_submit().expect("valid draft");
        assert_eq!(request.shows_input.len(), 1);
        assert!(f.is_submitting());
        assert_eq!(f.submit_label(), "Adding...");
        assert!(f.begin_submit().is_err());
        assert!(f.is_submitting());
    }

    #[test]
    fn rejection_keeps_draft_and_surfaces_backend_message() {
        let mut f = filled_form();
        f.begin_submit().expect("valid draft");
        let notice = f.finish_submit(Err(ApiError::Rejected("Movie not found".into())));
        assert_eq!(notice, Notice::error("Movie not found"));
        assert_eq!(f.selected_movie(), Some("m1"));
        assert_eq!(f.price(), Some(250.0));
        assert!(f.selection().contains("2024-05-01", "18:30"));
        assert!(!f.is_submitting());
        assert_eq!(f.submit_label(), "Add Show");
    }

    #[test]
    fn empty_catalog_renders_loading() {
        assert_eq!(form().view(), FormView::Loading);
    }
}
