//! Application state management

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use reserva_core::{
    AvailabilityBucket, CapacityBucket, Catalog, Error, Reservation, ReservationId, Result, Room,
    RoomFilter, RoomId, RoomRef, RoomStats,
};
use uuid::Uuid;

use crate::booking_dialog::{BookingDialog, SubmitOutcome};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Ephemeral toast notification (not persisted)
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, description)
    }
}

/// Caller-supplied reaction to a cancel request
pub type CancelHandler = Arc<dyn Fn(&Reservation) + Send + Sync>;

/// Cancel handler that only records the request in the log
pub fn logging_cancel_handler() -> CancelHandler {
    Arc::new(|reservation: &Reservation| {
        tracing::info!(
            reservation = %reservation.id,
            room = %reservation.room_name,
            "Cancelling reservation"
        );
    })
}

/// Main application state
pub struct AppState {
    catalog: Arc<Catalog>,
    today: NaiveDate,
    pub filter: Arc<Mutex<RoomFilter>>,
    pub booking: Arc<Mutex<BookingDialog>>,
    /// Current toast; a new notice replaces it
    pub notice: Arc<Mutex<Option<Notice>>>,
    cancel_handler: Option<CancelHandler>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("today", &self.today)
            .field("rooms", &self.catalog.rooms().len())
            .field("reservations", &self.catalog.reservations().len())
            .field("has_cancel_handler", &self.cancel_handler.is_some())
            .finish()
    }
}

impl AppState {
    pub fn new(catalog: Catalog, today: NaiveDate) -> Self {
        Self {
            catalog: Arc::new(catalog),
            today,
            filter: Arc::new(Mutex::new(RoomFilter::new())),
            booking: Arc::new(Mutex::new(BookingDialog::new())),
            notice: Arc::new(Mutex::new(None)),
            cancel_handler: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(catalog, config.today()))
    }

    pub fn with_cancel_handler(mut self, handler: CancelHandler) -> Self {
        self.cancel_handler = Some(handler);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // Filters

    pub fn set_search(&self, search: &str) {
        self.filter.lock().unwrap().search = search.to_string();
    }

    pub fn set_capacity(&self, capacity: Option<CapacityBucket>) {
        self.filter.lock().unwrap().capacity = capacity;
    }

    pub fn set_availability(&self, availability: Option<AvailabilityBucket>) {
        self.filter.lock().unwrap().availability = availability;
    }

    /// Snapshot of the current criteria
    pub fn filter(&self) -> RoomFilter {
        self.filter.lock().unwrap().clone()
    }

    pub fn visible_rooms(&self) -> Vec<&Room> {
        let filter = self.filter();
        let visible = filter.apply(self.catalog.rooms());
        tracing::debug!(?filter, visible = visible.len(), "Recomputed visible rooms");
        visible
    }

    /// Visible rooms and the stats strip from a single filter pass
    pub fn visible_rooms_with_stats(&self) -> (Vec<&Room>, RoomStats) {
        let visible = self.visible_rooms();
        let stats = RoomStats::compute(self.catalog.rooms(), &visible);
        (visible, stats)
    }

    // Booking

    /// Open the booking dialog for a room. Unknown or occupied rooms are ignored.
    pub fn open_booking(&self, room_id: &RoomId) -> bool {
        let Some(room) = self.catalog.room(room_id) else {
            tracing::warn!(room = %room_id, "Booking requested for unknown room");
            return false;
        };

        if !room.can_book() {
            tracing::warn!(room = %room_id, "Booking requested for occupied room");
            return false;
        }

        self.booking
            .lock()
            .unwrap()
            .open(RoomRef::new(room.id.clone(), room.name.clone()));
        true
    }

    pub fn dismiss_booking(&self) {
        self.booking.lock().unwrap().dismiss();
    }

    /// Submit the booking form and record the resulting notice
    pub fn submit_booking(&self) -> SubmitOutcome {
        let outcome = self.booking.lock().unwrap().submit();

        match &outcome {
            SubmitOutcome::Confirmed { request, notice } => {
                tracing::info!(
                    confirmation = %request.confirmation_id,
                    room = %request.room.id,
                    date = %request.date,
                    start = %request.start_time,
                    end = %request.end_time,
                    "Booking confirmed"
                );
                self.push_notice(notice.clone());
            }
            SubmitOutcome::Rejected { missing, notice } => {
                tracing::warn!(?missing, "Booking rejected");
                self.push_notice(notice.clone());
            }
            SubmitOutcome::NotOpen => {
                tracing::warn!("Booking submitted without a selected room");
            }
        }

        outcome
    }

    // Notices

    pub fn push_notice(&self, notice: Notice) {
        *self.notice.lock().unwrap() = Some(notice);
    }

    pub fn latest_notice(&self) -> Option<Notice> {
        self.notice.lock().unwrap().clone()
    }

    /// Clear the toast if it is still the one with `id`
    pub fn dismiss_notice(&self, id: Uuid) {
        let mut current = self.notice.lock().unwrap();
        if current.as_ref().is_some_and(|n| n.id == id) {
            *current = None;
        }
    }

    // Reservations

    pub fn has_cancel_handler(&self) -> bool {
        self.cancel_handler.is_some()
    }

    /// Whether the cancel action is shown for a reservation
    pub fn can_cancel(&self, reservation: &Reservation) -> bool {
        reservation.cancel_action_visible(self.today, self.has_cancel_handler())
    }

    /// Forward a cancel request to the handler. The catalog is not modified.
    pub fn cancel_reservation(&self, id: &ReservationId) -> Result<()> {
        let reservation = self
            .catalog
            .reservation(id)
            .ok_or_else(|| Error::NotFound(format!("reservation {}", id)))?;

        if !self.can_cancel(reservation) {
            tracing::warn!(reservation = %id, "Cancel requested for a reservation that cannot be cancelled");
            return Ok(());
        }

        if let Some(handler) = &self.cancel_handler {
            handler(reservation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_state(today: NaiveDate) -> AppState {
        AppState::new(Catalog::builtin().unwrap(), today)
    }

    #[test]
    fn test_initial_state_shows_all_rooms() {
        let state = make_state(day(2024, 12, 1));
        let (visible, stats) = state.visible_rooms_with_stats();
        assert_eq!(visible.len(), 5);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.filtered, 5);
    }

    #[test]
    fn test_filter_setters() {
        let state = make_state(day(2024, 12, 1));
        state.set_search("sala");
        state.set_capacity(Some(CapacityBucket::Medium));
        state.set_availability(Some(AvailabilityBucket::Available));

        let names: Vec<&str> = state
            .visible_rooms()
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sala Executiva"]);
        let (visible, stats) = state.visible_rooms_with_stats();
        assert_eq!(stats.filtered, visible.len());
        assert_eq!(stats.total, 5);

        state.set_search("");
        state.set_capacity(None);
        state.set_availability(None);
        assert!(state.filter().is_unconstrained());
        assert_eq!(state.visible_rooms().len(), 5);
    }

    #[test]
    fn test_open_booking() {
        let state = make_state(day(2024, 12, 1));
        assert!(state.open_booking(&RoomId::new("1")));
        let booking = state.booking.lock().unwrap();
        assert_eq!(booking.room().unwrap().name, "Sala Executiva");
    }

    #[test]
    fn test_open_booking_rejects_unknown_and_occupied() {
        let state = make_state(day(2024, 12, 1));
        assert!(!state.open_booking(&RoomId::new("42")));
        assert!(!state.open_booking(&RoomId::new("2")));
        assert!(!state.booking.lock().unwrap().is_open());
    }

    #[test]
    fn test_submit_records_notice() {
        let today = day(2024, 12, 1);
        let state = make_state(today);
        state.open_booking(&RoomId::new("3"));

        assert!(matches!(state.submit_booking(), SubmitOutcome::Rejected { .. }));
        let notice = state.latest_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(state.booking.lock().unwrap().is_open());

        {
            let mut booking = state.booking.lock().unwrap();
            booking.set_organizer("Maria Santos");
            booking.set_email("maria@example.com");
            booking.set_date_text("20/12/2024", today);
            booking.set_start_time("14:00");
            booking.set_end_time("16:00");
        }

        assert!(matches!(state.submit_booking(), SubmitOutcome::Confirmed { .. }));
        let notice = state.latest_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            notice.description,
            "Sala Auditório Principal reservada para 20/12/2024 das 14:00 às 16:00."
        );
        assert!(!state.booking.lock().unwrap().is_open());

        state.dismiss_notice(notice.id);
        assert!(state.latest_notice().is_none());
    }

    #[test]
    fn test_new_notice_replaces_previous() {
        let state = make_state(day(2024, 12, 1));
        state.open_booking(&RoomId::new("3"));
        for _ in 0..5 {
            state.submit_booking();
        }

        let first = state.latest_notice().unwrap();
        state.push_notice(Notice::info("Reserva confirmada!", "ok"));
        let second = state.latest_notice().unwrap();
        assert_ne!(first.id, second.id);

        // stale ids leave the current toast alone
        state.dismiss_notice(first.id);
        assert_eq!(state.latest_notice().unwrap().id, second.id);
        assert!(state.notice.lock().unwrap().is_some());
    }

    #[test]
    fn test_cancel_requires_handler() {
        let state = make_state(day(2024, 12, 1));
        let reservation = state.catalog().reservation(&ReservationId::new("1")).unwrap();
        assert!(!state.can_cancel(reservation));
    }

    #[test]
    fn test_cancel_invokes_handler_without_mutation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let state = make_state(day(2024, 12, 1)).with_cancel_handler(Arc::new(move |_r: &Reservation| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        state.cancel_reservation(&ReservationId::new("1")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.catalog().reservations().len(), 2);
    }

    #[test]
    fn test_cancel_past_reservation_is_ignored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let state = make_state(day(2025, 1, 15)).with_cancel_handler(Arc::new(move |_r: &Reservation| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let reservation = state.catalog().reservation(&ReservationId::new("2")).unwrap();
        assert!(!state.can_cancel(reservation));

        state.cancel_reservation(&ReservationId::new("2")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cancel_unknown_reservation() {
        let state = make_state(day(2024, 12, 1)).with_cancel_handler(logging_cancel_handler());
        let result = state.cancel_reservation(&ReservationId::new("99"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
