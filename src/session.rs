//! The single-user session.
//!
//! A [`Session`] owns the user's state (selected crew, absences) and the
//! month being viewed. It loads the saved state when opened and saves after
//! every change; everything shown to the user is re-derived from that state
//! through the pure functions in [`crate::calculation`].

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::{
    ToggleAction, compute_summary, is_absent, is_duty_day, month_calendar, toggle_absence,
};
use crate::config::RosterConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceRecord, Crew, MonthCalendar, PayrollSummary, ViewedPeriod};
use crate::store::{SessionState, StateStore, load_state, save_state};

/// A user's session over a state store.
///
/// # Example
///
/// ```
/// use shift_voucher::config::RosterConfig;
/// use shift_voucher::models::Crew;
/// use shift_voucher::session::Session;
/// use shift_voucher::store::MemoryStore;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let mut session = Session::open(RosterConfig::default(), MemoryStore::new(), today);
///
/// session.select_crew(Crew::B);
/// session.toggle_absence(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()).unwrap();
///
/// assert_eq!(session.summary().visible_month_absence_count, 1);
/// ```
#[derive(Debug)]
pub struct Session<S: StateStore> {
    config: RosterConfig,
    store: S,
    state: SessionState,
    viewed: ViewedPeriod,
}

impl<S: StateStore> Session<S> {
    /// Opens a session, viewing the month that contains `today`.
    ///
    /// Saved state that cannot be read is discarded and the session starts
    /// from the defaults.
    pub fn open(config: RosterConfig, store: S, today: NaiveDate) -> Self {
        let state = load_state(&store).unwrap_or_default();
        info!(
            crew = %state.selected_crew,
            absences = state.absences.len(),
            "Session opened"
        );

        Self {
            config,
            store,
            state,
            viewed: ViewedPeriod::containing(today),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The crew the user works in.
    pub fn crew(&self) -> Crew {
        self.state.selected_crew
    }

    /// The recorded absences.
    pub fn absences(&self) -> &[AbsenceRecord] {
        &self.state.absences
    }

    /// The month being viewed.
    pub fn viewed(&self) -> ViewedPeriod {
        self.viewed
    }

    /// Switches crew and saves.
    pub fn select_crew(&mut self, crew: Crew) {
        if self.state.selected_crew == crew {
            return;
        }
        self.state.selected_crew = crew;
        info!(crew = %crew, "Crew selected");
        self.persist();
    }

    /// Moves the view one month forward.
    pub fn next_month(&mut self) -> ViewedPeriod {
        self.viewed = self.viewed.next();
        self.viewed
    }

    /// Moves the view one month back.
    pub fn previous_month(&mut self) -> ViewedPeriod {
        self.viewed = self.viewed.previous();
        self.viewed
    }

    /// Returns true if the user's crew works on `date`.
    pub fn is_my_shift(&self, date: NaiveDate) -> bool {
        is_duty_day(date, self.crew(), &self.config.epoch)
    }

    /// Returns true if an absence is recorded on `date`.
    pub fn is_absent(&self, date: NaiveDate) -> bool {
        is_absent(&self.state.absences, date)
    }

    /// Marks or unmarks an absence on one of the user's shifts, then saves.
    ///
    /// Returns `NotOnDuty` for a day the user's crew does not work; the
    /// absence set is left unchanged.
    pub fn toggle_absence(&mut self, date: NaiveDate) -> EngineResult<ToggleAction> {
        let crew = self.crew();
        if !self.is_my_shift(date) {
            warn!(date = %date, crew = %crew, "Rejected absence toggle on a non-duty day");
            return Err(EngineError::NotOnDuty { date, crew });
        }

        let result = toggle_absence(&self.state.absences, date);
        self.state.absences = result.absences;
        info!(date = %date, action = ?result.action, "Absence toggled");
        self.persist();

        Ok(result.action)
    }

    /// The payroll summary for the viewed month.
    pub fn summary(&self) -> PayrollSummary {
        compute_summary(
            self.viewed,
            self.crew(),
            self.config.shift_rate,
            &self.state.absences,
            &self.config.epoch,
        )
    }

    /// The calendar grid of the viewed month.
    pub fn calendar(&self) -> MonthCalendar {
        month_calendar(
            self.viewed,
            self.crew(),
            &self.state.absences,
            &self.config.epoch,
        )
    }

    fn persist(&self) {
        save_state(&self.store, &self.state);
    }
}
