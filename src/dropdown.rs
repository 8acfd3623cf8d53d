use std::fmt;

use chrono::NaiveDate;

use crate::Selection;
use crate::calendar::{CalendarDay, MonthAnchor};
use crate::clock::{Clock, SystemClock};
use crate::flexible::FlexibleSelection;
use crate::range::DateRange;
use crate::types::{DurationClass, MonthName, Tab};

/// In-progress work held while the dropdown is open.
///
/// Both sub-states live side by side regardless of which tab is active,
/// so switching tabs never discards the other tab's partial work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingState {
    pub dates: DateRange,
    pub flexible: FlexibleSelection,
    pub active_tab: Tab,
}

impl PendingState {
    /// Seeds pending work from a committed selection. The dates tab is
    /// always the one shown first, whatever shape the token had.
    fn hydrate(selection: Selection) -> Self {
        match selection {
            Selection::Exact(dates) => Self {
                dates,
                ..Self::default()
            },
            Selection::Flexible(flexible) => Self {
                flexible,
                ..Self::default()
            },
            Selection::Empty => Self::default(),
        }
    }
}

/// Top-level orchestrator of the travel-date selector.
///
/// Owns the committed token, the open/closed lifecycle, and the pending
/// staging area, and routes input to the exact-dates or flexible-window
/// sub-state. The change callback fires exactly once per successful
/// [`DropdownController::apply`] or [`DropdownController::clear`], never
/// for intermediate pending mutations or for cancel.
pub struct DropdownController<C: Clock = SystemClock> {
    clock: C,
    committed: String,
    visible_month: MonthAnchor,
    pending: Option<PendingState>,
    on_change: Box<dyn FnMut(&str)>,
}

impl<C: Clock> DropdownController<C> {
    /// Creates a closed controller around the owner's current token.
    pub fn new(
        initial_token: impl Into<String>,
        clock: C,
        on_change: impl FnMut(&str) + 'static,
    ) -> Self {
        let visible_month = MonthAnchor::containing(clock.today());
        Self {
            clock,
            committed: initial_token.into(),
            visible_month,
            pending: None,
            on_change: Box::new(on_change),
        }
    }

    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// The last token communicated to the owner.
    pub fn committed_token(&self) -> &str {
        &self.committed
    }

    pub const fn pending(&self) -> Option<&PendingState> {
        self.pending.as_ref()
    }

    /// Active tab, if open.
    pub fn active_tab(&self) -> Option<Tab> {
        self.pending.as_ref().map(|p| p.active_tab)
    }

    /// Opens on the dates tab, seeding pending work by decoding the
    /// committed token. No-op if already open.
    pub fn open(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let pending = PendingState::hydrate(Selection::decode(&self.committed));
        self.visible_month = pending
            .dates
            .start()
            .map_or_else(|| MonthAnchor::containing(self.clock.today()), MonthAnchor::containing);
        self.pending = Some(pending);
    }

    /// Switches panes. Both sub-states keep their staged work.
    pub fn switch_tab(&mut self, tab: Tab) {
        if let Some(pending) = &mut self.pending {
            pending.active_tab = tab;
        }
    }

    /// Routes a day click to the exact-dates state machine. No-op while
    /// closed; clicks on past days are ignored by the machine itself.
    pub fn select_date(&mut self, date: NaiveDate) {
        let today = self.clock.today();
        if let Some(pending) = &mut self.pending {
            pending.dates.select(date, today);
        }
    }

    /// Routes a duration pick to the flexible window. No-op while closed.
    pub fn set_duration(&mut self, class: DurationClass) {
        if let Some(pending) = &mut self.pending {
            pending.flexible.set_duration(class);
        }
    }

    /// Routes a month toggle to the flexible window. No-op while closed.
    pub fn toggle_month(&mut self, month: MonthName) {
        if let Some(pending) = &mut self.pending {
            pending.flexible.toggle_month(month);
        }
    }

    /// Whether Apply would commit. The dates tab needs at least a start
    /// day; the flexible tab commits anything, even nothing.
    pub fn can_apply(&self) -> bool {
        match &self.pending {
            Some(pending) => match pending.active_tab {
                Tab::Dates => pending.dates.start().is_some(),
                Tab::Flexible => true,
            },
            None => false,
        }
    }

    /// Commits the active tab's pending work: encodes it, stores the
    /// token, fires the change callback once, and closes. Returns false
    /// (leaving the dropdown open and silent) when Apply is unavailable.
    pub fn apply(&mut self) -> bool {
        if !self.can_apply() {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let token = match pending.active_tab {
            Tab::Dates => Selection::Exact(pending.dates).encode(),
            Tab::Flexible => Selection::Flexible(pending.flexible).encode(),
        };
        (self.on_change)(&token);
        self.committed = token;
        true
    }

    /// Discards pending work and closes. The committed token stands and
    /// the callback does not fire. Also the outside-click path.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Resets the committed token to empty and fires the callback with
    /// `""` immediately, in any state. Bypasses the open/close cycle:
    /// pending work in progress is left untouched.
    pub fn clear(&mut self) {
        self.committed = String::new();
        (self.on_change)("");
    }

    /// The month pane currently shown.
    pub const fn visible_month(&self) -> MonthAnchor {
        self.visible_month
    }

    /// Pages the visible month forward or backward.
    pub fn navigate_month(&mut self, delta: i32) {
        self.visible_month = self.visible_month.navigate(delta);
    }

    /// The 42-cell grid of the visible month, with past days disabled.
    pub fn grid(&self) -> Vec<Option<CalendarDay>> {
        self.visible_month.grid(self.clock.today())
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for DropdownController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownController")
            .field("clock", &self.clock)
            .field("committed", &self.committed)
            .field("visible_month", &self.visible_month)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
