//! App Root Component
//!
//! Builds the three controllers, provides shared state, and switches
//! between the login form and the dashboard.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::pages::{DashboardPage, LoginPage};
use crate::state::session::{MockAuth, SessionController, UserProfile};
use crate::state::stats::{DashboardStats, JsEntropy, StatsController};
use crate::state::theme::{apply_document_theme, Theme, ThemeController};
use crate::storage::LocalStorage;

/// Stats refresh period, in milliseconds.
const STATS_REFRESH_MS: u32 = 30_000;

/// Which of the two mutually exclusive views is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

/// Shared state provided to all components.
#[derive(Clone)]
pub struct PortalState {
    /// Current view, written only by the login/logout flows.
    pub view: RwSignal<View>,
    /// Current theme, mirrored from the theme controller.
    pub theme: RwSignal<Theme>,
    /// Signed-in employee, if any.
    pub current_user: RwSignal<Option<UserProfile>>,
    /// Latest stats snapshot published by the refresh timer.
    pub stats: RwSignal<DashboardStats>,
    pub session: Rc<RefCell<SessionController<LocalStorage, MockAuth>>>,
    pub themes: Rc<RefCell<ThemeController<LocalStorage>>>,
    pub stats_ctl: Rc<RefCell<StatsController<JsEntropy>>>,
}

impl PortalState {
    /// Flip the theme and reapply it to the document.
    pub fn toggle_theme(&self) {
        let theme = self.themes.borrow_mut().toggle();
        apply_document_theme(theme);
        self.theme.set(theme);
    }

    /// Record a freshly authenticated user and show the dashboard.
    pub fn show_dashboard(&self) {
        let user = self.session.borrow().user().cloned();
        self.current_user.set(user);
        self.view.set(View::Dashboard);
    }

    /// Drop the session and return to the login form.
    pub fn logout(&self) {
        self.session.borrow_mut().logout();
        self.current_user.set(None);
        self.view.set(View::Login);
    }
}

/// Construct the controllers (theme, session, stats - in that order),
/// start the stats refresh timer, and provide the shared state to the
/// component tree.
pub fn provide_portal_state() {
    let themes = ThemeController::restore(LocalStorage);
    let session = SessionController::restore(LocalStorage, MockAuth::new());
    let stats_ctl = StatsController::new(JsEntropy);

    let theme = themes.theme();
    apply_document_theme(theme);

    let view = if session.is_authenticated() {
        View::Dashboard
    } else {
        View::Login
    };
    let current_user = session.user().cloned();

    let state = PortalState {
        view: create_rw_signal(view),
        theme: create_rw_signal(theme),
        current_user: create_rw_signal(current_user),
        stats: create_rw_signal(stats_ctl.stats()),
        session: Rc::new(RefCell::new(session)),
        themes: Rc::new(RefCell::new(themes)),
        stats_ctl: Rc::new(RefCell::new(stats_ctl)),
    };

    // The timer runs for the lifetime of the page and is never cancelled.
    // Every tick mutates the controller and publishes a snapshot; the DOM
    // only updates while the dashboard subtree is mounted, so values drift
    // silently off-screen and appear fully refreshed on the next login.
    let stats_ctl = Rc::clone(&state.stats_ctl);
    let stats = state.stats;
    gloo_timers::callback::Interval::new(STATS_REFRESH_MS, move || {
        stats.set(stats_ctl.borrow_mut().tick());
    })
    .forget();

    provide_context(state);
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_portal_state();
    let state = use_context::<PortalState>().expect("PortalState not found");

    view! {
        {move || match state.view.get() {
            View::Login => view! { <LoginPage /> }.into_view(),
            View::Dashboard => view! { <DashboardPage /> }.into_view(),
        }}
    }
}
