//! Web interface components for the Token of Thanks client
//!
//! This module contains the Dioxus components that make up the web interface:
//! navigation, the public pages, the signed-in pages and the shared widgets.

/// Navigation bar component
mod navbar;
pub use navbar::Navbar;

/// Layout guarding the signed-in pages
mod guard;
pub use guard::RequireAuth;

/// Landing page
mod home;
pub use home::{Home, PageNotFound};

/// Sign-in and sign-up forms
mod login;
pub use login::Login;
mod register;
pub use register::Register;

/// Balance overview and recent activity
mod dashboard;
pub use dashboard::Dashboard;

/// Token transfer form
mod send;
pub use send::SendTokens;

/// Reward catalog
mod rewards;
pub use rewards::Rewards;

/// Paginated ledger
mod history;
pub use history::TransactionHistory;

/// Presentational widgets
mod widgets;
pub use widgets::{
    AnimatedButton, AnimatedGradient, GlassCard, InlineSpinner, LoadingSpinner,
    ParticlesBackground, Toaster,
};
