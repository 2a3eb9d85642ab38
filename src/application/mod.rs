pub mod session;
pub mod tracker;

pub use session::{
    collect_purchases, SessionError, SessionOutcome, SessionPolicy, SessionStats,
    UNKNOWN_SYMBOL_MESSAGE, INVALID_QUANTITY_MESSAGE, NON_POSITIVE_QUANTITY_MESSAGE,
    QUANTITY_OVERFLOW_MESSAGE,
};
pub use tracker::{
    PortfolioTracker, TrackerError, TrackerSettings, TrackerSummary, SAVE_PROMPT, WELCOME_MESSAGE,
};
