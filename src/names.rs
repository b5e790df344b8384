pub const HOME_URL: &str = "/";
pub const QUIZ_URL: &str = "/quiz";
pub const START_QUIZ_URL: &str = "/quiz/start";
pub const SUBMIT_ANSWER_URL: &str = "/quiz/answer";
pub const RESULTS_URL: &str = "/quiz/results";
pub const CONTACT_URL: &str = "/contact";
pub const NEWSLETTER_URL: &str = "/newsletter";
pub const SLEEP_URL: &str = "/sleep";

pub const QUIZ_SESSION_COOKIE_NAME: &str = "quiz_session";
pub const QUIZ_SESSION_MAX_AGE_SECS: u64 = 60 * 60;
pub const SLEEP_LOG_COOKIE_NAME: &str = "sleep_log";
pub const SLEEP_LOG_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

// Section anchors on the landing page
pub const FEATURES_ANCHOR: &str = "features";
pub const CONTACT_ANCHOR: &str = "contact";
pub const SLEEP_TRACKER_ID: &str = "sleep-tracker";

// Defaults
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";
pub const DEFAULT_CHATBOT_DELAY_MS: u64 = 500;
pub const DEFAULT_MAX_QUIZ_SESSIONS: usize = 10_000;
