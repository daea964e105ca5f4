// src/config/consts.rs

// Input
pub const DIRECTORY_FILE: &str = "directory.json";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const GEOCACHE_FILE: &str = "geocache.json";

// Geocoding provider
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const USER_AGENT: &str = "dirview/0.2 (student directory viewer)";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 1000; // provider policy: max 1 req/s

// Filter sentinel for the grade selector
pub const ALL_GRADES: &str = "All";

// Display
pub const PHONE_SEP: &str = ", ";
pub const PHOTO_WIDTH: f32 = 100.0;
