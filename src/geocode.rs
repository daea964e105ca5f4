// src/geocode.rs
//
// Address → coordinate resolution against the Nominatim search endpoint,
// with the persistent cache in front of it. One provider call per address
// for the lifetime of the cache file: hits and recorded misses are both
// skipped outright.
//
// The pass is sequential and blocking. Nominatim's usage policy caps
// clients at one request per second, so the rate limiter sits inside the
// HTTP client and sleeps between consecutive calls.

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::cache::{Coords, GeocodeCache};
use crate::config::consts::{NOMINATIM_URL, REQUEST_PAUSE_MS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::model::DisplayRow;
use crate::progress::Progress;

/// Provider seam. The GUI uses the Nominatim client; tests substitute a
/// fake that counts calls.
pub trait Geocoder {
    /// `Ok(None)` means the provider had no result for the address.
    fn geocode(&mut self, address: &str) -> Result<Option<(f64, f64)>, Box<dyn Error>>;
}

/// Enforces a minimum gap between consecutive calls.
pub struct RateLimiter {
    pause: Duration,
    last: Option<Instant>,
}

impl RateLimiter {
    pub fn new(pause: Duration) -> Self {
        Self { pause, last: None }
    }

    /// Sleep out whatever remains of the pause since the previous call.
    /// First call goes through immediately.
    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.pause {
                thread::sleep(self.pause - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

// Nominatim returns coordinates as JSON strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

pub struct NominatimClient {
    http: reqwest::blocking::Client,
    limiter: RateLimiter,
}

impl NominatimClient {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            limiter: RateLimiter::new(Duration::from_millis(REQUEST_PAUSE_MS)),
        })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&mut self, address: &str) -> Result<Option<(f64, f64)>, Box<dyn Error>> {
        self.limiter.wait();

        let hits: Vec<SearchHit> = self
            .http
            .get(NOMINATIM_URL)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;

        match hits.first() {
            Some(hit) => Ok(Some((hit.lat.parse()?, hit.lon.parse()?))),
            None => Ok(None),
        }
    }
}

/// Resolve every unique, non-empty, not-yet-cached address in `rows`, then
/// persist the cache if anything was added. Provider failures and empty
/// results both become permanent null entries — they are not errors here.
/// Returns the number of provider calls made.
pub fn resolve_rows(
    rows: &[DisplayRow],
    cache: &mut GeocodeCache,
    geocoder: &mut dyn Geocoder,
    mut progress: Option<&mut dyn Progress>,
) -> Result<usize, Box<dyn Error>> {
    let mut pending: Vec<&str> = Vec::new();
    for row in rows {
        let Some(addr) = row.address.as_deref() else { continue };
        if addr.is_empty() || cache.contains(addr) || pending.contains(&addr) {
            continue;
        }
        pending.push(addr);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pending.len());
    }

    let total = pending.len();
    for (i, addr) in pending.iter().enumerate() {
        let coords = match geocoder.geocode(addr) {
            Ok(Some((lat, lon))) => Coords::new(lat, lon),
            Ok(None) => {
                logd!("Geocode: no result for {:?}", addr);
                Coords::miss()
            }
            Err(e) => {
                loge!("Geocode: {:?} failed: {}", addr, e);
                Coords::miss()
            }
        };
        cache.insert(addr, coords);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i + 1, total);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    cache.save_if_dirty()?;
    Ok(total)
}

/// Copy cached coordinates onto each row with an address. Misses leave the
/// row's lat/lon absent, which keeps it off the map.
pub fn annotate_rows(rows: &mut [DisplayRow], cache: &GeocodeCache) {
    for row in rows.iter_mut() {
        let Some(addr) = row.address.as_deref() else { continue };
        if let Some(coords) = cache.lookup(addr) {
            row.lat = coords.lat;
            row.lon = coords.lon;
        }
    }
}
