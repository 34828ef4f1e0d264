use serde::{Deserialize, Serialize};

use crate::modules::{Location, LocationMode};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fixtures: FixtureConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Seed data for the in-memory privacy modules of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Whether the first `UseHiddenIp` must go through the VPN consent prompt.
    #[serde(default = "default_true")]
    pub require_vpn_consent: bool,
    /// Global tracker blocking ("quick privacy") at startup.
    #[serde(default = "default_true")]
    pub blocking_enabled: bool,
    #[serde(default)]
    pub apps: Vec<AppFixture>,
    #[serde(default)]
    pub permissions: Vec<PermissionFixture>,
    #[serde(default)]
    pub trackers: Vec<TrackerFixture>,
    /// Packages whose trackers are never blocked.
    #[serde(default)]
    pub whitelisted: Vec<String>,
    #[serde(default)]
    pub fake_location: Option<FakeLocationFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppFixture {
    pub package_name: String,
    pub uid: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionFixture {
    pub id: String,
    pub label: String,
    /// Packages holding the permission.
    #[serde(default)]
    pub allowed: Vec<String>,
    /// Packages that requested it and were denied.
    #[serde(default)]
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerFixture {
    pub id: String,
    pub name: String,
    pub hostname: String,
    /// Packages that contact this tracker.
    #[serde(default)]
    pub apps: Vec<String>,
    /// Subset of `apps` for which the tracker is blocked.
    #[serde(default)]
    pub blocked: Vec<String>,
    #[serde(default)]
    pub calls: u64,
    #[serde(default)]
    pub blocked_calls: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FakeLocationFixture {
    pub mode: LocationMode,
    pub latitude: f64,
    pub longitude: f64,
}

/// Fake location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Candidates for "random location".
    #[serde(default = "default_random_cities")]
    pub random_cities: Vec<City>,
    /// Seed for random city selection; entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn city(name: &str, latitude: f64, longitude: f64) -> City {
    City {
        name: name.to_string(),
        latitude,
        longitude,
    }
}

fn default_random_cities() -> Vec<City> {
    vec![
        city("Barcelona", 41.3851, 2.1734),
        city("Berlin", 52.5200, 13.4050),
        city("Buenos Aires", -34.6037, -58.3816),
        city("Lagos", 6.5244, 3.3792),
        city("Montreal", 45.5017, -73.5673),
        city("Osaka", 34.6937, 135.5023),
        city("Paris", 48.8566, 2.3522),
        city("Sydney", -33.8688, 151.2093),
    ]
}

fn app(package_name: &str, uid: u32, label: &str) -> AppFixture {
    AppFixture {
        package_name: package_name.to_string(),
        uid,
        label: label.to_string(),
    }
}

fn packages(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            require_vpn_consent: true,
            blocking_enabled: true,
            apps: vec![
                app("org.example.maps", 10101, "Maps"),
                app("org.example.camera", 10102, "Camera"),
                app("org.example.news", 10103, "News"),
                app("org.example.chat", 10104, "Chat"),
            ],
            permissions: vec![
                PermissionFixture {
                    id: "android.permission.ACCESS_FINE_LOCATION".to_string(),
                    label: "Location".to_string(),
                    allowed: packages(&["org.example.maps"]),
                    ignored: packages(&["org.example.news"]),
                },
                PermissionFixture {
                    id: "android.permission.CAMERA".to_string(),
                    label: "Camera".to_string(),
                    allowed: packages(&["org.example.camera", "org.example.chat"]),
                    ignored: Vec::new(),
                },
                PermissionFixture {
                    id: "android.permission.RECORD_AUDIO".to_string(),
                    label: "Microphone".to_string(),
                    allowed: packages(&["org.example.chat"]),
                    ignored: packages(&["org.example.camera"]),
                },
            ],
            trackers: vec![
                TrackerFixture {
                    id: "adtrack".to_string(),
                    name: "AdTrack".to_string(),
                    hostname: "collect.adtrack.example".to_string(),
                    apps: packages(&["org.example.news", "org.example.maps"]),
                    blocked: packages(&["org.example.news"]),
                    calls: 120,
                    blocked_calls: 80,
                },
                TrackerFixture {
                    id: "crashbeacon".to_string(),
                    name: "CrashBeacon".to_string(),
                    hostname: "beacon.crash.example".to_string(),
                    apps: packages(&["org.example.chat"]),
                    blocked: Vec::new(),
                    calls: 14,
                    blocked_calls: 0,
                },
            ],
            whitelisted: Vec::new(),
            fake_location: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            random_cities: default_random_cities(),
            rng_seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
