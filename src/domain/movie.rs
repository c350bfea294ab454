//! Movies owned by the library service.

use serde::{Deserialize, Serialize};

/// Bytes per gigabyte used for every size conversion in a report (2^30)
pub const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// A movie in the library, as reported by Radarr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// TMDB identifier, the key for availability lookups
    pub tmdb_id: u64,

    /// Display title
    pub title: String,

    /// Size of the movie's files on disk in bytes
    pub size_on_disk: u64,

    /// Release year (if known)
    #[serde(default)]
    pub year: Option<u32>,

    /// Whether a file has been downloaded for this movie
    #[serde(default)]
    pub has_file: bool,
}

impl Movie {
    /// Create a movie with just the fields the report needs
    pub fn new(tmdb_id: u64, title: impl Into<String>, size_on_disk: u64) -> Self {
        Self {
            tmdb_id,
            title: title.into(),
            size_on_disk,
            year: None,
            has_file: size_on_disk > 0,
        }
    }

    /// Size on disk in gigabytes, rounded to two decimals
    pub fn size_gb(&self) -> f64 {
        round_gb(self.size_on_disk as f64 / BYTES_PER_GB)
    }
}

/// Round a gigabyte figure to two decimal places, ties to even
pub fn round_gb(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_radarr_movie() {
        let json = r#"{
            "id": 12,
            "title": "Arrival",
            "year": 2016,
            "tmdbId": 329865,
            "hasFile": true,
            "sizeOnDisk": 4294967296,
            "monitored": true
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.tmdb_id, 329865);
        assert_eq!(movie.title, "Arrival");
        assert_eq!(movie.year, Some(2016));
        assert!(movie.has_file);
        assert_eq!(movie.size_gb(), 4.0);
    }

    #[test]
    fn test_missing_size_is_rejected() {
        let json = r#"{"title": "Arrival", "tmdbId": 329865}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_size_gb_rounding() {
        assert_eq!(Movie::new(1, "empty", 0).size_gb(), 0.0);
        assert_eq!(Movie::new(1, "two", 1 << 31).size_gb(), 2.0);
        // 1.5 GiB + 5 MiB = 1.5048828125 GB
        let movie = Movie::new(1, "odd", (3 << 29) + (5 << 20));
        assert_eq!(movie.size_gb(), 1.5);
    }

    #[test]
    fn test_round_gb() {
        assert_eq!(round_gb(3.14159), 3.14);
        assert_eq!(round_gb(2.999), 3.0);
        assert_eq!(round_gb(0.004), 0.0);
    }

    #[test]
    fn test_round_gb_ties_to_even() {
        assert_eq!(round_gb(0.125), 0.12);
        assert_eq!(round_gb(0.375), 0.38);
        assert_eq!(round_gb(0.625), 0.62);
        assert_eq!(round_gb(1.125), 1.12);
    }
}
