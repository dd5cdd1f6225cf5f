use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::music::pitch::DEFAULT_NOTES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "GridConfig::default_rows")]
    pub rows: usize,
    #[serde(default = "GridConfig::default_cols")]
    pub cols: usize,
}

impl GridConfig {
    fn default_rows() -> usize {
        8
    }
    fn default_cols() -> usize {
        14
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: Self::default_rows(),
            cols: Self::default_cols(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchConfig {
    #[serde(default = "PitchConfig::default_notes")]
    pub notes: Vec<u8>,
}

impl PitchConfig {
    fn default_notes() -> Vec<u8> {
        DEFAULT_NOTES.to_vec()
    }
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            notes: Self::default_notes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between successive notes during audition.
    #[serde(default = "PlaybackConfig::default_note_gap_ms")]
    pub note_gap_ms: u64,
    /// Cadence of the evolve loop while running.
    #[serde(default = "PlaybackConfig::default_generation_period_ms")]
    pub generation_period_ms: u64,
    /// Probability that a cell comes up alive when randomizing.
    #[serde(default = "PlaybackConfig::default_fill_density")]
    pub fill_density: f64,
}

impl PlaybackConfig {
    fn default_note_gap_ms() -> u64 {
        300
    }
    fn default_generation_period_ms() -> u64 {
        100
    }
    fn default_fill_density() -> f64 {
        0.5
    }

    pub fn note_gap(&self) -> Duration {
        Duration::from_millis(self.note_gap_ms)
    }

    pub fn generation_period(&self) -> Duration {
        Duration::from_millis(self.generation_period_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            note_gap_ms: Self::default_note_gap_ms(),
            generation_period_ms: Self::default_generation_period_ms(),
            fill_density: Self::default_fill_density(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub pitches: PitchConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                let commented = Self::comment_out_values(&text);
                if let Err(err) = fs::write(path_obj, commented) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }

    /// Keep section headers, comment out every value line so the file
    /// documents the defaults without pinning them.
    fn comment_out_values(text: &str) -> String {
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                commented.push_str("# ");
                commented.push_str(line);
                commented.push('\n');
            }
        }
        commented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "cellsong_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.grid.rows, 8);
        assert_eq!(cfg.grid.cols, 14);
        assert_eq!(cfg.playback.note_gap_ms, 300);
        assert_eq!(cfg.playback.generation_period_ms, 100);
        assert_eq!(cfg.playback.fill_density, 0.5);
        assert_eq!(cfg.pitches.notes.first(), Some(&55));
        assert_eq!(cfg.pitches.notes.last(), Some(&77));

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(contents.contains("[grid]"));
        assert!(
            contents.contains("# rows = 8"),
            "should write commented rows"
        );
        assert!(
            contents.contains("# note_gap_ms = 300"),
            "should write commented note gap"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        let path_str = path.to_string_lossy().to_string();
        let custom = AppConfig {
            grid: GridConfig { rows: 4, cols: 6 },
            pitches: PitchConfig {
                notes: vec![60, 62, 64],
            },
            playback: PlaybackConfig {
                note_gap_ms: 120,
                generation_period_ms: 250,
                fill_density: 0.3,
            },
        };
        let text = toml::to_string_pretty(&custom).unwrap();
        fs::write(&path, text).unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.grid.rows, 4);
        assert_eq!(cfg.grid.cols, 6);
        assert_eq!(cfg.pitches.notes, vec![60, 62, 64]);
        assert_eq!(cfg.playback.note_gap_ms, 120);
        assert_eq!(cfg.playback.generation_period_ms, 250);
        assert_eq!(cfg.playback.fill_density, 0.3);

        let _ = fs::remove_file(&path);
    }
}
