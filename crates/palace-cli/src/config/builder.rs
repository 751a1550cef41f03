use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use palace::engine::config as core_config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Values only the `tour` command can set directly from the command line.
#[derive(Debug, Default, Clone)]
pub struct TourOverrides {
    pub guestbook: Option<PathBuf>,
    pub pause_ms: Option<u64>,
}

/// Merges command-line flags, `--set` values, the config file and built-in defaults, in that order.
pub fn build_config(args: &ConfigArgs, overrides: &TourOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Configuration after --set overrides: {:?}", &file_config);

    let primes = file_config.primes.unwrap_or_default();
    let exhibits = file_config.exhibits.unwrap_or_default();
    let tour = file_config.tour.unwrap_or_default();

    let core_config = core_config::PalaceConfigBuilder::new()
        .prime_count(primes.count.unwrap_or(defaults.prime_count))
        .displayed_primes(primes.displayed.unwrap_or(defaults.displayed_primes))
        .spiral_size(primes.spiral_size.unwrap_or(defaults.spiral_size))
        .max_prime_count(primes.max_count.unwrap_or(defaults.max_prime_count))
        .max_spiral_size(primes.max_spiral_size.unwrap_or(defaults.max_spiral_size))
        .radial_size(exhibits.radial_size.unwrap_or(defaults.radial_size))
        .identity_size(exhibits.identity_size.unwrap_or(defaults.identity_size))
        .tree_depth(exhibits.tree_depth.unwrap_or(defaults.tree_depth))
        .fibonacci_terms(exhibits.fibonacci_terms.unwrap_or(defaults.fibonacci_terms))
        .sonata_movements(
            exhibits
                .sonata_movements
                .unwrap_or(defaults.sonata_movements),
        )
        .quicksort_input(exhibits.quicksort_input.unwrap_or(defaults.quicksort_input))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let guestbook_path = overrides
        .guestbook
        .clone()
        .or(tour.guestbook)
        .unwrap_or(defaults.guestbook);
    let pause_ms = overrides
        .pause_ms
        .or(tour.pause_ms)
        .unwrap_or(defaults.pause_ms);

    Ok(AppConfig {
        guestbook_path,
        pause: Duration::from_millis(pause_ms),
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let number = || -> Result<usize> {
            parser::parse_number(key, value_str).map_err(|e| CliError::Config(e.to_string()))
        };

        match key {
            "primes.count" => {
                config.primes.get_or_insert_with(Default::default).count = Some(number()?);
            }
            "primes.displayed" => {
                config.primes.get_or_insert_with(Default::default).displayed = Some(number()?);
            }
            "primes.spiral-size" => {
                config.primes.get_or_insert_with(Default::default).spiral_size = Some(number()?);
            }
            "primes.max-count" => {
                config.primes.get_or_insert_with(Default::default).max_count = Some(number()?);
            }
            "primes.max-spiral-size" => {
                config
                    .primes
                    .get_or_insert_with(Default::default)
                    .max_spiral_size = Some(number()?);
            }
            "exhibits.radial-size" => {
                config.exhibits.get_or_insert_with(Default::default).radial_size = Some(number()?);
            }
            "exhibits.identity-size" => {
                config
                    .exhibits
                    .get_or_insert_with(Default::default)
                    .identity_size = Some(number()?);
            }
            "exhibits.tree-depth" => {
                config.exhibits.get_or_insert_with(Default::default).tree_depth = Some(number()?);
            }
            "exhibits.fibonacci-terms" => {
                config
                    .exhibits
                    .get_or_insert_with(Default::default)
                    .fibonacci_terms = Some(number()?);
            }
            "exhibits.sonata-movements" => {
                config
                    .exhibits
                    .get_or_insert_with(Default::default)
                    .sonata_movements = Some(number()?);
            }
            "exhibits.quicksort-input" => {
                config
                    .exhibits
                    .get_or_insert_with(Default::default)
                    .quicksort_input = Some(
                    parser::parse_number_list(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "tour.guestbook" => {
                config.tour.get_or_insert_with(Default::default).guestbook =
                    Some(PathBuf::from(value_str));
            }
            "tour.pause-ms" => {
                config.tour.get_or_insert_with(Default::default).pause_ms = Some(
                    parser::parse_number(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_with(config: Option<PathBuf>, set_values: &[&str]) -> ConfigArgs {
        ConfigArgs {
            config,
            set_values: set_values.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let app = build_config(&ConfigArgs::default(), &TourOverrides::default()).unwrap();
        assert_eq!(app.core_config, core_config::PalaceConfig::default());
        assert_eq!(app.guestbook_path, PathBuf::from("guestbook.json"));
        assert_eq!(app.pause, Duration::from_millis(2000));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palace.toml");
        fs::write(
            &path,
            "[primes]\ncount = 300\nspiral-size = 7\n\n[tour]\npause-ms = 10\n",
        )
        .unwrap();

        let app = build_config(&args_with(Some(path), &[]), &TourOverrides::default()).unwrap();
        assert_eq!(app.core_config.primes.prime_count, 300);
        assert_eq!(app.core_config.primes.spiral_size, 7);
        assert_eq!(app.core_config.primes.displayed_primes, 50);
        assert_eq!(app.pause, Duration::from_millis(10));
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palace.toml");
        fs::write(&path, "[primes]\ncount = 300\n").unwrap();

        let app = build_config(
            &args_with(
                Some(path),
                &["primes.count=40", "exhibits.quicksort-input=3,1,2"],
            ),
            &TourOverrides::default(),
        )
        .unwrap();
        assert_eq!(app.core_config.primes.prime_count, 40);
        assert_eq!(app.core_config.exhibits.quicksort_input, vec![3, 1, 2]);
    }

    #[test]
    fn command_line_flags_override_everything() {
        let app = build_config(
            &args_with(None, &["tour.guestbook=from-set.json", "tour.pause-ms=5"]),
            &TourOverrides {
                guestbook: Some(PathBuf::from("from-flag.json")),
                pause_ms: Some(0),
            },
        )
        .unwrap();
        assert_eq!(app.guestbook_path, PathBuf::from("from-flag.json"));
        assert_eq!(app.pause, Duration::ZERO);
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let result = build_config(
            &args_with(None, &["ballroom.size=3"]),
            &TourOverrides::default(),
        );
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("ballroom.size")));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let result = build_config(
            &args_with(None, &["primes.count=lots"]),
            &TourOverrides::default(),
        );
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = build_config(&args_with(None, &["primes.count"]), &TourOverrides::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn out_of_range_values_surface_core_validation() {
        let result = build_config(
            &args_with(None, &["primes.spiral-size=5000"]),
            &TourOverrides::default(),
        );
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("spiral_size")));
    }

    #[test]
    fn oversized_exhibits_are_rejected_before_rendering() {
        let result = build_config(
            &args_with(None, &["exhibits.identity-size=100000"]),
            &TourOverrides::default(),
        );
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("identity_size")));

        let dir = tempdir().unwrap();
        let path = dir.path().join("palace.toml");
        fs::write(&path, "[exhibits]\nradial-size = 100000\n").unwrap();
        let result = build_config(&args_with(Some(path), &[]), &TourOverrides::default());
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("radial_size")));
    }
}
