#![warn(clippy::pedantic)]

use std::{fs, io::Write, path::Path};

use anyhow::Context;
use log::{debug, info};

use fitrack_domain::Package;

pub mod logger;
pub mod settings;

pub use settings::Settings;

#[must_use]
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// # Errors
///
/// Returns an error if the file cannot be read or does not contain a list of packages.
pub fn read_batch(path: &Path) -> anyhow::Result<Vec<Package>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse batch file {}", path.display()))
}

/// Prints one summary line per package.
///
/// Processing stops at the first invalid package; lines of the preceding packages are already
/// written at that point.
///
/// # Errors
///
/// Returns an error if a package cannot be read or the output cannot be written.
pub fn process(packages: &[Package], out: &mut impl Write) -> anyhow::Result<()> {
    for (index, package) in packages.iter().enumerate() {
        let training = package
            .read()
            .with_context(|| format!("invalid package #{index} ({:?})", package.code))?;
        writeln!(out, "{}", training.training_info())?;
    }
    info!("processed {} packages", packages.len());
    Ok(())
}

/// # Errors
///
/// Returns an error if the batch cannot be loaded or processed.
pub fn run(settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let packages = match &settings.batch {
        Some(path) => {
            debug!("reading packages from {}", path.display());
            read_batch(path)?
        }
        None => default_packages(),
    };
    process(&packages, out)
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use fitrack_domain::PackageError;

    use super::*;

    const SWIMMING: &str = "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.";
    const RUNNING: &str = "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.";
    const SPORTS_WALKING: &str = "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.";

    #[test]
    fn test_run_default_packages() {
        let mut out = Vec::new();
        run(&Settings::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{SWIMMING}\n{RUNNING}\n{SPORTS_WALKING}\n")
        );
    }

    #[test]
    fn test_process_stops_at_unknown_workout() {
        let mut out = Vec::new();
        let packages = [
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("XYZ", &[1.0, 1.0, 1.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let error = process(&packages, &mut out).unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{RUNNING}\n"));
        assert_eq!(error.to_string(), "invalid package #1 (\"XYZ\")");
        assert_eq!(
            error.downcast_ref::<PackageError>(),
            Some(&PackageError::UnknownWorkout("XYZ".to_string()))
        );
    }

    #[test]
    fn test_process_no_packages() {
        let mut out = Vec::new();
        process(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[rstest]
    #[case::packages(
        r#"[{"code": "WLK", "data": [9000, 1, 75, 180]}, {"code": "SWM", "data": [720, 1, 80, 25, 40]}]"#,
        Some(vec![
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ])
    )]
    #[case::empty("[]", Some(vec![]))]
    #[case::missing_data(r#"[{"code": "RUN"}]"#, None)]
    #[case::not_json("RUN 15000 1 75", None)]
    fn test_read_batch(#[case] content: &str, #[case] expected: Option<Vec<Package>>) {
        let path = temp_file(content);
        let result = read_batch(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(result.ok(), expected);
    }

    #[test]
    fn test_read_batch_missing_file() {
        let path = env::temp_dir().join("fitrack-missing-batch.json");
        assert!(
            read_batch(&path)
                .unwrap_err()
                .to_string()
                .starts_with("failed to read batch file")
        );
    }

    #[test]
    fn test_run_batch_file() {
        let path = temp_file(r#"[{"code": "RUN", "data": [15000, 1, 75]}]"#);
        let mut out = Vec::new();
        let result = run(
            &Settings {
                batch: Some(path.clone()),
                ..Settings::default()
            },
            &mut out,
        );
        let _ = fs::remove_file(&path);
        result.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{RUNNING}\n"));
    }

    #[test]
    fn test_run_with_logger_stops_at_unknown_workout() {
        let _ = logger::init(LevelFilter::Trace);
        let path = temp_file(
            r#"[{"code": "SWM", "data": [720, 1, 80, 25, 40]}, {"code": "XYZ", "data": [1, 1, 1]}]"#,
        );
        let mut out = Vec::new();
        let result = run(
            &Settings {
                log_level: LevelFilter::Trace,
                batch: Some(path.clone()),
            },
            &mut out,
        );
        let _ = fs::remove_file(&path);
        let error = result.unwrap_err();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{SWIMMING}\n"));
        assert_eq!(error.to_string(), "invalid package #1 (\"XYZ\")");
        assert_eq!(
            error.downcast_ref::<PackageError>(),
            Some(&PackageError::UnknownWorkout("XYZ".to_string()))
        );
    }

    fn temp_file(content: &str) -> PathBuf {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static COUNTER: AtomicUsize = AtomicUsize::new(0);

        let path = env::temp_dir().join(format!(
            "fitrack-{}-{}.json",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&path, content).unwrap();
        path
    }
}
