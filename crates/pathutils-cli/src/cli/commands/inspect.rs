//! `pathutils inspect <target>` – decompose a file URL.

use super::{parse_folder, Output};
use anyhow::{Context, Result};
use pathutils_core::{DecodeOptions, FileUrl};
use serde::Serialize;

/// JSON shape printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub url: String,
    pub path: String,
    pub folder: String,
    pub basename: String,
    pub filename: String,
    pub extension: Option<String>,
}

impl InspectReport {
    pub fn new(file: &FileUrl) -> Self {
        Self {
            url: file.url().to_string(),
            path: file.path(),
            folder: file.folder().path(),
            basename: file.basename().to_string(),
            filename: file.filename().to_string(),
            extension: file.basename().extension().map(str::to_string),
        }
    }
}

/// Applies command-line overrides on top of the configured decode options.
pub(crate) fn effective_options(
    configured: &DecodeOptions,
    from_path: bool,
    base: Option<&str>,
) -> Result<DecodeOptions> {
    let mut options = configured.clone();
    if from_path {
        options.read_from_path = true;
    }
    if let Some(base) = base {
        options.base = Some(parse_folder(base)?);
    }
    Ok(options)
}

pub fn run_inspect(
    out: &Output,
    configured: &DecodeOptions,
    target: &str,
    from_path: bool,
    base: Option<&str>,
) -> Result<()> {
    let options = effective_options(configured, from_path, base)?;
    let file = options
        .decode(target)
        .with_context(|| format!("cannot inspect {target}"))?;
    tracing::debug!(url = %file, "inspected");
    out.print(&InspectReport::new(&file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_fields() {
        let file: FileUrl = "file:///tmp/my%20dir/archive.tar.gz".parse().unwrap();
        let report = InspectReport::new(&file);
        assert_eq!(report.url, "file:///tmp/my%20dir/archive.tar.gz");
        assert_eq!(report.path, "/tmp/my dir/archive.tar.gz");
        assert_eq!(report.folder, "/tmp/my dir");
        assert_eq!(report.basename, "archive.tar.gz");
        assert_eq!(report.filename, "archive.tar");
        assert_eq!(report.extension.as_deref(), Some("gz"));
    }

    #[test]
    fn overrides_enable_paths_and_base() {
        let options =
            effective_options(&DecodeOptions::strict(), true, Some("file:///srv/")).unwrap();
        assert!(options.read_from_path);
        let file = options.decode("data/x.csv").unwrap();
        assert_eq!(file.url().as_str(), "file:///srv/data/x.csv");
    }

    #[test]
    fn no_overrides_keep_config() {
        let configured = DecodeOptions::from_paths(None);
        let options = effective_options(&configured, false, None).unwrap();
        assert_eq!(options, configured);
    }

    #[test]
    fn directory_target_fails() {
        let out = Output { pretty: false };
        let err = run_inspect(&out, &DecodeOptions::strict(), "file:///tmp/", false, None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("directory"));
    }
}
