use crate::application::{Config, SelectionController};
use crate::domain::{
    Clock, DateInterval, PresetCatalog, RangeError, RangeResolver, SelectionInput, SystemClock,
    parse_day, start_of_day,
};
use crate::infrastructure::{CatalogFile, FilterStore};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct PresetListing {
    pub id: String,
    pub label: String,
    pub range: Result<DateInterval, RangeError>,
}

pub struct SelectorApp {
    catalog: PresetCatalog,
    clock: Box<dyn Clock>,
}

impl SelectorApp {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let catalog = CatalogFile::new(&config.catalog_path).load_or_standard()?;
        Ok(Self::with_catalog(catalog))
    }

    pub fn with_catalog(catalog: PresetCatalog) -> Self {
        Self {
            catalog,
            clock: Box::new(SystemClock),
        }
    }

    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    fn resolver(&self) -> RangeResolver<'_> {
        RangeResolver::with_clock(&self.catalog, &*self.clock)
    }

    pub fn list_presets(&self) -> Vec<PresetListing> {
        let resolver = self.resolver();
        self.catalog
            .iter()
            .map(|preset| PresetListing {
                id: preset.id.to_string(),
                label: preset.label.clone(),
                range: resolver.resolve(&SelectionInput::Preset(preset.id.clone())),
            })
            .collect()
    }

    /// Run one selection into a fresh filter store.
    pub fn select_once(&self, input: &SelectionInput) -> Result<FilterStore> {
        let mut controller = SelectionController::new(self.resolver(), FilterStore::new());
        if let Err(e) = controller.select(input) {
            log::warn!("selection rejected: {e}");
            return Err(e.into());
        }
        Ok(controller.into_publisher())
    }

    /// Line-driven session against a single controller.
    pub fn run_shell(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut controller = SelectionController::new(self.resolver(), FilterStore::new());

        for line in input.lines() {
            let line = line?;
            let words: Vec<&str> = line.split_whitespace().collect();

            match words.as_slice() {
                [] => continue,
                ["quit"] | ["exit"] => break,
                ["toggle"] => {
                    let expanded = controller.toggle();
                    writeln!(output, "expanded: {expanded}")?;
                }
                ["collapse"] => {
                    controller.collapse();
                    writeln!(output, "expanded: false")?;
                }
                ["state"] => {
                    let filters = controller.publisher();
                    writeln!(
                        output,
                        "expanded: {}, start_date: {}, end_date: {}",
                        controller.expanded(),
                        filters.start_date.as_deref().unwrap_or("-"),
                        filters.end_date.as_deref().unwrap_or("-"),
                    )?;
                }
                ["presets"] => {
                    for preset in controller.resolver().catalog() {
                        writeln!(output, "{}\t{}", preset.id, preset.label)?;
                    }
                }
                ["select", id] => {
                    let result = controller.select(&SelectionInput::preset(*id));
                    report(&mut output, result)?;
                }
                ["range", start, end] => {
                    let result = parse_day(start).and_then(|start_day| {
                        let end_day = parse_day(end)?;
                        controller.select(&SelectionInput::explicit(
                            start_of_day(start_day),
                            start_of_day(end_day),
                        ))
                    });
                    report(&mut output, result)?;
                }
                _ => writeln!(output, "unknown command: {line}")?,
            }
        }

        Ok(())
    }

    /// Write the standard presets to the configured catalog path.
    ///
    /// Does not read the existing file, so a corrupt catalog can be replaced.
    pub fn init_catalog(config: &Config, force: bool) -> Result<PathBuf> {
        let file = CatalogFile::new(&config.catalog_path);
        if file.exists() && !force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                file.path().display()
            );
        }

        file.write_standard()?;
        log::info!("wrote standard presets to {}", file.path().display());
        Ok(file.path().to_path_buf())
    }
}

fn report(output: &mut impl Write, result: Result<DateInterval, RangeError>) -> Result<()> {
    match result {
        Ok(interval) => writeln!(output, "selected {interval}")?,
        Err(e) => {
            log::warn!("selection rejected: {e}");
            writeln!(output, "error: {e}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::fixtures::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn app() -> SelectorApp {
        let mut app = SelectorApp::with_catalog(last7_catalog());
        app.set_clock(fixed_clock());
        app
    }

    fn shell(app: &SelectorApp, script: &str) -> String {
        let mut out = Vec::new();
        app.run_shell(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn select_once_fills_filters() {
        let filters = app()
            .select_once(&SelectionInput::preset("last7"))
            .unwrap();
        assert_eq!(filters.range(), Some(("2024-01-01", "2024-01-08")));
    }

    #[test]
    fn select_once_surfaces_range_error() {
        let err = app()
            .select_once(&SelectionInput::preset("nope"))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RangeError>(),
            Some(&RangeError::UnknownPreset("nope".to_string()))
        );
    }

    #[test]
    fn list_presets_resolves_each() {
        let listings = app().list_presets();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "last7");
        assert_eq!(
            listings[0].range.as_ref().map(|r| r.to_string()),
            Ok("2024-01-01 .. 2024-01-08".to_string())
        );
    }

    #[test]
    fn shell_session() {
        let out = shell(
            &app(),
            "toggle\nrange 2024-03-10 2024-03-01\nstate\nselect last7\nstate\nquit\ntoggle\n",
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "expanded: true");
        assert!(lines[1].starts_with("error: end date"));
        assert_eq!(lines[2], "expanded: true, start_date: -, end_date: -");
        assert_eq!(lines[3], "selected 2024-01-01 .. 2024-01-08");
        assert_eq!(
            lines[4],
            "expanded: false, start_date: 2024-01-01, end_date: 2024-01-08"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn shell_reports_malformed_dates_and_unknown_commands() {
        let out = shell(&app(), "range 2024-3-1 2024-03-02\nfrobnicate\n");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "error: `2024-3-1` is not a YYYY-MM-DD date");
        assert_eq!(lines[1], "unknown command: frobnicate");
    }

    #[test]
    fn init_catalog_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_catalog(dir.path().join("presets.json"));

        let path = SelectorApp::init_catalog(&config, false).unwrap();
        assert!(path.exists());
        assert!(SelectorApp::init_catalog(&config, false).is_err());
        assert!(SelectorApp::init_catalog(&config, true).is_ok());

        let reloaded = SelectorApp::with_config(Config::with_catalog(&path)).unwrap();
        assert_eq!(reloaded.catalog(), &PresetCatalog::standard());
    }

    #[test]
    fn init_catalog_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = Config::with_catalog(&path);

        assert!(SelectorApp::with_config(Config::with_catalog(&path)).is_err());
        assert!(SelectorApp::init_catalog(&config, false).is_err());

        SelectorApp::init_catalog(&config, true).unwrap();
        let repaired = SelectorApp::with_config(config).unwrap();
        assert_eq!(repaired.catalog(), &PresetCatalog::standard());
    }
}
