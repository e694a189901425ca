//! threadline-inspect: walk the upload wizard over local files.
//!
//! Feeds the given front/back reference images through the same intake
//! and wizard transitions the web app uses, then reports what the
//! review step would show.  Useful for:
//!
//! - Checking which format and dimensions the probe reports for a file
//! - Trying a custom template catalog before shipping it
//! - Reproducing navigation guard refusals without a browser
//!
//! # Usage
//!
//! ```text
//! cargo run --bin threadline-inspect -- --front front.png --template hoodie
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use threadline_core::{
    CatalogError, Dimensions, DisplayLocator, ImageInfo, LocatorFactory, Side, SourceFile,
    Template, TemplateCatalog, Wizard, WizardError, accept,
};

/// Walk the threadline upload wizard over local files.
///
/// Uploads the given reference images, selects a template, advances to
/// the review step, and prints the resulting job summary.
#[derive(Parser)]
#[command(name = "threadline-inspect", version)]
struct Cli {
    /// Front print reference image.
    #[arg(long)]
    front: Option<PathBuf>,

    /// Back print reference image.
    #[arg(long)]
    back: Option<PathBuf>,

    /// Template id to select (e.g. `tshirt`, `hoodie`, `sweatshirt`).
    #[arg(long)]
    template: Option<String>,

    /// JSON file with a template catalog to use instead of the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List the catalog's templates and exit.
    #[arg(long)]
    list_templates: bool,

    /// Output the job summary as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,
}

/// Errors that stop the walk-through.
#[derive(Debug, thiserror::Error)]
enum InspectError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template catalog could not be loaded or queried.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The wizard refused to advance.
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// A `file://` locator for an upload read from disk.
struct FileUrl(String);

impl DisplayLocator for FileUrl {
    fn href(&self) -> &str {
        &self.0
    }
}

/// Creates a [`FileUrl`] for the file at the wrapped path.
struct PathLocators<'a>(&'a Path);

impl LocatorFactory for PathLocators<'_> {
    type Locator = FileUrl;
    type Error = InspectError;

    fn create(&self, _file: &SourceFile, _info: &ImageInfo) -> Result<FileUrl, InspectError> {
        let absolute = std::fs::canonicalize(self.0).map_err(|source| InspectError::Read {
            path: self.0.to_path_buf(),
            source,
        })?;
        Ok(FileUrl(format!("file://{}", absolute.display())))
    }
}

/// One upload as shown on the review step.
#[derive(Debug, Serialize)]
struct JobUpload {
    side: Side,
    name: String,
    bytes: usize,
    media_type: Option<&'static str>,
    dimensions: Option<Dimensions>,
    locator: String,
}

/// Everything the review step would show.
#[derive(Debug, Serialize)]
struct JobSummary {
    template: Template,
    uploads: Vec<JobUpload>,
}

/// Load the catalog from `path`, or the built-in catalog when `None`.
fn load_catalog(path: Option<&Path>) -> Result<TemplateCatalog, InspectError> {
    let Some(path) = path else {
        return Ok(TemplateCatalog::default());
    };
    let json = std::fs::read_to_string(path).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TemplateCatalog::from_json(&json)?)
}

/// Read `path` and accept it as an upload.
fn upload_from_path(
    path: &Path,
) -> Result<threadline_core::UploadedFile<FileUrl>, InspectError> {
    let bytes = std::fs::read(path).map_err(|source| InspectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );
    accept(&PathLocators(path), SourceFile::new(name, bytes))
}

/// Drive the wizard from step 1 to the review step.
fn run(cli: &Cli, catalog: &TemplateCatalog) -> Result<JobSummary, InspectError> {
    let mut wizard = Wizard::new();

    for (side, path) in [(Side::Front, &cli.front), (Side::Back, &cli.back)] {
        if let Some(path) = path {
            let _ = wizard.set_upload(side, upload_from_path(path)?);
        }
    }
    wizard.advance()?;

    if let Some(ref id) = cli.template {
        wizard.select_template(catalog.get(id)?);
    }
    wizard.advance()?;

    // advance() only succeeds with a selection, so this lookup is by a known id.
    let template = match wizard.selected_template() {
        Some(id) => catalog.get(id.as_str())?.clone(),
        None => return Err(WizardError::NoTemplate.into()),
    };

    let uploads = wizard
        .results()
        .map(|(side, upload)| JobUpload {
            side,
            name: upload.file().name().to_owned(),
            bytes: upload.file().len(),
            media_type: upload.info().media_type,
            dimensions: upload.info().dimensions,
            locator: upload.href().to_owned(),
        })
        .collect();

    Ok(JobSummary { template, uploads })
}

fn print_catalog(catalog: &TemplateCatalog) {
    for template in catalog {
        eprintln!(
            "{:<12} {} {:<20} {}",
            template.id,
            template.glyph(),
            template.name,
            template.dimensions
        );
    }
}

fn print_report(summary: &JobSummary) {
    let template = &summary.template;
    eprintln!(
        "Template: {} {} ({}, {})",
        template.glyph(),
        template.name,
        template.id,
        template.dimensions
    );
    eprintln!();
    for upload in &summary.uploads {
        let media_type = upload.media_type.unwrap_or("unknown format");
        let dimensions = upload
            .dimensions
            .map_or_else(|| "unknown size".to_owned(), |d| d.to_string());
        eprintln!("{} Print Result: {}", upload.side, upload.name);
        eprintln!("  {media_type}, {dimensions}, {} bytes", upload.bytes);
        eprintln!("  {}", upload.locator);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.list_templates {
        print_catalog(&catalog);
        return ExitCode::SUCCESS;
    }

    let summary = match run(&cli, &catalog) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&summary);
    }

    ExitCode::SUCCESS
}
