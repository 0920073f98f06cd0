//! Runs the fitting pipeline over the selected datasets and renders the results.

use std::fs;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::math::{
    coefficient_of_determination, linear_regression, regression_coefficient, Coordinate,
};
use crate::opts::{Format, Opts};
use crate::prelude::*;

pub struct Dataset {
    pub label: String,
    pub points: Vec<Coordinate>,
}

#[derive(Serialize)]
pub struct DatasetReport {
    pub label: String,
    pub fitted: Vec<Coordinate>,
    pub coefficient: f64,
    /// Absent when the observed `y` have no variance.
    pub r_squared: Option<f64>,
}

impl DatasetReport {
    #[instrument(skip_all, fields(label = dataset.label.as_str()))]
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let fitted =
            linear_regression(&dataset.points).context("failed to fit the regression line")?;
        let coefficient = regression_coefficient(&fitted)
            .context("failed to calculate the coefficient of regression")?;
        let r_squared = match coefficient_of_determination(&dataset.points, &fitted) {
            Ok(r_squared) => Some(r_squared),
            Err(error) => {
                warn!(
                    dataset = dataset.label.as_str(),
                    "failed to calculate the coefficient of determination: {}", error
                );
                None
            }
        };
        debug!(n_points = fitted.len(), coefficient, r_squared = ?r_squared, "fitted");

        Ok(Self {
            label: dataset.label.clone(),
            fitted,
            coefficient,
            r_squared,
        })
    }

    fn write_text(&self, writer: &mut impl Write) -> Result {
        writeln!(
            writer,
            "Linear Regression series for {}: [{}]",
            self.label,
            self.fitted.iter().join(", "),
        )?;
        writeln!(writer, "Coefficient of Regression: {}", self.coefficient)?;
        if let Some(r_squared) = self.r_squared {
            writeln!(writer, "Coefficient of Determination: {:.4}", r_squared)?;
        }
        Ok(())
    }
}

pub fn run(opts: &Opts) -> Result {
    let datasets = load_datasets(opts)?;
    render(&datasets, opts.format, &mut std::io::stdout().lock())
}

fn load_datasets(opts: &Opts) -> Result<Vec<Dataset>> {
    let mut datasets = opts
        .quartet()
        .iter()
        .map(|quartet| Dataset {
            label: quartet.label().to_string(),
            points: quartet.points().to_vec(),
        })
        .collect_vec();
    if let Some(path) = &opts.input {
        datasets.push(read_dataset(path)?);
    }
    Ok(datasets)
}

#[instrument(skip_all, fields(path = ?path))]
fn read_dataset(path: &Path) -> Result<Dataset> {
    let label = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("`{}` has no usable file name", path.display()))?
        .to_string();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let points: Vec<Coordinate> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    info!(label = label.as_str(), n_points = points.len(), "loaded");
    Ok(Dataset { label, points })
}

/// Reports every dataset that could be fitted, and fails afterwards if any could not.
fn render(datasets: &[Dataset], format: Format, writer: &mut impl Write) -> Result {
    let mut reports = Vec::with_capacity(datasets.len());
    let mut failed = Vec::new();

    for dataset in datasets {
        match DatasetReport::build(dataset) {
            Ok(report) => {
                if format == Format::Text {
                    report.write_text(writer)?;
                }
                reports.push(report);
            }
            Err(error) => {
                error!(dataset = dataset.label.as_str(), "{:#}", error);
                failed.push(format!("{} ({:#})", dataset.label, error));
            }
        }
    }

    if format == Format::Json {
        serde_json::to_writer_pretty(&mut *writer, &reports)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    if !failed.is_empty() {
        bail!(
            "{} of {} datasets failed: {}",
            failed.len(),
            datasets.len(),
            failed.join(", "),
        );
    }
    Ok(())
}
