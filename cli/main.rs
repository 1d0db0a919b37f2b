//! This module contains the main entrypoint to the sieve cli.

use anyhow::{bail, Context, Result};
use clap::Clap;
use colored::Colorize;
use sieve_core::report::Report;
use sieve_util::table::Table;
use std::path::PathBuf;

#[derive(Clap)]
#[clap(
	about = "Explore how a confidence threshold trades accuracy against hidden predictions.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "eval")]
	Eval(Box<EvalOptions>),
	#[cfg(feature = "app")]
	#[clap(name = "app")]
	App(Box<AppOptions>),
}

#[derive(Clap)]
#[clap(about = "evaluate a results csv")]
#[clap(long_about = "compute threshold metrics from a csv of classification results")]
struct EvalOptions {
	#[clap(
		short,
		long,
		about = "the path to your .csv file, omit to use the bundled sample data"
	)]
	file: Option<PathBuf>,
	#[clap(
		short,
		long,
		about = "the confidence threshold to report at",
		default_value = "0.5"
	)]
	threshold: f32,
	#[clap(long, about = "print the report as json")]
	json: bool,
}

#[cfg(feature = "app")]
#[derive(Clap)]
#[clap(about = "run the app")]
#[clap(long_about = "run the health check web app")]
struct AppOptions {
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
}

fn main() {
	let options = Options::parse();
	let result = match options {
		Options::Eval(options) => cli_eval(*options),
		#[cfg(feature = "app")]
		Options::App(options) => cli_app(*options),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_eval(options: EvalOptions) -> Result<()> {
	if !(0.0..=1.0).contains(&options.threshold) {
		bail!("threshold must be a number between 0 and 1");
	}
	let records = match &options.file {
		Some(file) => sieve_core::load::from_path(file).with_context(|| {
			format!(
				"failed to load {}, ensure your csv has the required columns: {}",
				file.display(),
				sieve_core::load::REQUIRED_COLUMNS.join(", "),
			)
		})?,
		None => sieve_core::sample::sample_records(),
	};
	let report = sieve_core::report::compute(&records, options.threshold);
	if options.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&report);
	}
	Ok(())
}

#[cfg(feature = "app")]
fn cli_app(options: AppOptions) -> Result<()> {
	sieve_app::run(sieve_app::Options {
		host: options.host,
		port: options.port,
	})
}

fn print_report(report: &Report) {
	println!(
		"accuracy {:.2}% at threshold {:.2}",
		report.metrics.accuracy, report.threshold
	);
	println!(
		"{} of {} samples at or above the threshold, {} of them correct",
		report.metrics.samples_above_threshold,
		report.metrics.total_samples,
		report.metrics.correct_predictions
	);
	println!();
	println!("confusion matrix (at or above threshold, binary classes only)");
	let mut table = Table::new(vec![
		"".to_owned(),
		"correct".to_owned(),
		"incorrect".to_owned(),
	]);
	table.add_row(vec![
		"predicted positive".to_owned(),
		report.confusion_matrix.true_positives.to_string(),
		report.confusion_matrix.false_positives.to_string(),
	]);
	table.add_row(vec![
		"predicted negative".to_owned(),
		report.confusion_matrix.true_negatives.to_string(),
		report.confusion_matrix.false_negatives.to_string(),
	]);
	println!("{}", table);
	println!("accuracy by threshold");
	let mut table = Table::new(vec![
		"threshold".to_owned(),
		"accuracy".to_owned(),
		"shown".to_owned(),
		"hidden".to_owned(),
	]);
	for point in report.accuracy_by_threshold.iter() {
		table.add_row(vec![
			format!("{:.2}", point.threshold),
			format!("{:.2}", point.accuracy),
			point.count.to_string(),
			(point.total_count - point.count).to_string(),
		]);
	}
	println!("{}", table);
	println!(
		"max accuracy {:.2}% at threshold {:.2}, hiding {} samples ({:.1}%)",
		report.max_accuracy.value,
		report.max_accuracy.threshold,
		report.max_accuracy.samples_hidden_count,
		report.max_accuracy.samples_hidden_percent
	);
	println!(
		"{} samples ({:.1}%) fall below the current threshold, including {} correct predictions that are hidden with them",
		report.below_threshold.count, report.below_threshold.percent, report.below_threshold.correct_count
	);
	println!(
		"{} incorrect predictions below the threshold count as correct, because hiding them prevents wrong outputs",
		report.below_threshold.count - report.below_threshold.correct_count
	);
	println!();
	println!("method {}: {}", report.method_id, report.method_description);
	if !report.results.is_empty() {
		println!();
		println!("results at or above the threshold");
		let mut table = Table::new(vec![
			"query".to_owned(),
			"ground truth".to_owned(),
			"predicted".to_owned(),
			"correct".to_owned(),
			"confidence".to_owned(),
		]);
		for row in report.results.iter() {
			table.add_row(vec![
				row.query.clone(),
				row.ground_truth_class.clone(),
				row.predicted_class.clone(),
				row.was_correct.to_string(),
				format!("{:.2}", row.confidence),
			]);
		}
		println!("{}", table);
	}
}
