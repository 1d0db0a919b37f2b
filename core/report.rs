use sieve_metrics::{
	below_threshold, max_accuracy, sweep, visible_records, AccuracyMethod, ClassificationRecord,
	HideLowConfidence,
};

/// Everything a presentation layer needs for one (dataset, threshold) pair, as plain serializable data. Charts, tables, and controls consume this; no rendering logic lives here.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
	pub method_id: String,
	pub method_description: String,
	pub threshold: f32,
	pub metrics: Metrics,
	pub confusion_matrix: ConfusionMatrix,
	pub accuracy_by_threshold: Vec<AccuracyByThreshold>,
	pub max_accuracy: MaxAccuracy,
	pub below_threshold: BelowThreshold,
	pub results: Vec<ResultRow>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
	pub accuracy: f32,
	pub total_samples: usize,
	pub samples_above_threshold: usize,
	pub correct_predictions: usize,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
	pub true_positives: u64,
	pub false_positives: u64,
	pub true_negatives: u64,
	pub false_negatives: u64,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyByThreshold {
	pub threshold: f32,
	pub accuracy: f32,
	pub count: usize,
	pub total_count: usize,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxAccuracy {
	pub value: f32,
	pub threshold: f32,
	pub samples_hidden_count: usize,
	pub samples_hidden_percent: f32,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BelowThreshold {
	pub count: usize,
	pub percent: f32,
	pub correct_count: usize,
}

/// One row of the filtered results table: a record at or above the threshold, in descending confidence order.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
	pub query: String,
	pub ground_truth_class: String,
	pub predicted_class: String,
	pub was_correct: bool,
	pub confidence: f32,
}

/// Compute the report with the one shipped accuracy method.
pub fn compute(records: &[ClassificationRecord], threshold: f32) -> Report {
	compute_with_method(records, threshold, &HideLowConfidence)
}

/// Compute the report with a specific accuracy method. Pure: recompute whenever the dataset or the threshold changes.
pub fn compute_with_method(
	records: &[ClassificationRecord],
	threshold: f32,
	method: &dyn AccuracyMethod,
) -> Report {
	let output = method.evaluate(records, threshold);
	let curve = sweep(records, method);
	let max = max_accuracy(&curve);
	let below = below_threshold(records, threshold);
	let results = visible_records(records, threshold)
		.into_iter()
		.map(|record| ResultRow {
			query: record.query.clone(),
			ground_truth_class: record.ground_truth_class.clone(),
			predicted_class: record.predicted_class.clone(),
			was_correct: record.was_correct,
			confidence: record.confidence,
		})
		.collect();
	Report {
		method_id: method.id().to_owned(),
		method_description: method.description().to_owned(),
		threshold,
		metrics: Metrics {
			accuracy: output.accuracy,
			total_samples: output.total_samples,
			samples_above_threshold: output.samples_above_threshold,
			correct_predictions: output.correct_predictions,
		},
		confusion_matrix: ConfusionMatrix {
			true_positives: output.confusion_matrix.true_positives,
			false_positives: output.confusion_matrix.false_positives,
			true_negatives: output.confusion_matrix.true_negatives,
			false_negatives: output.confusion_matrix.false_negatives,
		},
		accuracy_by_threshold: curve
			.iter()
			.map(|point| AccuracyByThreshold {
				threshold: point.threshold,
				accuracy: point.accuracy,
				count: point.count,
				total_count: point.total_count,
			})
			.collect(),
		max_accuracy: MaxAccuracy {
			value: max.value,
			threshold: max.threshold,
			samples_hidden_count: max.samples_hidden_count,
			samples_hidden_percent: max.samples_hidden_percent,
		},
		below_threshold: BelowThreshold {
			count: below.count,
			percent: below.percent,
			correct_count: below.correct_count,
		},
		results,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_report() {
		let records = vec![
			ClassificationRecord::new("q1", "positive", "positive", true, 0.9),
			ClassificationRecord::new("q2", "positive", "negative", false, 0.3),
		];
		let report = compute(&records, 0.5);
		assert_eq!(report.method_id, "hide-low-confidence");
		assert_eq!(report.metrics.accuracy, 100.0);
		assert_eq!(report.metrics.samples_above_threshold, 1);
		assert_eq!(report.metrics.correct_predictions, 1);
		assert_eq!(report.confusion_matrix.true_positives, 1);
		assert_eq!(report.max_accuracy.value, 100.0);
		assert_eq!(report.max_accuracy.threshold, 0.35);
		assert_eq!(report.below_threshold.count, 1);
		assert_eq!(report.below_threshold.correct_count, 0);
		assert_eq!(report.results.len(), 1);
		assert_eq!(report.results[0].query, "q1");
	}

	#[test]
	fn test_report_empty_dataset() {
		let report = compute(&[], 0.5);
		assert_eq!(report.metrics.accuracy, 0.0);
		assert_eq!(report.metrics.total_samples, 0);
		assert!(report.accuracy_by_threshold.is_empty());
		assert_eq!(report.max_accuracy.value, 0.0);
		assert_eq!(report.below_threshold.percent, 0.0);
		assert!(report.results.is_empty());
	}

	#[test]
	fn test_report_serializes_camel_case() {
		let records = vec![ClassificationRecord::new("q1", "a", "a", true, 0.9)];
		let report = compute(&records, 0.5);
		let value = serde_json::to_value(&report).unwrap();
		assert!(value.get("confusionMatrix").is_some());
		assert!(value.get("accuracyByThreshold").is_some());
		assert!(value["metrics"].get("totalSamples").is_some());
		assert!(value["maxAccuracy"].get("samplesHiddenCount").is_some());
		assert!(value["belowThreshold"].get("correctCount").is_some());
		assert!(value["results"][0].get("groundTruthClass").is_some());
	}
}
