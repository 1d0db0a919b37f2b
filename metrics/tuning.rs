use super::{ClassificationRecord, ThresholdPoint};
use num_traits::ToPrimitive;

/// The highest accuracy point on a sweep curve, together with how many samples choosing that threshold would hide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaxAccuracy {
	/// The accuracy as a percentage between 0 and 100.
	pub value: f32,
	pub threshold: f32,
	pub samples_hidden_count: usize,
	pub samples_hidden_percent: f32,
}

/// Scan `curve` for the point with the highest accuracy. Ties keep the earliest point. An empty curve produces the all zero value.
pub fn max_accuracy(curve: &[ThresholdPoint]) -> MaxAccuracy {
	let mut best_accuracy = 0.0;
	let mut best_threshold = 0.0;
	let mut best_count = 0;
	let mut best_total_count = 0;
	for point in curve.iter() {
		if point.accuracy > best_accuracy {
			best_accuracy = point.accuracy;
			best_threshold = point.threshold;
			best_count = point.count;
			best_total_count = point.total_count;
		}
	}
	let samples_hidden_count = best_total_count - best_count;
	// The max(1, ...) guards the division when the curve is empty.
	let samples_hidden_percent = 100.0 * samples_hidden_count.to_f32().unwrap()
		/ usize::max(1, best_total_count).to_f32().unwrap();
	MaxAccuracy {
		value: best_accuracy,
		threshold: best_threshold,
		samples_hidden_count,
		samples_hidden_percent,
	}
}

/// How many records fall strictly below `threshold`, what share of the dataset that is, and how many of them were actually correct. Used to narrate the threshold trade off for a single selected threshold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BelowThresholdSummary {
	pub count: usize,
	pub percent: f32,
	pub correct_count: usize,
}

pub fn below_threshold(records: &[ClassificationRecord], threshold: f32) -> BelowThresholdSummary {
	let count = records
		.iter()
		.filter(|record| record.confidence < threshold)
		.count();
	let correct_count = records
		.iter()
		.filter(|record| record.confidence < threshold && record.was_correct)
		.count();
	let percent = if records.is_empty() {
		0.0
	} else {
		100.0 * count.to_f32().unwrap() / records.len().to_f32().unwrap()
	};
	BelowThresholdSummary {
		count,
		percent,
		correct_count,
	}
}

/// The records a presentation table shows at `threshold`, most confident first.
pub fn visible_records<'a>(
	records: &'a [ClassificationRecord],
	threshold: f32,
) -> Vec<&'a ClassificationRecord> {
	let mut visible: Vec<&ClassificationRecord> = records
		.iter()
		.filter(|record| record.confidence >= threshold)
		.collect();
	visible.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap());
	visible
}

#[test]
fn test_max_accuracy() {
	let point = |threshold: f32, accuracy: f32, count: usize| ThresholdPoint {
		threshold,
		accuracy,
		count,
		total_count: 20,
	};
	let curve = vec![
		point(0.0, 75.0, 20),
		point(0.4, 85.0, 15),
		point(0.6, 85.0, 10),
		point(0.8, 60.0, 4),
	];
	let max = max_accuracy(&curve);
	// Ties keep the earliest point.
	assert_eq!(max.value, 85.0);
	assert_eq!(max.threshold, 0.4);
	assert_eq!(max.samples_hidden_count, 5);
	assert_eq!(max.samples_hidden_percent, 25.0);
}

#[test]
fn test_max_accuracy_empty_curve() {
	assert_eq!(max_accuracy(&[]), MaxAccuracy::default());
}

#[test]
fn test_below_threshold() {
	let records = vec![
		ClassificationRecord::new("q1", "a", "a", true, 0.9),
		ClassificationRecord::new("q2", "a", "b", false, 0.4),
		ClassificationRecord::new("q3", "b", "b", true, 0.2),
		ClassificationRecord::new("q4", "b", "b", true, 0.1),
	];
	let summary = below_threshold(&records, 0.5);
	assert_eq!(summary.count, 3);
	assert_eq!(summary.percent, 75.0);
	assert_eq!(summary.correct_count, 2);
	// Threshold 0 hides nothing.
	assert_eq!(below_threshold(&records, 0.0), BelowThresholdSummary::default());
	assert_eq!(below_threshold(&[], 0.5), BelowThresholdSummary::default());
}

#[test]
fn test_visible_records() {
	let records = vec![
		ClassificationRecord::new("q1", "a", "a", true, 0.4),
		ClassificationRecord::new("q2", "a", "b", false, 0.9),
		ClassificationRecord::new("q3", "b", "b", true, 0.7),
	];
	let visible = visible_records(&records, 0.5);
	let queries: Vec<&str> = visible.iter().map(|record| record.query.as_str()).collect();
	assert_eq!(queries, vec!["q2", "q3"]);
}
