use super::{AccuracyMethod, ClassificationRecord};
use itertools::Itertools;
use num_traits::ToPrimitive;

/// The spacing of the threshold grid the sweep evaluates.
pub const THRESHOLD_STEP: f32 = 0.05;

/// One sample of the accuracy vs threshold curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPoint {
	pub threshold: f32,
	/// The accuracy as a percentage between 0 and 100.
	pub accuracy: f32,
	/// The count of samples at or above the threshold.
	pub count: usize,
	pub total_count: usize,
}

/// Round `value` to the nearest multiple of `step`.
pub fn round_to_nearest(value: f32, step: f32) -> f32 {
	(value / step).round() * step
}

/// Evaluate `method` at every threshold on the grid from 0 to 1 and reduce the resulting curve for charting. The sweep always covers the full grid, independent of any currently selected threshold. An empty `records` slice produces an empty curve.
pub fn sweep(records: &[ClassificationRecord], method: &dyn AccuracyMethod) -> Vec<ThresholdPoint> {
	if records.is_empty() {
		return Vec::new();
	}
	let raw = threshold_grid()
		.map(|threshold| {
			let output = method.evaluate(records, threshold);
			ThresholdPoint {
				threshold,
				accuracy: output.accuracy,
				count: output.samples_above_threshold,
				total_count: records.len(),
			}
		})
		.collect();
	reduce(raw)
}

/// The closed grid 0, 0.05, ..., 1.0. Each value is rounded back onto the step so the grid never accumulates floating point drift.
fn threshold_grid() -> impl Iterator<Item = f32> {
	let n_steps = (1.0 / THRESHOLD_STEP).round().to_usize().unwrap();
	(0..=n_steps).map(|i| round_to_nearest(i.to_f32().unwrap() * THRESHOLD_STEP, THRESHOLD_STEP))
}

/// Collapse runs of points that share the same accuracy (rounded to two decimals) and hidden sample count, keeping each run's first point plus its last when that adds a distinct threshold, so a plateau charts as a segment instead of a pile of identical points.
fn reduce(raw: Vec<ThresholdPoint>) -> Vec<ThresholdPoint> {
	let mut result: Vec<ThresholdPoint> = Vec::new();
	// Equal keys are always adjacent: the hidden count is monotone in the threshold, and an unchanged hidden count means an unchanged partition and therefore an unchanged accuracy.
	let groups = raw.into_iter().group_by(|point| {
		let hidden_count = point.total_count - point.count;
		((point.accuracy * 100.0).round().to_i64().unwrap(), hidden_count)
	});
	for (_, group) in &groups {
		let group: Vec<ThresholdPoint> = group.collect();
		let first = group.first().unwrap().clone();
		let last = group.last().unwrap().clone();
		let keep_last = group.len() > 1 && last.threshold != first.threshold;
		result.push(first);
		if keep_last {
			result.push(last);
		}
	}
	result.sort_by(|a, b| a.threshold.partial_cmp(&b.threshold).unwrap());
	result
}

#[test]
fn test_threshold_grid() {
	let thresholds: Vec<f32> = threshold_grid().collect();
	assert_eq!(thresholds.len(), 21);
	assert_eq!(*thresholds.first().unwrap(), 0.0);
	assert_eq!(*thresholds.last().unwrap(), 1.0);
	for (i, threshold) in thresholds.iter().enumerate() {
		assert!((threshold - i.to_f32().unwrap() * 0.05).abs() < 1e-6);
	}
}

#[test]
fn test_sweep() {
	use super::HideLowConfidence;
	let records = vec![
		ClassificationRecord::new("q1", "positive", "positive", true, 0.9),
		ClassificationRecord::new("q2", "positive", "negative", false, 0.3),
	];
	let curve = sweep(&records, &HideLowConfidence);
	insta::assert_debug_snapshot!(curve, @r###"
 [
     ThresholdPoint {
         threshold: 0.0,
         accuracy: 50.0,
         count: 2,
         total_count: 2,
     },
     ThresholdPoint {
         threshold: 0.3,
         accuracy: 50.0,
         count: 2,
         total_count: 2,
     },
     ThresholdPoint {
         threshold: 0.35,
         accuracy: 100.0,
         count: 1,
         total_count: 2,
     },
     ThresholdPoint {
         threshold: 0.9,
         accuracy: 100.0,
         count: 1,
         total_count: 2,
     },
     ThresholdPoint {
         threshold: 0.95,
         accuracy: 50.0,
         count: 0,
         total_count: 2,
     },
     ThresholdPoint {
         threshold: 1.0,
         accuracy: 50.0,
         count: 0,
         total_count: 2,
     },
 ]
 "###);
}

#[test]
fn test_sweep_empty_records() {
	use super::HideLowConfidence;
	assert!(sweep(&[], &HideLowConfidence).is_empty());
}

#[test]
fn test_samples_above_threshold_is_monotone() {
	use super::HideLowConfidence;
	let records = vec![
		ClassificationRecord::new("q1", "a", "a", true, 0.95),
		ClassificationRecord::new("q2", "a", "b", false, 0.65),
		ClassificationRecord::new("q3", "b", "b", true, 0.4),
		ClassificationRecord::new("q4", "b", "a", false, 0.1),
	];
	let counts: Vec<usize> = threshold_grid()
		.map(|threshold| {
			HideLowConfidence
				.evaluate(&records, threshold)
				.samples_above_threshold
		})
		.collect();
	assert_eq!(*counts.first().unwrap(), records.len());
	assert_eq!(*counts.last().unwrap(), 0);
	for pair in counts.windows(2) {
		assert!(pair[1] <= pair[0]);
	}
}

#[test]
fn test_accuracy_identity() {
	use super::HideLowConfidence;
	let records = vec![
		ClassificationRecord::new("q1", "a", "a", true, 0.95),
		ClassificationRecord::new("q2", "a", "b", false, 0.65),
		ClassificationRecord::new("q3", "b", "b", true, 0.4),
		ClassificationRecord::new("q4", "b", "a", false, 0.1),
		ClassificationRecord::new("q5", "b", "b", false, 0.55),
	];
	for threshold in threshold_grid() {
		let output = HideLowConfidence.evaluate(&records, threshold);
		let correct_above = records
			.iter()
			.filter(|record| record.confidence >= threshold && record.was_correct)
			.count();
		let incorrect_below = records
			.iter()
			.filter(|record| record.confidence < threshold && !record.was_correct)
			.count();
		let expected = 100.0 * (correct_above + incorrect_below).to_f32().unwrap()
			/ records.len().to_f32().unwrap();
		assert!((output.accuracy - expected).abs() < 1e-4);
	}
}

#[test]
fn test_reduce_keeps_plateau_endpoints() {
	let point = |threshold: f32, accuracy: f32, count: usize| ThresholdPoint {
		threshold,
		accuracy,
		count,
		total_count: 10,
	};
	let raw = vec![
		point(0.0, 80.0, 10),
		point(0.05, 80.0, 10),
		point(0.1, 80.0, 10),
		point(0.15, 90.0, 8),
		point(0.2, 70.0, 5),
	];
	let reduced = reduce(raw);
	let thresholds: Vec<f32> = reduced.iter().map(|point| point.threshold).collect();
	assert_eq!(thresholds, vec![0.0, 0.1, 0.15, 0.2]);
}

#[test]
fn test_reduce_is_idempotent() {
	let point = |threshold: f32, accuracy: f32, count: usize| ThresholdPoint {
		threshold,
		accuracy,
		count,
		total_count: 10,
	};
	let raw = vec![
		point(0.0, 80.0, 10),
		point(0.05, 80.0, 10),
		point(0.1, 80.0, 10),
		point(0.15, 90.0, 8),
		point(0.2, 90.0, 8),
		point(0.25, 70.0, 5),
	];
	let once = reduce(raw);
	let twice = reduce(once.clone());
	assert_eq!(once, twice);
}
