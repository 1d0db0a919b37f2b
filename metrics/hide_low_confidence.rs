use super::{AccuracyMethod, AccuracyMethodOutput, ClassificationRecord};
use num_traits::ToPrimitive;

/// The predicted class labels that participate in the confusion matrix. Records predicting any other class are excluded from every bucket.
pub const POSITIVE_CLASS: &str = "positive";
pub const NEGATIVE_CLASS: &str = "negative";

/// The confusion matrix over the records at or above the threshold, bucketed by the stored correctness flag and the predicted class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfusionMatrix {
	pub true_positives: u64,
	pub false_positives: u64,
	pub true_negatives: u64,
	pub false_negatives: u64,
}

/**
The "hide low confidence" accuracy method models a system that refuses to answer below a confidence bar.

Predictions at or above the threshold are scored normally. Below the threshold, correctness inverts: an incorrect prediction that gets hidden is a save and counts as correct, while a correct prediction that gets hidden is a loss and does not count.
*/
pub struct HideLowConfidence;

impl AccuracyMethod for HideLowConfidence {
	fn id(&self) -> &'static str {
		"hide-low-confidence"
	}

	fn description(&self) -> &'static str {
		"Low confidence predictions are hidden. Correct predictions below the threshold count against accuracy, incorrect ones below the threshold count as correct."
	}

	fn evaluate(&self, records: &[ClassificationRecord], threshold: f32) -> AccuracyMethodOutput {
		// The threshold comparison is inclusive on the above side.
		let (above_threshold, below_threshold): (Vec<&ClassificationRecord>, Vec<&ClassificationRecord>) =
			records.iter().partition(|record| record.confidence >= threshold);
		let correct_above_threshold = above_threshold
			.iter()
			.filter(|record| record.was_correct)
			.count();
		let incorrect_below_threshold = below_threshold
			.iter()
			.filter(|record| !record.was_correct)
			.count();
		let adjusted_correct = correct_above_threshold + incorrect_below_threshold;
		let total_samples = records.len();
		let accuracy = if total_samples > 0 {
			100.0 * adjusted_correct.to_f32().unwrap() / total_samples.to_f32().unwrap()
		} else {
			0.0
		};
		let mut confusion_matrix = ConfusionMatrix::default();
		for record in above_threshold.iter() {
			match (record.was_correct, record.predicted_class.as_str()) {
				(true, POSITIVE_CLASS) => confusion_matrix.true_positives += 1,
				(true, NEGATIVE_CLASS) => confusion_matrix.true_negatives += 1,
				(false, POSITIVE_CLASS) => confusion_matrix.false_positives += 1,
				(false, NEGATIVE_CLASS) => confusion_matrix.false_negatives += 1,
				_ => {}
			}
		}
		AccuracyMethodOutput {
			accuracy,
			total_samples,
			samples_above_threshold: above_threshold.len(),
			correct_predictions: correct_above_threshold,
			confusion_matrix,
		}
	}
}

#[test]
fn test_hide_low_confidence() {
	let records = vec![
		ClassificationRecord::new("q1", "positive", "positive", true, 0.9),
		ClassificationRecord::new("q2", "positive", "negative", false, 0.3),
	];
	// At 0.5 the incorrect record is hidden, which counts as a save.
	let output = HideLowConfidence.evaluate(&records, 0.5);
	insta::assert_debug_snapshot!(output, @r###"
 AccuracyMethodOutput {
     accuracy: 100.0,
     total_samples: 2,
     samples_above_threshold: 1,
     correct_predictions: 1,
     confusion_matrix: ConfusionMatrix {
         true_positives: 1,
         false_positives: 0,
         true_negatives: 0,
         false_negatives: 0,
     },
 }
 "###);
	// At 0.95 the correct record is hidden too, which counts as a loss.
	let output = HideLowConfidence.evaluate(&records, 0.95);
	assert_eq!(output.accuracy, 50.0);
	assert_eq!(output.samples_above_threshold, 0);
	assert_eq!(output.correct_predictions, 0);
	assert_eq!(output.confusion_matrix, ConfusionMatrix::default());
}

#[test]
fn test_empty_records() {
	let output = HideLowConfidence.evaluate(&[], 0.5);
	assert_eq!(output, AccuracyMethodOutput::default());
}

#[test]
fn test_threshold_is_inclusive() {
	let records = vec![ClassificationRecord::new(
		"q1", "positive", "positive", true, 0.5,
	)];
	let output = HideLowConfidence.evaluate(&records, 0.5);
	assert_eq!(output.samples_above_threshold, 1);
	assert_eq!(output.correct_predictions, 1);
}

#[test]
fn test_confusion_matrix_excludes_other_classes() {
	let records = vec![
		ClassificationRecord::new("q1", "positive", "positive", true, 0.9),
		ClassificationRecord::new("q2", "negative", "negative", false, 0.9),
		ClassificationRecord::new("q3", "definition", "definition", true, 0.9),
		ClassificationRecord::new("q4", "technique", "comparison", false, 0.9),
	];
	let output = HideLowConfidence.evaluate(&records, 0.5);
	assert_eq!(output.samples_above_threshold, 4);
	let confusion_matrix = &output.confusion_matrix;
	let bucketed = confusion_matrix.true_positives
		+ confusion_matrix.false_positives
		+ confusion_matrix.true_negatives
		+ confusion_matrix.false_negatives;
	// The two records predicting non binary classes land in no bucket.
	assert_eq!(bucketed, 2);
	assert_eq!(confusion_matrix.true_positives, 1);
	assert_eq!(confusion_matrix.false_negatives, 1);
}
