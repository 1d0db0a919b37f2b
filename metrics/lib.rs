/*!
This crate computes threshold metrics for classification results. Records carry a confidence score and an externally judged correctness flag, and an [`AccuracyMethod`](trait.AccuracyMethod.html) decides how a confidence threshold converts them into a single accuracy number. [`sweep`](sweep/fn.sweep.html) applies a method across the full threshold grid to produce the accuracy curve, and the [`tuning`](tuning/index.html) module derives the summary values a dashboard displays for a chosen threshold.
*/

mod hide_low_confidence;
mod record;
pub mod sweep;
pub mod tuning;

pub use self::hide_low_confidence::{ConfusionMatrix, HideLowConfidence};
pub use self::record::ClassificationRecord;
pub use self::sweep::{sweep, ThresholdPoint};
pub use self::tuning::{
	below_threshold, max_accuracy, visible_records, BelowThresholdSummary, MaxAccuracy,
};

/**
The `AccuracyMethod` trait defines how a confidence threshold converts a set of labeled, confidence scored records into an accuracy number and its supporting counts.

Only one method ships today, [`HideLowConfidence`](struct.HideLowConfidence.html), but the sweep engine and report builders are written against this trait so that additional policies can be added without touching them.
*/
pub trait AccuracyMethod {
	/// A stable identifier for this method.
	fn id(&self) -> &'static str;
	/// A user facing description of how this method treats predictions below the threshold.
	fn description(&self) -> &'static str;
	/// Evaluate this method over `records` at a single confidence `threshold`. This is a pure function: it is safe to call repeatedly with different thresholds, and an empty `records` slice produces all zero output rather than an error.
	fn evaluate(&self, records: &[ClassificationRecord], threshold: f32) -> AccuracyMethodOutput;
}

/// The output of evaluating an [`AccuracyMethod`](trait.AccuracyMethod.html) at a single threshold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccuracyMethodOutput {
	/// The accuracy as a percentage between 0 and 100.
	pub accuracy: f32,
	pub total_samples: usize,
	pub samples_above_threshold: usize,
	/// The count of correct predictions at or above the threshold. This is the unadjusted count, not the adjusted total behind `accuracy`.
	pub correct_predictions: usize,
	pub confusion_matrix: ConfusionMatrix,
}
