/// One row of classification evaluation data.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRecord {
	/// The evaluated input. Only used for display, never for computation.
	pub query: String,
	pub ground_truth_class: String,
	pub predicted_class: String,
	/// Whether the prediction was judged correct. This is independent data: it is never recomputed by comparing the class fields.
	pub was_correct: bool,
	/// A probability-like score in [0, 1].
	pub confidence: f32,
}

impl ClassificationRecord {
	pub fn new(
		query: impl Into<String>,
		ground_truth_class: impl Into<String>,
		predicted_class: impl Into<String>,
		was_correct: bool,
		confidence: f32,
	) -> Self {
		Self {
			query: query.into(),
			ground_truth_class: ground_truth_class.into(),
			predicted_class: predicted_class.into(),
			was_correct,
			confidence,
		}
	}
}
