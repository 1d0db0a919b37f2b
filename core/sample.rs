use sieve_metrics::ClassificationRecord;

/// The bundled sample dataset: 30 classification results over machine learning questions, fixed at build time. It stands in for an uploaded csv in demos and tests. None of its predicted classes are binary, so its confusion matrix is all zero at every threshold.
pub fn sample_records() -> Vec<ClassificationRecord> {
	vec![
		ClassificationRecord::new(
			"What is machine learning?",
			"definition",
			"definition",
			true,
			0.95,
		),
		ClassificationRecord::new(
			"How does gradient descent work?",
			"technique",
			"technique",
			true,
			0.87,
		),
		ClassificationRecord::new("What is overfitting?", "definition", "definition", true, 0.92),
		ClassificationRecord::new(
			"Can you explain neural networks?",
			"explanation",
			"definition",
			false,
			0.78,
		),
		ClassificationRecord::new(
			"What is cross-validation?",
			"technique",
			"technique",
			true,
			0.82,
		),
		ClassificationRecord::new(
			"How do you calculate precision?",
			"calculation",
			"calculation",
			true,
			0.75,
		),
		ClassificationRecord::new(
			"What are decision trees?",
			"definition",
			"explanation",
			false,
			0.66,
		),
		ClassificationRecord::new(
			"How to implement k-means clustering?",
			"technique",
			"technique",
			true,
			0.91,
		),
		ClassificationRecord::new(
			"What is regularization?",
			"definition",
			"definition",
			true,
			0.89,
		),
		ClassificationRecord::new("Calculate the F1 score", "calculation", "technique", false, 0.58),
		ClassificationRecord::new("Define backpropagation", "definition", "definition", true, 0.93),
		ClassificationRecord::new(
			"Example of supervised learning?",
			"example",
			"definition",
			false,
			0.63,
		),
		ClassificationRecord::new(
			"How to build a recommendation system?",
			"technique",
			"technique",
			true,
			0.86,
		),
		ClassificationRecord::new(
			"Difference between precision and recall",
			"comparison",
			"comparison",
			true,
			0.79,
		),
		ClassificationRecord::new(
			"What is ensemble learning?",
			"definition",
			"technique",
			false,
			0.71,
		),
		ClassificationRecord::new(
			"What is a confusion matrix?",
			"definition",
			"definition",
			true,
			0.84,
		),
		ClassificationRecord::new(
			"How to handle imbalanced data?",
			"technique",
			"technique",
			true,
			0.77,
		),
		ClassificationRecord::new(
			"Explain linear regression",
			"explanation",
			"explanation",
			true,
			0.90,
		),
		ClassificationRecord::new("What is deep learning?", "definition", "definition", true, 0.96),
		ClassificationRecord::new(
			"Compare SVM and logistic regression",
			"comparison",
			"explanation",
			false,
			0.67,
		),
		ClassificationRecord::new(
			"When to use classification vs regression?",
			"comparison",
			"comparison",
			true,
			0.83,
		),
		ClassificationRecord::new(
			"What is transfer learning?",
			"definition",
			"definition",
			true,
			0.88,
		),
		ClassificationRecord::new(
			"How to tune hyperparameters?",
			"technique",
			"technique",
			true,
			0.81,
		),
		ClassificationRecord::new(
			"What is feature selection?",
			"definition",
			"definition",
			true,
			0.85,
		),
		ClassificationRecord::new(
			"Bias-variance tradeoff explained",
			"explanation",
			"comparison",
			false,
			0.69,
		),
		ClassificationRecord::new(
			"How to evaluate classification models?",
			"technique",
			"technique",
			true,
			0.80,
		),
		ClassificationRecord::new(
			"What is reinforcement learning?",
			"definition",
			"definition",
			true,
			0.94,
		),
		ClassificationRecord::new("How to implement PCA?", "technique", "calculation", false, 0.61),
		ClassificationRecord::new(
			"What is batch normalization?",
			"definition",
			"definition",
			true,
			0.82,
		),
		ClassificationRecord::new(
			"When to use clustering?",
			"explanation",
			"technique",
			false,
			0.65,
		),
	]
}

#[test]
fn test_sample_records() {
	let records = sample_records();
	assert_eq!(records.len(), 30);
	for record in records.iter() {
		assert!(record.confidence >= 0.0 && record.confidence <= 1.0);
	}
	assert_eq!(records.iter().filter(|record| record.was_correct).count(), 21);
}
