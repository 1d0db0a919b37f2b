use sieve_metrics::ClassificationRecord;

/// The session state: the loaded dataset and the selected threshold. The dataset is replaced wholesale on load and never mutated in place, so everything derived from it stays a pure function of the current pair.
pub struct Session {
	dataset: Vec<ClassificationRecord>,
	threshold: f32,
	load_sequence: u64,
}

/// A token handed out when a load starts. Loads finish in the order files happen to parse, not the order they started, so each token carries a sequence number and only the latest one may install its dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

pub const DEFAULT_THRESHOLD: f32 = 0.5;

impl Session {
	pub fn new() -> Self {
		Self {
			dataset: Vec::new(),
			threshold: DEFAULT_THRESHOLD,
			load_sequence: 0,
		}
	}

	pub fn dataset(&self) -> &[ClassificationRecord] {
		&self.dataset
	}

	pub fn threshold(&self) -> f32 {
		self.threshold
	}

	pub fn set_threshold(&mut self, threshold: f32) {
		self.threshold = threshold;
	}

	/// Start a load. Present the returned token to `finish_load` when parsing completes.
	pub fn begin_load(&mut self) -> LoadToken {
		self.load_sequence += 1;
		LoadToken(self.load_sequence)
	}

	/// Install `dataset` if `token` is from the most recent `begin_load`, replacing the previous dataset entirely. A load superseded by a newer `begin_load` is discarded, and `false` is returned.
	pub fn finish_load(&mut self, token: LoadToken, dataset: Vec<ClassificationRecord>) -> bool {
		if token != LoadToken(self.load_sequence) {
			return false;
		}
		self.dataset = dataset;
		true
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn records(query: &str) -> Vec<ClassificationRecord> {
		vec![ClassificationRecord::new(query, "a", "a", true, 0.9)]
	}

	#[test]
	fn test_superseded_load_is_discarded() {
		let mut session = Session::new();
		let first = session.begin_load();
		let second = session.begin_load();
		assert!(session.finish_load(second, records("second")));
		assert!(!session.finish_load(first, records("first")));
		assert_eq!(session.dataset()[0].query, "second");
	}

	#[test]
	fn test_load_replaces_dataset_wholesale() {
		let mut session = Session::new();
		let token = session.begin_load();
		assert!(session.finish_load(token, records("first")));
		let token = session.begin_load();
		assert!(session.finish_load(token, records("second")));
		assert_eq!(session.dataset().len(), 1);
		assert_eq!(session.dataset()[0].query, "second");
	}

	#[test]
	fn test_threshold() {
		let mut session = Session::new();
		assert_eq!(session.threshold(), DEFAULT_THRESHOLD);
		session.set_threshold(0.75);
		assert_eq!(session.threshold(), 0.75);
	}
}
