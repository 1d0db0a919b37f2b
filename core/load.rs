use sieve_metrics::ClassificationRecord;
use sieve_util::finite::ToFinite;
use std::path::Path;
use thiserror::Error;

/// The columns a results csv must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
	"query",
	"ground_truth_class",
	"predicted_class",
	"was_correct",
	"confidence",
];

/// Loading is all or nothing: the first invalid row rejects the entire csv, and no rows are skipped.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("missing required column \"{0}\"")]
	MissingColumn(&'static str),
	#[error("invalid was_correct value \"{value}\" on line {line}")]
	InvalidWasCorrect { line: u64, value: String },
	#[error("invalid confidence value \"{value}\" on line {line}")]
	InvalidConfidence { line: u64, value: String },
	#[error(transparent)]
	Csv(#[from] csv::Error),
}

pub fn from_path(path: &Path) -> Result<Vec<ClassificationRecord>, LoadError> {
	from_csv(&mut csv::Reader::from_path(path)?)
}

pub fn from_csv<R>(reader: &mut csv::Reader<R>) -> Result<Vec<ClassificationRecord>, LoadError>
where
	R: std::io::Read,
{
	struct ColumnIndexes {
		query: usize,
		ground_truth_class: usize,
		predicted_class: usize,
		was_correct: usize,
		confidence: usize,
	}
	let headers = reader.headers()?.clone();
	let position = |name: &'static str| {
		headers
			.iter()
			.position(|header| header == name)
			.ok_or(LoadError::MissingColumn(name))
	};
	let columns = ColumnIndexes {
		query: position("query")?,
		ground_truth_class: position("ground_truth_class")?,
		predicted_class: position("predicted_class")?,
		was_correct: position("was_correct")?,
		confidence: position("confidence")?,
	};
	let mut records = Vec::new();
	let mut row = csv::StringRecord::new();
	while reader.read_record(&mut row)? {
		let line = row.position().map(|position| position.line()).unwrap_or(0);
		let was_correct_value = row.get(columns.was_correct).unwrap();
		let was_correct =
			parse_was_correct(was_correct_value).ok_or_else(|| LoadError::InvalidWasCorrect {
				line,
				value: was_correct_value.to_owned(),
			})?;
		let confidence_value = row.get(columns.confidence).unwrap();
		let confidence = confidence_value
			.parse::<f32>()
			.ok()
			.and_then(|value| value.to_finite().ok())
			.ok_or_else(|| LoadError::InvalidConfidence {
				line,
				value: confidence_value.to_owned(),
			})?;
		records.push(ClassificationRecord::new(
			row.get(columns.query).unwrap(),
			row.get(columns.ground_truth_class).unwrap(),
			row.get(columns.predicted_class).unwrap(),
			was_correct,
			confidence.get(),
		));
	}
	Ok(records)
}

/// The accepted correctness encodings. The source schema allows booleans and 0/1 numbers as well, but a csv carries every field as text, so they all arrive as one of these tokens. The set is case sensitive.
fn parse_was_correct(value: &str) -> Option<bool> {
	match value {
		"1" | "true" | "True" => Some(true),
		"0" | "false" | "False" => Some(false),
		_ => None,
	}
}

#[cfg(test)]
fn from_str(csv: &str) -> Result<Vec<ClassificationRecord>, LoadError> {
	from_csv(&mut csv::Reader::from_reader(csv.as_bytes()))
}

#[test]
fn test_load() {
	let csv = "query,ground_truth_class,predicted_class,was_correct,confidence\n\
		what is a sieve?,definition,definition,True,0.91\n\
		how do sieves work?,explanation,definition,0,0.44\n";
	let records = from_str(csv).unwrap();
	assert_eq!(records.len(), 2);
	assert_eq!(records[0].query, "what is a sieve?");
	assert!(records[0].was_correct);
	assert_eq!(records[0].confidence, 0.91);
	assert!(!records[1].was_correct);
}

#[test]
fn test_load_accepts_all_correctness_tokens() {
	for (token, expected) in &[
		("1", true),
		("true", true),
		("True", true),
		("0", false),
		("false", false),
		("False", false),
	] {
		let csv = format!(
			"query,ground_truth_class,predicted_class,was_correct,confidence\nq,a,a,{},0.5\n",
			token
		);
		let records = from_str(&csv).unwrap();
		assert_eq!(records[0].was_correct, *expected);
	}
}

#[test]
fn test_load_rejects_unknown_correctness_token() {
	let csv = "query,ground_truth_class,predicted_class,was_correct,confidence\nq,a,a,yes,0.5\n";
	match from_str(csv) {
		Err(LoadError::InvalidWasCorrect { line, value }) => {
			assert_eq!(line, 2);
			assert_eq!(value, "yes");
		}
		result => panic!("unexpected result: {:?}", result.map(|records| records.len())),
	}
}

#[test]
fn test_load_rejects_unparseable_confidence() {
	let csv = "query,ground_truth_class,predicted_class,was_correct,confidence\nq,a,a,true,high\n";
	match from_str(csv) {
		Err(LoadError::InvalidConfidence { line, value }) => {
			assert_eq!(line, 2);
			assert_eq!(value, "high");
		}
		result => panic!("unexpected result: {:?}", result.map(|records| records.len())),
	}
}

#[test]
fn test_load_rejects_non_finite_confidence() {
	let csv = "query,ground_truth_class,predicted_class,was_correct,confidence\nq,a,a,true,NaN\n";
	assert!(matches!(
		from_str(csv),
		Err(LoadError::InvalidConfidence { .. })
	));
}

#[test]
fn test_load_rejects_missing_column() {
	let csv = "query,ground_truth_class,predicted_class,was_correct\nq,a,a,true\n";
	assert!(matches!(
		from_str(csv),
		Err(LoadError::MissingColumn("confidence"))
	));
}

#[test]
fn test_load_is_all_or_nothing() {
	// One bad row rejects the whole csv, including the valid rows around it.
	let csv = "query,ground_truth_class,predicted_class,was_correct,confidence\n\
		q1,a,a,true,0.9\n\
		q2,a,a,maybe,0.8\n\
		q3,a,a,false,0.7\n";
	assert!(from_str(csv).is_err());
}
