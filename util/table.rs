/// A plain text table for terminal output, rendered with aligned columns.
pub struct Table {
	padding: usize,
	header: Vec<String>,
	rows: Vec<Vec<String>>,
}

impl Table {
	pub fn new(header: Vec<String>) -> Self {
		Self {
			padding: 1,
			header,
			rows: Vec::new(),
		}
	}

	/// Add a row to the table. The row must have as many values as the header.
	pub fn add_row(&mut self, row: Vec<String>) {
		assert_eq!(row.len(), self.header.len());
		self.rows.push(row);
	}
}

impl std::fmt::Display for Table {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let n_columns = self.header.len();
		let mut column_widths: Vec<usize> = vec![0; n_columns];
		// update column widths with header
		column_widths
			.iter_mut()
			.zip(self.header.iter())
			.for_each(|(column_width, header)| *column_width = header.len());
		// update column widths with values
		for row in self.rows.iter() {
			for (column_width, value) in column_widths.iter_mut().zip(row.iter()) {
				*column_width = usize::max(*column_width, value.len());
			}
		}
		// write header
		let line = Line {
			column_widths: &column_widths,
			padding: self.padding,
		};
		let row = Row {
			column_widths: &column_widths,
			padding: self.padding,
			values: &self.header,
		};
		writeln!(f, "{}", row)?;
		writeln!(f, "{}", line)?;
		// write values
		for row in self.rows.iter() {
			let row = Row {
				column_widths: &column_widths,
				padding: self.padding,
				values: row,
			};
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

struct Line<'a> {
	column_widths: &'a [usize],
	padding: usize,
}

impl<'a> std::fmt::Display for Line<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for column_width in self.column_widths.iter() {
			for _ in 0..column_width + 2 * self.padding {
				write!(f, "-")?;
			}
			write!(f, "|")?;
		}
		Ok(())
	}
}

struct Row<'a> {
	column_widths: &'a [usize],
	padding: usize,
	values: &'a [String],
}

impl<'a> std::fmt::Display for Row<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for (column_width, value) in self.column_widths.iter().zip(self.values) {
			for _ in 0..self.padding {
				write!(f, " ")?;
			}
			write!(f, "{}", value)?;
			for _ in 0..column_width + self.padding - value.len() {
				write!(f, " ")?;
			}
			write!(f, "|")?;
		}
		Ok(())
	}
}

#[test]
fn test_table() {
	let mut table = Table::new(vec!["threshold".to_owned(), "accuracy".to_owned()]);
	table.add_row(vec!["0.50".to_owned(), "83.33".to_owned()]);
	table.add_row(vec!["0.95".to_owned(), "50.00".to_owned()]);
	let rendered = table.to_string();
	assert_eq!(
		rendered,
		"| threshold | accuracy |\n|-----------|----------|\n| 0.50      | 83.33    |\n| 0.95      | 50.00    |\n"
	);
}
