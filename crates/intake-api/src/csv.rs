//! CSV serialisation of the submission log.
//!
//! The output format is fixed by the original spreadsheet tooling this feed
//! was built for: an unquoted header line, then one line per row with every
//! value wrapped in double quotes. Embedded quotes and commas inside values
//! are NOT escaped — downstream consumers depend on the output byte for
//! byte, so this is deliberately not RFC 4180.

use intake_core::Submission;

/// Download filename sent in `Content-Disposition`.
pub const EXPORT_FILENAME: &str = "submissions.csv";

/// Header line; matches the store's natural column order.
pub const HEADER: &str = "id,name,email,subject,message,created_at";

/// Serialise `rows` to CSV. Lines are joined by `\n` with no trailing
/// newline, so N rows produce exactly N+1 lines.
pub fn to_csv(rows: &[Submission]) -> String {
  let mut lines = Vec::with_capacity(rows.len() + 1);
  lines.push(HEADER.to_owned());

  for row in rows {
    let fields = [
      row.id.to_string(),
      row.name.clone().unwrap_or_default(),
      row.email.clone().unwrap_or_default(),
      row.subject.clone().unwrap_or_default(),
      row.message.clone().unwrap_or_default(),
      row.created_at.to_rfc3339(),
    ];
    let line = fields
      .iter()
      .map(|v| format!("\"{v}\""))
      .collect::<Vec<_>>()
      .join(",");
    lines.push(line);
  }

  lines.join("\n")
}
