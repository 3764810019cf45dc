use crate::core::date::parse_date;
use crate::domain::model::ContractRecord;

/// Number of columns a contract row must carry.
pub const COLUMN_COUNT: usize = 14;

/// Parses one tab-separated line into a [`ContractRecord`].
///
/// Returns `None` when the line has fewer than [`COLUMN_COUNT`] fields.
pub fn process_contract_line(line: &str) -> Option<ContractRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    record_from_fields(&fields)
}

/// Maps positional fields onto a record. Columns past the 14th are ignored.
pub fn record_from_fields<S: AsRef<str>>(fields: &[S]) -> Option<ContractRecord> {
    let [doc_received, doc_date, progress, updated_doc_received, updated_doc_date, visit_scheduled, visit_date, management, program, university, degree, status, start_date, end_date, ..] =
        fields
    else {
        return None;
    };

    Some(ContractRecord {
        doc_received: clean(doc_received),
        doc_date: parse_date(doc_date.as_ref()),
        progress: clean(progress),
        updated_doc_received: clean(updated_doc_received),
        updated_doc_date: parse_date(updated_doc_date.as_ref()),
        visit_scheduled: clean(visit_scheduled),
        visit_date: parse_date(visit_date.as_ref()),
        management: clean(management),
        program: clean(program),
        university: clean(university),
        degree: clean(degree),
        status: clean(status),
        start_date: parse_date(start_date.as_ref()),
        end_date: parse_date(end_date.as_ref()),
    })
}

fn clean<S: AsRef<str>>(field: &S) -> String {
    field.as_ref().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> String {
        [
            "Yes",
            "1/15/25",
            " In progress ",
            "No",
            "",
            "Yes",
            "2/3/2025",
            "Quality Assurance",
            "Computer Science",
            "King Saud University",
            "Bachelor",
            "Active",
            "9/1/23",
            "8/31/25",
        ]
        .join("\t")
    }

    #[test]
    fn test_well_formed_line() {
        let record = process_contract_line(&sample_line()).unwrap();

        assert_eq!(record.doc_received, "Yes");
        assert_eq!(record.doc_date, "2025-01-15");
        assert_eq!(record.progress, "In progress");
        assert_eq!(record.updated_doc_received, "No");
        assert_eq!(record.updated_doc_date, "");
        assert_eq!(record.visit_scheduled, "Yes");
        assert_eq!(record.visit_date, "2025-02-03");
        assert_eq!(record.management, "Quality Assurance");
        assert_eq!(record.program, "Computer Science");
        assert_eq!(record.university, "King Saud University");
        assert_eq!(record.degree, "Bachelor");
        assert_eq!(record.status, "Active");
        assert_eq!(record.start_date, "2023-09-01");
        assert_eq!(record.end_date, "2025-08-31");
    }

    #[test]
    fn test_too_few_columns() {
        let line = vec!["x"; 10].join("\t");
        assert!(process_contract_line(&line).is_none());

        let thirteen = vec!["x"; 13].join("\t");
        assert!(process_contract_line(&thirteen).is_none());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let line = format!("{}\textra\tmore", sample_line());
        let record = process_contract_line(&line).unwrap();
        assert_eq!(record.end_date, "2025-08-31");
    }

    #[test]
    fn test_empty_trailing_column_keeps_layout() {
        let mut fields: Vec<&str> = vec!["a"; 13];
        fields.push("");
        let record = process_contract_line(&fields.join("\t")).unwrap();
        assert_eq!(record.end_date, "");
        assert_eq!(record.status, "a");
    }

    #[test]
    fn test_unparseable_date_is_left_empty() {
        let mut fields: Vec<String> = sample_line().split('\t').map(str::to_owned).collect();
        fields[12] = "soon".to_string();
        let record = record_from_fields(&fields).unwrap();
        assert_eq!(record.start_date, "");
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        let mut fields: Vec<String> = sample_line().split('\t').map(str::to_owned).collect();
        fields[9] = " جامعة الملك سعود ".to_string();
        let record = record_from_fields(&fields).unwrap();
        assert_eq!(record.university, "جامعة الملك سعود");
    }
}
