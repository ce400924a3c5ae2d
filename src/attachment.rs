use crate::error::{AppError, AppResult};

const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

// Only the display name is kept; file contents are never read.
pub fn select_document(raw_name: &str) -> AppResult<String> {
    let name = sanitize_filename(raw_name);

    let mime = mime_guess::from_path(&name)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    if !ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(AppError::Validation(
            "Only PDF, .doc, or .docx documents are accepted.".to_string(),
        ));
    }

    Ok(name)
}

fn sanitize_filename(raw: &str) -> String {
    let leaf = raw.rsplit(['/', '\\']).next().unwrap_or(raw).trim();
    if leaf.is_empty() {
        return String::new();
    }

    leaf.chars()
        .map(|character| if character.is_control() { '_' } else { character })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_document_types_pass() {
        assert_eq!(
            select_document("abstract.pdf").expect("pdf should be accepted"),
            "abstract.pdf"
        );
        assert_eq!(
            select_document("report.doc").expect("doc should be accepted"),
            "report.doc"
        );
        assert_eq!(
            select_document("thesis.docx").expect("docx should be accepted"),
            "thesis.docx"
        );
    }

    #[test]
    fn other_types_are_refused() {
        assert!(matches!(select_document("notes.txt"), Err(AppError::Validation(_))));
        assert!(matches!(select_document("tool.exe"), Err(AppError::Validation(_))));
        assert!(matches!(select_document(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn only_the_leaf_name_is_kept() {
        assert_eq!(
            select_document("/home/asha/Downloads/abstract.pdf").expect("pdf should be accepted"),
            "abstract.pdf"
        );
        assert_eq!(
            select_document("C:\\Users\\asha\\thesis.docx").expect("docx should be accepted"),
            "thesis.docx"
        );
    }
}
