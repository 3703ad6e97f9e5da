//! Category grouping of the displayed files.

use crate::models::FileRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct FileCategory {
    pub name: String,
    pub files: Vec<FileRecord>,
}

impl FileCategory {
    pub fn title(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Search results win over the full list whenever there are any.
pub fn displayed_files<'a>(files: &'a [FileRecord], search_results: &'a [FileRecord]) -> &'a [FileRecord] {
    if search_results.is_empty() { files } else { search_results }
}

/// Partitions files by category, sections in first-encounter order.
pub fn group_by_category(files: &[FileRecord]) -> Vec<FileCategory> {
    let mut categories: Vec<FileCategory> = Vec::new();
    for file in files {
        let name = file.category();
        match categories.iter_mut().find(|c| c.name == name) {
            Some(category) => category.files.push(file.clone()),
            None => categories.push(FileCategory { name: name.to_string(), files: vec![file.clone()] }),
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_CATEGORY;

    fn names(categories: &[FileCategory]) -> Vec<&str> {
        categories.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn sections_follow_first_encounter_order() {
        let files = vec![
            FileRecord::new("b.png", Some("image")),
            FileRecord::new("a.pdf", Some("pdf")),
            FileRecord::new("c.jpg", Some("image")),
            FileRecord::new("z.bin", None),
            FileRecord::new("d.pdf", Some("pdf")),
        ];
        let categories = group_by_category(&files);
        assert_eq!(names(&categories), vec!["image", "pdf", UNKNOWN_CATEGORY]);
        let images: Vec<_> = categories[0].files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(images, vec!["b.png", "c.jpg"]);
        assert_eq!(categories[1].files.len(), 2);
        assert_eq!(categories[2].title(), "UNKNOWN");
    }

    #[test]
    fn blank_and_missing_tags_share_unknown_section() {
        let files = vec![FileRecord::new("x", Some("")), FileRecord::new("y", None)];
        let categories = group_by_category(&files);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].files.len(), 2);
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn displayed_set_is_never_merged() {
        let files = vec![FileRecord::new("a.pdf", Some("pdf")), FileRecord::new("b.pdf", Some("pdf"))];
        let results = vec![FileRecord::new("a.pdf", Some("pdf"))];
        assert_eq!(displayed_files(&files, &[]), files.as_slice());
        assert_eq!(displayed_files(&files, &results), results.as_slice());
    }
}
