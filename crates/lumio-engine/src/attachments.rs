use lumio_types::ChatMessageEvent;

/// Text before the first occurrence of the attachment delimiter
///
/// When the delimiter does not occur the whole text is returned. An empty
/// delimiter never splits.
pub fn split_attachment_listing<'a>(text: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return text;
    }
    match text.find(delimiter) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// File names listed after the attachment delimiter
///
/// Only events that actually carry `file_urls` have a listing; for anything
/// else this is empty even if the delimiter text appears in the message.
pub fn attachment_names(event: &ChatMessageEvent, delimiter: &str) -> Vec<String> {
    if !event.has_attachments() || delimiter.is_empty() {
        return Vec::new();
    }

    let text = event.raw_text();
    let Some(idx) = text.find(delimiter) else {
        return Vec::new();
    };

    text[idx + delimiter.len()..]
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix(':').unwrap_or(line).trim_start();
            line.strip_prefix("- ").unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIMITER: &str = "Files attached";

    #[test]
    fn test_split_keeps_text_before_first_delimiter() {
        let text = "question Files attached a.png Files attached b.png";
        assert_eq!(split_attachment_listing(text, DELIMITER), "question ");
    }

    #[test]
    fn test_split_without_delimiter_is_noop() {
        assert_eq!(split_attachment_listing("question", DELIMITER), "question");
    }

    #[test]
    fn test_split_with_empty_delimiter_is_noop() {
        assert_eq!(split_attachment_listing("question", ""), "question");
    }

    #[test]
    fn test_attachment_names_from_listing() {
        let event = ChatMessageEvent::user("See these\n\nFiles attached:\n- a.png\n- b.txt\n")
            .with_file_urls(["u1", "u2"]);
        assert_eq!(attachment_names(&event, DELIMITER), vec!["a.png", "b.txt"]);
    }

    #[test]
    fn test_attachment_names_inline_listing() {
        let event = ChatMessageEvent::user("Here is my questionFiles attachedfile1.png")
            .with_file_urls(["u1"]);
        assert_eq!(attachment_names(&event, DELIMITER), vec!["file1.png"]);
    }

    #[test]
    fn test_attachment_names_require_file_urls() {
        let event = ChatMessageEvent::user("x Files attached a.png");
        assert!(attachment_names(&event, DELIMITER).is_empty());
    }
}
