use crate::error::AppError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a call-control document and substitute its `{{key}}` placeholders.
///
/// Values are inserted verbatim: no XML escaping is applied, so callers
/// must only pass values that are safe inside the documents. Placeholders
/// without a matching key are left untouched.
pub fn render(dir: &Path, name: &str, vars: &[(&str, &str)]) -> Result<String, AppError> {
    let path = dir.join(name);
    let mut contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::TemplateNotFound(name.to_string()),
        _ => AppError::Internal(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    for (key, value) in vars {
        contents = contents.replace(&format!("{{{{{key}}}}}"), value);
    }

    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn substitutes_every_occurrence() {
        let dir = TempDir::new().unwrap();
        write_doc(
            &dir,
            "doc.xml",
            "<Response><Speak>{{GREETING}}</Speak><Redirect>{{URL}}/next?from={{URL}}</Redirect></Response>",
        );

        let rendered = render(
            dir.path(),
            "doc.xml",
            &[("GREETING", "hello"), ("URL", "http://example.com")],
        )
        .unwrap();

        assert_eq!(
            rendered,
            "<Response><Speak>hello</Speak><Redirect>http://example.com/next?from=http://example.com</Redirect></Response>"
        );
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn empty_context_returns_document_unchanged() {
        let dir = TempDir::new().unwrap();
        let doc = "<Response><Play>{{AUDIO_URL}}</Play></Response>";
        write_doc(&dir, "doc.xml", doc);

        let rendered = render(dir.path(), "doc.xml", &[]).unwrap();

        assert_eq!(rendered, doc);
    }

    #[test]
    fn unmatched_placeholders_survive_verbatim() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "doc.xml", "<Speak>{{KNOWN}} and {{UNKNOWN}}</Speak>");

        let rendered = render(dir.path(), "doc.xml", &[("KNOWN", "value")]).unwrap();

        assert_eq!(rendered, "<Speak>value and {{UNKNOWN}}</Speak>");
    }

    #[test]
    fn values_are_not_escaped() {
        let dir = TempDir::new().unwrap();
        write_doc(&dir, "doc.xml", "<Number>{{NUMBER}}</Number>");

        let rendered = render(dir.path(), "doc.xml", &[("NUMBER", "+1&555")]).unwrap();

        assert_eq!(rendered, "<Number>+1&555</Number>");
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();

        let err = render(dir.path(), "nope.xml", &[]).unwrap_err();

        match err {
            AppError::TemplateNotFound(name) => assert_eq!(name, "nope.xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
