use glyphprint::{Font, FontError};
use pretty_assertions::assert_eq;
use std::path::Path;

fn data(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn load_sample_file() {
    let font = Font::load(data("sample.font")).unwrap();
    assert_eq!(font.name(), "sample");
    assert_eq!(font.chars(), vec!['.', 'A', 'H', 'I']);
    assert_eq!(font.get_char('H'), ["* *", "* *", "***", "* *", "* *"]);
}

#[test]
fn lowercase_query_returns_uppercase_definition() {
    let font = Font::load(data("sample.font")).unwrap();
    assert_eq!(font.get_char('a'), font.get_char('A'));
    assert_eq!(font.get_char('a').len(), 5);
}

#[test]
fn missing_file_is_not_found() {
    let path = data("does-not-exist.font");
    let err = Font::load(&path).unwrap_err();
    match err {
        FontError::NotFound { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn directory_is_not_found() {
    let err = Font::load(data("")).unwrap_err();
    assert!(matches!(err, FontError::NotFound { .. }));
}

#[test]
fn read_from_reader() {
    let src = "O:\n***\n* *\n***\n";
    let font = Font::read("inline", src.as_bytes()).unwrap();
    assert_eq!(font.name(), "inline");
    assert_eq!(font.get_char('o').len(), 3);
}

#[cfg(feature = "zip")]
#[test]
fn zipped_equals_plain() {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    let plain = std::fs::read(data("sample.font")).unwrap();
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let stored = || SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("README", stored()).unwrap();
    writer.write_all(b"not a font").unwrap();
    writer.start_file("fonts/sample.font", stored()).unwrap();
    writer.write_all(&plain).unwrap();
    let zipped = writer.finish().unwrap().into_inner();

    let from_zip = Font::from_bytes("zipped", &zipped).unwrap();
    let from_text = Font::from_bytes("plain", &plain).unwrap();
    assert_eq!(from_zip.chars(), from_text.chars());
    for ch in from_text.chars() {
        assert_eq!(from_zip.get_char(ch), from_text.get_char(ch));
    }
}

#[cfg(feature = "zip")]
#[test]
fn zip_without_font_entry_is_parse_error() {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("notes.md", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"# nothing here").unwrap();
    let zipped = writer.finish().unwrap().into_inner();

    let err = Font::from_bytes("empty", &zipped).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
}
