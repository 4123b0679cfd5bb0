use crate::artifact::write_document;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn creates_the_parent_directory_when_absent() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output_path = dir.path().join("api_doc").join("index.html");

    write_document(&output_path, "<!DOCTYPE html>")?;

    assert_eq!(std::fs::read_to_string(&output_path)?, "<!DOCTYPE html>");
    Ok(())
}

#[test]
fn overwrites_an_existing_artifact() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output_path = dir.path().join("index.html");

    write_document(&output_path, "first")?;
    write_document(&output_path, "second")?;

    assert_eq!(std::fs::read_to_string(&output_path)?, "second");
    Ok(())
}
