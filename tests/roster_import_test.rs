use anyhow::Result;
use guestlist::{GuestCategory, RosterImport};
use tempfile::TempDir;

#[test]
fn test_import_roster_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let roster_path = temp_dir.path().join("roster.csv");
    std::fs::write(
        &roster_path,
        "\
name,email,mobile,category,notes
Jane Doe,jane@x.com,,VIP,
Kim Park,kim@industry.net,010-0000-0000,INDUSTRY,needs parking
Lee,lee@,,STAFF,
Max,max@press.org,,press,
",
    )?;

    let report = RosterImport::from_path(&roster_path)?;

    assert_eq!(report.total(), 4);
    assert_eq!(report.accepted.len(), 2);
    assert_eq!(report.accepted[1].category, GuestCategory::Industry);
    assert_eq!(report.accepted[1].mobile.as_deref(), Some("010-0000-0000"));

    let rejected_lines: Vec<u64> = report.rejected.iter().map(|r| r.line).collect();
    assert_eq!(rejected_lines, vec![4, 5]);
    assert_eq!(report.rejected[0].violations[0].field, "email");
    assert_eq!(report.rejected[1].violations[0].field, "category");
    Ok(())
}

#[test]
fn test_missing_roster_file_is_an_io_error() {
    let result = RosterImport::from_path("/definitely/not/here.csv");
    assert!(matches!(result, Err(guestlist::GuestError::IoError(_))));
}

#[test]
fn test_header_only_roster_is_clean() -> Result<()> {
    let report = RosterImport::from_reader("name,email,category\n".as_bytes())?;

    assert_eq!(report.total(), 0);
    assert!(report.is_clean());
    Ok(())
}
