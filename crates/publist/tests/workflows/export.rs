use super::*;

#[traced_test]
#[tokio::test]
async fn test_markdown_export() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let publist = publist_for(&server);
  let dir = tempdir()?;

  let path = publist.export(ORCID, dir.path(), Dialect::Markdown).await?;
  assert_eq!(path, dir.path().join(OUTPUT_FILE));

  let expected = format!("# 2023\n\n{GADGETS_MD}\n\n# 2021\n\n{WIDGETS_MD}\n\n{SPROCKETS}\n\n");
  assert_eq!(std::fs::read_to_string(path)?, expected);
  Ok(())
}

#[tokio::test]
async fn test_rst_lines() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let publist = publist_for(&server);

  let lines = publist.create_lines(ORCID, Dialect::ReStructuredText).await?;
  assert_eq!(lines[..3], ["2023", "====", ""]);
  assert_eq!(
    lines[3],
    "**`Carberry, J. <https://orcid.org/0000-0002-1825-0097>`_**, *Dense Gadgets*, Handbook of \
     Gadgets, Hopper, G., `Link <https://example.com/gadgets>`_, 2023"
  );
  assert_eq!(lines.iter().filter(|line| *line == "====").count(), 2);
  assert!(lines
    .iter()
    .any(|line| line.contains("doi: `10.1234/widgets.2021 <https://doi.org/10.1234/widgets.2021>`_")));
  Ok(())
}

#[tokio::test]
async fn test_plain_lines() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let publist = publist_for(&server);

  let lines = publist.create_lines(ORCID, Dialect::from_selector("txt")).await?;
  assert_eq!(lines[0], "2023");
  assert_eq!(
    lines[2],
    "**Carberry, J.**, *Dense Gadgets*, Handbook of Gadgets, Hopper, G., \
     https://example.com/gadgets, 2023"
  );
  Ok(())
}

#[tokio::test]
async fn test_export_overwrites_existing_file() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let publist = publist_for(&server);
  let dir = tempdir()?;
  std::fs::write(dir.path().join(OUTPUT_FILE), "old list")?;

  publist.export(ORCID, dir.path(), Dialect::Markdown).await?;
  let written = std::fs::read_to_string(dir.path().join(OUTPUT_FILE))?;
  assert!(written.starts_with("# 2023\n"));
  assert!(!written.contains("old list"));
  Ok(())
}

#[tokio::test]
async fn test_registry_failure_writes_nothing() -> TestResult<()> {
  for status in [404, 500] {
    let mut server = Server::new_async().await;
    let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), status, "").await;
    let publist = publist_for(&server);
    let dir = tempdir()?;

    let result = publist.export(ORCID, dir.path(), Dialect::Markdown).await;
    assert!(matches!(result, Err(PublistError::Registry(s)) if s.as_u16() as usize == status));
    assert_no_output(dir.path());
  }
  Ok(())
}

#[tokio::test]
async fn test_invalid_year_writes_nothing() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let undated = WORK_1003.replace(r#""value": "2021""#, r#""value": "in press""#);
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, OVERVIEW).await;
  let _first = mock_json(&mut server, &format!("/{ORCID}/works/1001"), 200, WORK_1001).await;
  let _second = mock_json(&mut server, &format!("/{ORCID}/works/1002"), 200, WORK_1002).await;
  let _third = mock_json(&mut server, &format!("/{ORCID}/works/1003"), 200, &undated).await;
  let publist = publist_for(&server);
  let dir = tempdir()?;

  let result = publist.export(ORCID, dir.path(), Dialect::Markdown).await;
  assert!(matches!(result, Err(PublistError::InvalidYear(year)) if year == "in press"));
  assert_no_output(dir.path());
  Ok(())
}

#[tokio::test]
async fn test_undated_work_writes_nothing() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let undated = WORK_1003.replace(
    r#""publication-date": { "year": { "value": "2021" }, "month": null, "day": null }"#,
    r#""publication-date": null"#,
  );
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, OVERVIEW).await;
  let _first = mock_json(&mut server, &format!("/{ORCID}/works/1001"), 200, WORK_1001).await;
  let _second = mock_json(&mut server, &format!("/{ORCID}/works/1002"), 200, WORK_1002).await;
  let _third = mock_json(&mut server, &format!("/{ORCID}/works/1003"), 200, &undated).await;
  let publist = publist_for(&server);
  let dir = tempdir()?;

  let result = publist.export(ORCID, dir.path(), Dialect::Markdown).await;
  assert!(matches!(result, Err(PublistError::InvalidYear(year)) if year.is_empty()));
  assert_no_output(dir.path());
  Ok(())
}

#[tokio::test]
async fn test_missing_title_writes_nothing() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let untitled = WORK_1003.replace(
    r#""title": { "title": { "value": "Notes on Sprockets" }, "subtitle": null, "translated-title": null }"#,
    r#""title": null"#,
  );
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, OVERVIEW).await;
  let _first = mock_json(&mut server, &format!("/{ORCID}/works/1001"), 200, WORK_1001).await;
  let _second = mock_json(&mut server, &format!("/{ORCID}/works/1002"), 200, WORK_1002).await;
  let _third = mock_json(&mut server, &format!("/{ORCID}/works/1003"), 200, &untitled).await;
  let publist = publist_for(&server);
  let dir = tempdir()?;

  let result = publist.export(ORCID, dir.path(), Dialect::Markdown).await;
  assert!(matches!(result, Err(PublistError::MissingField(field)) if field == "title/title/value"));
  assert_no_output(dir.path());
  Ok(())
}
