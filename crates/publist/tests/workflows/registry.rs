use publist::registry::Registry;

use super::*;

#[traced_test]
#[tokio::test]
async fn test_fetch_works_in_overview_order() -> TestResult<()> {
  let (server, mocks) = fixture_registry().await;
  let publist = publist_for(&server);

  let works = publist.fetch_works(ORCID).await?;
  let codes: Vec<_> = works.iter().map(|w| w.put_code.as_str()).collect();
  assert_eq!(codes, ["1001", "1002", "1003"]);

  let widgets = &works[0];
  assert_eq!(widgets.title, "Sparse Widgets Revisited");
  assert_eq!(widgets.journal_title, "Journal of Widgetry");
  assert!(widgets.bibtex.as_deref().is_some_and(|b| b.starts_with("@article{carberry2021")));
  assert_eq!(widgets.contributors.len(), 2);
  assert_eq!(works[1].editors().count(), 1);
  assert!(works[2].contributors.is_empty());

  for mock in mocks {
    mock.assert_async().await;
  }
  Ok(())
}

#[tokio::test]
async fn test_concurrent_fetch_keeps_order() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let config = Config::default().with_base_url(server.url()).with_concurrency(3);
  let publist = Publist::new(config)?;

  let works = publist.fetch_works(ORCID).await?;
  let codes: Vec<_> = works.iter().map(|w| w.put_code.as_str()).collect();
  assert_eq!(codes, ["1001", "1002", "1003"]);
  Ok(())
}

#[tokio::test]
async fn test_keep_duplicates() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let config = Config::default().with_base_url(server.url()).with_duplicates(Duplicates::Keep);
  let publist = Publist::new(config)?;

  let works = publist.fetch_works(ORCID).await?;
  assert_eq!(works[0].contributors.len(), 3);
  assert_eq!(works[0].authors().count(), 3);
  Ok(())
}

#[tokio::test]
async fn test_overview_not_found() {
  let mut server = Server::new_async().await;
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 404, "{}").await;
  let publist = publist_for(&server);

  match publist.fetch_works(ORCID).await {
    Err(PublistError::Registry(status)) => assert_eq!(status.as_u16(), 404),
    other => panic!("expected registry error, got {other:?}"),
  }
}

#[tokio::test]
async fn test_work_server_error_aborts() {
  let mut server = Server::new_async().await;
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, OVERVIEW).await;
  let _first = mock_json(&mut server, &format!("/{ORCID}/works/1001"), 200, WORK_1001).await;
  let _second = mock_json(&mut server, &format!("/{ORCID}/works/1002"), 500, "oops").await;
  let _third = mock_json(&mut server, &format!("/{ORCID}/works/1003"), 200, WORK_1003).await;
  let publist = publist_for(&server);

  match publist.fetch_works(ORCID).await {
    Err(PublistError::Registry(status)) => assert_eq!(status.as_u16(), 500),
    other => panic!("expected registry error, got {other:?}"),
  }
}

#[tokio::test]
async fn test_malformed_json() {
  let mut server = Server::new_async().await;
  let _overview = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, "{ not json").await;
  let publist = publist_for(&server);

  assert!(matches!(publist.fetch_works(ORCID).await, Err(PublistError::Parse(_))));
}

#[tokio::test]
async fn test_invalid_orcid_sends_nothing() {
  let mut server = Server::new_async().await;
  let any = server.mock("GET", Matcher::Any).expect(0).create_async().await;
  let publist = publist_for(&server);

  assert!(matches!(
    publist.fetch_works("not-an-orcid").await,
    Err(PublistError::InvalidIdentifier(id)) if id == "not-an-orcid"
  ));
  any.assert_async().await;
}

#[tokio::test]
async fn test_unsafe_put_code_is_not_requested() {
  let mut server = Server::new_async().await;
  let overview = r#"{ "group": [{ "work-summary": [{ "put-code": "1001/../../admin" }] }] }"#;
  let listed = mock_json(&mut server, &format!("/{ORCID}/works/"), 200, overview).await;
  let work = server.mock("GET", Matcher::Regex("/works/.+".into())).expect(0).create_async().await;
  let publist = publist_for(&server);

  assert!(matches!(
    publist.fetch_works(ORCID).await,
    Err(PublistError::InvalidPutCode(code)) if code == "1001/../../admin"
  ));
  listed.assert_async().await;
  work.assert_async().await;
}

#[tokio::test]
async fn test_raw_payloads() -> TestResult<()> {
  let (server, _mocks) = fixture_registry().await;
  let registry = Registry::new(&Config::default().with_base_url(server.url()).registry)?;

  let overview = registry.fetch_overview(ORCID).await?;
  assert_eq!(publist::registry::collect_put_codes(&overview)?.len(), 3);

  let work = registry.fetch_work(ORCID, "1003").await?;
  assert_eq!(work["bulk"][0]["work"]["put-code"], 1003);
  Ok(())
}
