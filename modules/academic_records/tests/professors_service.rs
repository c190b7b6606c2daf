mod common;

use academic_records::error::ErrorKind;
use academic_records::model::Status;
use anyhow::Result;

#[tokio::test]
async fn create_and_filter_by_department() -> Result<()> {
    let records = common::records().await?;

    let laura = records
        .professors
        .create(common::professor("200345678", "laura@ucenfotec.ac.cr"))
        .await?;
    let mut miguel = common::professor("300456789", "miguel@ucenfotec.ac.cr");
    miguel.department = "Web Development".to_owned();
    let miguel = records.professors.create(miguel).await?;

    let cs = records.professors.list_by_department("Computer Science").await?;
    assert_eq!(cs, vec![laura.clone()]);
    let web = records.professors.list_by_department(" Web Development ").await?;
    assert_eq!(web, vec![miguel]);
    assert!(records.professors.list_by_department("History").await?.is_empty());

    assert_eq!(records.professors.get(laura.id).await?, Some(laura));
    assert_eq!(records.professors.count().await?, 2);
    Ok(())
}

#[tokio::test]
async fn department_is_validated() -> Result<()> {
    let records = common::records().await?;

    let mut input = common::professor("200345678", "laura@ucenfotec.ac.cr");
    input.department = "X".to_owned();
    let err = records.professors.create(input).await.unwrap_err();
    assert_eq!(err.field(), Some("department"));

    let err = records.professors.list_by_department("  ").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    Ok(())
}

#[tokio::test]
async fn identifier_and_email_are_unique() -> Result<()> {
    let records = common::records().await?;

    records
        .professors
        .create(common::professor("200345678", "laura@ucenfotec.ac.cr"))
        .await?;

    let err = records
        .professors
        .create(common::professor("200345678", "other@ucenfotec.ac.cr"))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("identifier"));

    let err = records
        .professors
        .create(common::professor("999999999", "Laura@UCENFOTEC.ac.cr"))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("email"));
    Ok(())
}

#[tokio::test]
async fn update_then_lookup() -> Result<()> {
    let records = common::records().await?;

    let laura = records
        .professors
        .create(common::professor("200345678", "laura@ucenfotec.ac.cr"))
        .await?;

    let mut input = common::professor("200345678", "laura.j@ucenfotec.ac.cr");
    input.status = "inactive".to_owned();
    assert!(records.professors.update(laura.id, input).await?);

    let found = records
        .professors
        .find_by_email("Laura.J@UCenfotec.ac.cr")
        .await?
        .unwrap();
    assert_eq!(found.id, laura.id);
    assert_eq!(found.status, Status::Inactive);
    assert_eq!(
        records.professors.find_by_email("laura@ucenfotec.ac.cr").await?,
        None
    );

    records.professors.delete(laura.id).await?;
    let err = records.professors.delete(laura.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}
