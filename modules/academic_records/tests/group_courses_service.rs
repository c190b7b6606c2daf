mod common;

use academic_records::error::ErrorKind;
use anyhow::Result;
use uuid::Uuid;

#[tokio::test]
async fn link_requires_both_ids() -> Result<()> {
    let records = common::records().await?;
    let group = records.groups.create(common::group("Group A")).await?;

    let err = records
        .group_courses
        .create(Some(group.id), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.field(), Some("course_id"));

    let err = records.group_courses.create(None, None).await.unwrap_err();
    assert_eq!(err.field(), Some("group_id"));
    Ok(())
}

#[tokio::test]
async fn link_requires_existing_group_and_course() -> Result<()> {
    let records = common::records().await?;
    let group = records.groups.create(common::group("Group A")).await?;
    let course = records
        .courses
        .create(common::course("PRG101", "Programming I", 3))
        .await?;

    let err = records
        .group_courses
        .create(Some(Uuid::new_v4()), Some(course.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = records
        .group_courses
        .create(Some(group.id), Some(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(records.group_courses.count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn pair_is_unique() -> Result<()> {
    let records = common::records().await?;
    let group = records.groups.create(common::group("Group A")).await?;
    let course = records
        .courses
        .create(common::course("PRG101", "Programming I", 3))
        .await?;

    let link = records
        .group_courses
        .create(Some(group.id), Some(course.id))
        .await?;
    assert_eq!(link.group_id, group.id);
    assert_eq!(link.course_id, course.id);

    let err = records
        .group_courses
        .create(Some(group.id), Some(course.id))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    assert!(
        records
            .group_courses
            .exists_association(Some(group.id), Some(course.id))
            .await?
    );
    assert_eq!(records.group_courses.get(link.id).await?, Some(link));
    Ok(())
}

#[tokio::test]
async fn exists_association_with_missing_id_is_false() -> Result<()> {
    let records = common::records().await?;

    let id = Uuid::new_v4();
    assert!(!records.group_courses.exists_association(None, Some(id)).await?);
    assert!(!records.group_courses.exists_association(Some(id), None).await?);
    assert!(
        !records
            .group_courses
            .exists_association(Some(id), Some(id))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn list_by_group_and_course() -> Result<()> {
    let records = common::records().await?;
    let a = records.groups.create(common::group("Group A")).await?;
    let b = records.groups.create(common::group("Group B")).await?;
    let prg = records
        .courses
        .create(common::course("PRG101", "Programming I", 3))
        .await?;
    let web = records
        .courses
        .create(common::course("WEB101", "Web", 4))
        .await?;

    records.group_courses.create(Some(a.id), Some(prg.id)).await?;
    records.group_courses.create(Some(a.id), Some(web.id)).await?;
    records.group_courses.create(Some(b.id), Some(web.id)).await?;

    assert_eq!(records.group_courses.list_by_group(a.id).await?.len(), 2);
    assert_eq!(records.group_courses.list_by_group(b.id).await?.len(), 1);
    assert_eq!(records.group_courses.list_by_course(web.id).await?.len(), 2);
    assert!(records
        .group_courses
        .list_by_group(Uuid::new_v4())
        .await?
        .is_empty());
    assert_eq!(records.group_courses.list().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn deleting_a_group_leaves_its_links() -> Result<()> {
    let records = common::records().await?;
    let group = records.groups.create(common::group("Group A")).await?;
    let course = records
        .courses
        .create(common::course("PRG101", "Programming I", 3))
        .await?;
    let link = records
        .group_courses
        .create(Some(group.id), Some(course.id))
        .await?;

    records.groups.delete(group.id).await?;
    records.courses.delete(course.id).await?;

    assert_eq!(records.group_courses.list_by_group(group.id).await?, vec![link]);
    assert!(
        records
            .group_courses
            .exists_association(Some(group.id), Some(course.id))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn delete_link_checks_existence() -> Result<()> {
    let records = common::records().await?;
    let group = records.groups.create(common::group("Group A")).await?;
    let course = records
        .courses
        .create(common::course("PRG101", "Programming I", 3))
        .await?;
    let link = records
        .group_courses
        .create(Some(group.id), Some(course.id))
        .await?;

    records.group_courses.delete(link.id).await?;
    let err = records.group_courses.delete(link.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(
        !records
            .group_courses
            .exists_association(Some(group.id), Some(course.id))
            .await?
    );
    Ok(())
}
