use coursecat_client::catalog::Catalog;
use coursecat_client::course::CourseStatus;
use coursecat_client::{mock, Client, Credentials};
use pretty_assertions::assert_eq;

#[test]
fn list_without_configuration_returns_the_three_mocks_in_order() {
    let catalog = Catalog::new(None);

    let courses = catalog.list_courses();
    let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(
        ids,
        vec!["vibe-coding", "stable-diffusion", "tech-entrepreneurship"]
    );
}

#[test]
fn mock_set_is_fully_populated() {
    for course in mock::mock_courses() {
        assert!(!course.title.is_empty());
        assert!(!course.description.is_empty());
        assert!(!course.long_description.is_empty());
        assert!(!course.image.is_empty());
        assert!(!course.duration.is_empty());
        assert_eq!(course.highlights.len(), 4);
        assert_eq!(course.created, None);
    }

    let finished: Vec<_> = mock::mock_courses()
        .into_iter()
        .filter(|c| c.status == CourseStatus::Finished)
        .collect();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, "tech-entrepreneurship");
}

#[test]
fn get_course_returns_the_mock_without_configuration() {
    let catalog = Catalog::new(None);

    let course = catalog.get_course("vibe-coding").unwrap();

    assert_eq!(course.title, "Vibe Coding");
    assert_eq!(course.price, 199.0);
}

#[test]
fn mock_ids_short_circuit_even_when_configured() {
    // A client is present, but a mock id never touches the network.
    let creds = Credentials {
        token: "secret_dummy".into(),
        database_id: "not-a-real-collection".to_owned(),
    };
    let catalog = Catalog::new(Some(Client::new(creds)));

    let course = catalog.get_course("stable-diffusion").unwrap();

    assert_eq!(course.title, "Stable Diffusion Mastery");
}

#[test]
fn unknown_id_without_configuration_is_absent() {
    let catalog = Catalog::new(None);

    assert_eq!(catalog.get_course("nonexistent-id"), None);
}

#[test]
fn fallback_dataset_is_substitutable() {
    let mut mocks = mock::mock_courses();
    mocks.truncate(1);
    let catalog = Catalog::with_mocks(None, mocks);

    assert_eq!(catalog.list_courses().len(), 1);
    assert_eq!(catalog.get_course("stable-diffusion"), None);
    assert!(catalog.get_course("vibe-coding").is_some());
}
