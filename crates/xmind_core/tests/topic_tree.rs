use xmind_core::{ErrorKind, MindmapError, Position, Sheet, TopicId, Xmind};

fn setup() -> Xmind {
    Xmind::new()
}

fn root_children(sheet: &Sheet) -> Vec<TopicId> {
    sheet.root_topic().children().to_vec()
}

#[test]
fn create_sub_topic_appends_under_root_and_subtopic() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let root = sheet.root_topic().id();
    let first = root_children(sheet)[0];

    let added = sheet.create_sub_topic(root, "Sub Topic").unwrap();
    let nested = sheet.create_sub_topic(first, "Sub of Sub Topic").unwrap();

    assert_eq!(sheet.root_topic().children().len(), 5);
    assert_eq!(*sheet.root_topic().children().last().unwrap(), added);
    assert_eq!(sheet.topic(first).unwrap().children(), &[nested]);
    assert_eq!(sheet.topic(nested).unwrap().parent(), Some(first));
}

#[test]
fn create_sub_topic_under_missing_parent_is_not_found() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let missing = uuid::Uuid::from_u128(u128::MAX);

    let err = sheet.create_sub_topic(missing, "Orphan").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_sub_topic_is_idempotent() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let root = sheet.root_topic().id();
    let first = root_children(sheet)[0];

    assert!(sheet.delete_sub_topic(root, first));
    let after_first = root_children(sheet);
    assert!(!sheet.delete_sub_topic(root, first));

    assert_eq!(root_children(sheet), after_first);
    assert_eq!(after_first.len(), 3);
    sheet.validate_invariants().unwrap();
}

#[test]
fn duplicate_sub_topic_adds_default_styled_sibling() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let root = sheet.root_topic().id();
    let first = root_children(sheet)[0];
    sheet.topic_mut(first).unwrap().change_shape_color("red");
    sheet.create_sub_topic(first, "Child").unwrap();

    let copy = sheet.duplicate_sub_topic(root, first).unwrap();

    let copied = sheet.topic(copy).unwrap();
    assert_eq!(sheet.root_topic().children().len(), 5);
    assert_eq!(copied.text, "Main Topic 1");
    assert_eq!(copied.shape.fill_color, "white");
    assert_eq!(copied.parent(), Some(root));
    assert!(copied.children().is_empty());
    assert_ne!(copy, first);
}

#[test]
fn duplicate_missing_sub_topic_is_not_found() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let first = root_children(sheet)[0];
    let second = root_children(sheet)[1];

    let err = sheet.duplicate_sub_topic(first, second).unwrap_err();
    assert_eq!(err, MindmapError::TopicNotFound(second));
}

#[test]
fn change_parent_moves_topic_between_parents() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let children = root_children(sheet);

    sheet.change_parent_topic(children[0], children[1]).unwrap();

    assert_eq!(sheet.topic(children[1]).unwrap().children(), &[children[0]]);
    assert_eq!(sheet.root_topic().children().len(), 3);
    assert_eq!(sheet.topic(children[0]).unwrap().parent(), Some(children[1]));
    sheet.validate_invariants().unwrap();
}

#[test]
fn change_parent_to_self_is_cycle_rejected() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let first = root_children(sheet)[0];
    let before = root_children(sheet);

    let err = sheet.change_parent_topic(first, first).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CycleRejected);
    assert_eq!(root_children(sheet), before);
    sheet.validate_invariants().unwrap();
}

#[test]
fn change_parent_of_root_is_rejected() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let root = sheet.root_topic().id();
    let first = root_children(sheet)[0];

    let err = sheet.change_parent_topic(root, first).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CycleRejected);

    let floating = sheet.create_floating_topic("Loose");
    let err = sheet.change_parent_topic(floating, first).unwrap_err();
    assert_eq!(err, MindmapError::NoParent(floating));
}

#[test]
fn move_to_floating_transfers_ownership() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let first = root_children(sheet)[0];

    sheet.move_topic_to_floating_topic(first).unwrap();

    assert_eq!(sheet.root_topic().children().len(), 3);
    assert!(!sheet.root_topic().children().contains(&first));
    let floating: Vec<_> = sheet.floating_topics().map(|topic| topic.id()).collect();
    assert_eq!(floating, vec![first]);
    assert_eq!(sheet.topic(first).unwrap().parent(), None);
    sheet.validate_invariants().unwrap();
}

#[test]
fn move_to_floating_requires_direct_root_child() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let first = root_children(sheet)[0];
    let nested = sheet.create_sub_topic(first, "Nested").unwrap();

    let err = sheet.move_topic_to_floating_topic(nested).unwrap_err();

    assert_eq!(err, MindmapError::TopicNotFound(nested));
    assert_eq!(sheet.topic(nested).unwrap().parent(), Some(first));
    assert_eq!(sheet.floating_topics().count(), 0);
}

#[test]
fn floating_topics_hold_children_and_can_be_deleted() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let floating = sheet.create_floating_topic("Floating Topic");
    let child = sheet.create_sub_topic(floating, "Sub Floating Topic").unwrap();

    assert_eq!(sheet.topic(floating).unwrap().children(), &[child]);
    assert!(sheet.delete_floating_topic(floating));
    assert!(!sheet.delete_floating_topic(floating));
    assert!(sheet.topic(child).is_none());
    sheet.validate_invariants().unwrap();
}

#[test]
fn style_setters_do_not_touch_structure() {
    let mut document = setup();
    let sheet = document.first_sheet_mut().unwrap();
    let root = sheet.root_topic().id();
    let before = root_children(sheet);

    let topic = sheet.topic_mut(root).unwrap();
    topic.move_to_new_position(Position::new(100.0, 100.0));
    topic.update_text_size(20.0);
    topic.change_shape_border("dotted");

    let topic = sheet.root_topic();
    assert_eq!(topic.position, Position::new(100.0, 100.0));
    assert_eq!(topic.custom_text.font_size, 20.0);
    assert_eq!(topic.shape.border, "dotted");
    assert_eq!(root_children(sheet), before);
}
