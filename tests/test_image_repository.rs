mod helpers;

use helpers::*;
use modelapi::domain::ports::image_repository::ImageRepository;
use modelapi::NewImageRecord;

#[tokio::test]
async fn test_saved_image_is_visible_to_next_read() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    for user_id in 0..50i64 {
        let uri = format!("https://cdn/{}.png", user_id);
        let saved = db
            .save_image(&NewImageRecord::new(user_id, uri.clone()))
            .await
            .unwrap();
        assert_eq!(saved.user_id, user_id);
        assert_eq!(saved.image_uri, uri);

        let images = db.get_images_by_user(user_id).await.unwrap();
        assert_eq!(images.len(), 1, "image {} not visible after save", saved.id);
        assert_eq!(images[0].id, saved.id);
        assert_eq!(images[0].image_uri, uri);
    }

    assert_eq!(count_images(db).await, 50);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_images_are_listed_newest_first_per_user() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let first = db
        .save_image(&NewImageRecord::new(1, "https://cdn/a.png".to_string()))
        .await
        .unwrap();
    let second = db
        .save_image(&NewImageRecord::new(1, "https://cdn/b.png".to_string()))
        .await
        .unwrap();
    db.save_image(&NewImageRecord::new(2, "https://cdn/c.png".to_string()))
        .await
        .unwrap();

    let images = db.get_images_by_user(1).await.unwrap();
    assert_eq!(
        images.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert!(db.get_images_by_user(3).await.unwrap().is_empty());

    teardown_test_db(test_db).await;
}
