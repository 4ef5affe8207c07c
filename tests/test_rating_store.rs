use std::sync::Arc;

use car_marketplace_be::{
    analysis::analyze,
    db::rating::{MemoryRatingStore, RatingStore},
    models::Car,
};
use chrono::Utc;
use uuid::Uuid;

fn car(model: &str) -> Car {
    Car {
        id: Uuid::new_v4(),
        model: model.into(),
        brand: "Volvo".into(),
        price: String::new(),
        description: String::new(),
        images: vec![],
        year: Some(2020),
        fuel_type: String::new(),
        mileage: String::new(),
        transmission: String::new(),
        engine_capacity: String::new(),
        seating_capacity: String::new(),
        body_type: String::new(),
        safety_features: vec![],
        boot_space: String::new(),
        features: vec![],
        warranty: String::new(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_resubmission_overwrites_score() {
    let store = MemoryRatingStore::new();
    let car = car("XC60");
    let user = Uuid::new_v4();

    store.submit(car.id, user, 2).await.unwrap();
    store.submit(car.id, user, 5).await.unwrap();

    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].rating, 5);
    assert_eq!(store.find(car.id, user).await.unwrap(), Some(5));
}

#[tokio::test]
async fn test_resubmission_keeps_total_ratings() {
    let store = MemoryRatingStore::new();
    let car = car("XC90");
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    store.submit(car.id, first, 4).await.unwrap();
    store.submit(car.id, second, 2).await.unwrap();
    let before = analyze(std::slice::from_ref(&car), &store.all().await.unwrap());

    // Same score again: nothing changes.
    store.submit(car.id, first, 4).await.unwrap();
    let same = analyze(std::slice::from_ref(&car), &store.all().await.unwrap());
    assert_eq!(same, before);

    // Different score: count stays, average moves.
    store.submit(car.id, first, 2).await.unwrap();
    let after = analyze(std::slice::from_ref(&car), &store.all().await.unwrap());
    let (b, a) = (
        &before.car_ratings_with_percentages[0],
        &after.car_ratings_with_percentages[0],
    );
    assert_eq!(b.total_ratings, 2);
    assert_eq!(a.total_ratings, 2);
    assert_eq!(b.average_rating, 3.0);
    assert_eq!(a.average_rating, 2.0);
}

#[tokio::test]
async fn test_find_missing_rating() {
    let store = MemoryRatingStore::new();
    assert_eq!(store.find(Uuid::new_v4(), Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn test_all_keeps_first_submission_order() {
    let store = MemoryRatingStore::new();
    let car_a = Uuid::new_v4();
    let car_b = Uuid::new_v4();
    let user = Uuid::new_v4();

    store.submit(car_a, user, 1).await.unwrap();
    store.submit(car_b, user, 3).await.unwrap();
    store.submit(car_a, user, 4).await.unwrap();

    let cars: Vec<Uuid> = store.all().await.unwrap().iter().map(|r| r.car_id).collect();
    assert_eq!(cars, vec![car_a, car_b]);
}

#[tokio::test]
async fn test_concurrent_submissions_for_same_pair() {
    let store: Arc<dyn RatingStore> = Arc::new(MemoryRatingStore::new());
    let car_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let handles: Vec<_> = (1..=5)
        .map(|score| {
            let store = store.clone();
            tokio::spawn(async move { store.submit(car_id, user_id, score).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!((1..=5).contains(&all[0].rating));
}
