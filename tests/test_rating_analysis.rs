use car_marketplace_be::{
    analysis::analyze,
    models::{Car, Rating},
};
use chrono::Utc;
use uuid::Uuid;

fn car(brand: &str, model: &str) -> Car {
    Car {
        id: Uuid::new_v4(),
        model: model.into(),
        brand: brand.into(),
        price: String::new(),
        description: String::new(),
        images: vec![],
        year: None,
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

fn rating(car: &Car, score: i16) -> Rating {
    Rating {
        car_id: car.id,
        user_id: Uuid::new_v4(),
        rating: score,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_worked_example() {
    let a = car("Toyota", "Corolla");
    let b = car("Honda", "Civic");
    let c = car("Ford", "Focus");
    let ratings = vec![rating(&a, 5), rating(&a, 3), rating(&b, 4)];

    let result = analyze(&[a.clone(), b.clone(), c.clone()], &ratings);
    let all = &result.car_ratings_with_percentages;

    assert_eq!(all.len(), 3);
    assert_eq!(all[0].car_id, a.id);
    assert_eq!(all[0].total_ratings, 2);
    assert_close(all[0].average_rating, 4.0);
    assert_close(all[0].rating_percentage, 200.0 / 3.0);

    assert_eq!(all[1].car_id, b.id);
    assert_eq!(all[1].total_ratings, 1);
    assert_close(all[1].average_rating, 4.0);
    assert_close(all[1].rating_percentage, 100.0 / 3.0);

    assert_eq!(all[2].car_id, c.id);
    assert_eq!(all[2].total_ratings, 0);
    assert_close(all[2].average_rating, 0.0);
    assert_close(all[2].rating_percentage, 0.0);

    // A and B tie at 4.0, so input order decides.
    let top: Vec<Uuid> = result.top_cars.iter().map(|s| s.car_id).collect();
    assert_eq!(top, vec![a.id, b.id, c.id]);
}

#[test]
fn test_no_ratings_anywhere() {
    let cars = vec![car("Kia", "Rio"), car("Kia", "Ceed")];
    let result = analyze(&cars, &[]);

    for summary in &result.car_ratings_with_percentages {
        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.rating_percentage, 0.0);
    }
    assert_eq!(result.top_cars.len(), 2);
}

#[test]
fn test_no_cars() {
    let result = analyze(&[], &[]);
    assert!(result.top_cars.is_empty());
    assert!(result.car_ratings_with_percentages.is_empty());
}

#[test]
fn test_percentages_sum_to_hundred() {
    let cars: Vec<Car> = (0..7).map(|i| car("Brand", &format!("Model {i}"))).collect();
    let mut ratings = Vec::new();
    for (i, c) in cars.iter().enumerate() {
        for score in 0..(i * 3 + 1) {
            ratings.push(rating(c, (score % 5 + 1) as i16));
        }
    }

    let result = analyze(&cars, &ratings);
    let total: f64 = result
        .car_ratings_with_percentages
        .iter()
        .map(|s| s.rating_percentage)
        .sum();
    assert_close(total, 100.0);
}

#[test]
fn test_top_is_capped_and_sorted() {
    let cars: Vec<Car> = (0..5).map(|i| car("Brand", &format!("Model {i}"))).collect();
    let scores = [2, 5, 1, 4, 3];
    let ratings: Vec<Rating> = cars
        .iter()
        .zip(scores)
        .map(|(c, s)| rating(c, s))
        .collect();

    let result = analyze(&cars, &ratings);
    assert_eq!(result.top_cars.len(), 3);

    let averages: Vec<f64> = result.top_cars.iter().map(|s| s.average_rating).collect();
    assert_eq!(averages, vec![5.0, 4.0, 3.0]);
    assert_eq!(result.top_cars[0].car_id, cars[1].id);

    // Full listing keeps input order.
    let all_ids: Vec<Uuid> = result
        .car_ratings_with_percentages
        .iter()
        .map(|s| s.car_id)
        .collect();
    let car_ids: Vec<Uuid> = cars.iter().map(|c| c.id).collect();
    assert_eq!(all_ids, car_ids);
}

#[test]
fn test_top_with_fewer_than_three_cars() {
    let only = car("Mazda", "MX-5");
    let result = analyze(std::slice::from_ref(&only), &[rating(&only, 5)]);
    assert_eq!(result.top_cars.len(), 1);
    assert_close(result.top_cars[0].rating_percentage, 100.0);
}

#[test]
fn test_unrated_car_ranks_below_rated_ones() {
    let unrated = car("Fiat", "Panda");
    let rated = car("Audi", "A4");
    let result = analyze(&[unrated.clone(), rated.clone()], &[rating(&rated, 1)]);
    assert_eq!(result.top_cars[0].car_id, rated.id);
    assert_eq!(result.top_cars[1].car_id, unrated.id);
}

#[test]
fn test_ratings_for_unknown_cars_are_ignored() {
    let known = car("BMW", "X5");
    let deleted = car("BMW", "Z4");
    let ratings = vec![rating(&known, 4), rating(&deleted, 1), rating(&deleted, 1)];

    let result = analyze(std::slice::from_ref(&known), &ratings);
    let summary = &result.car_ratings_with_percentages[0];
    assert_eq!(summary.total_ratings, 1);
    assert_close(summary.average_rating, 4.0);
    assert_close(summary.rating_percentage, 100.0);
}

#[test]
fn test_json_shape() {
    let a = car("Tesla", "Model 3");
    let result = analyze(std::slice::from_ref(&a), &[rating(&a, 5)]);
    let json = serde_json::to_value(&result).unwrap();

    let summary = &json["carRatingsWithPercentages"][0];
    assert_eq!(summary["carId"], a.id.to_string());
    assert_eq!(summary["brand"], "Tesla");
    assert_eq!(summary["model"], "Model 3");
    assert_eq!(summary["totalRatings"], 1);
    assert_eq!(summary["averageRating"], 5.0);
    assert_eq!(summary["ratingPercentage"], 100.0);
    assert_eq!(json["topCars"].as_array().map(Vec::len), Some(1));
}
