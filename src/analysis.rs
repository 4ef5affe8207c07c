use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Car, CarRatingSummary, Rating, rating::RatingAnalysis};

pub const TOP_CARS: usize = 3;

/// Computes per-car rating statistics over a snapshot of cars and ratings.
///
/// `car_ratings_with_percentages` keeps the input order of `cars`. `top_cars`
/// holds at most [`TOP_CARS`] entries sorted by average rating, highest first;
/// the sort is stable so equal averages keep their input order. Ratings that
/// reference a car missing from `cars` are ignored.
pub fn analyze(cars: &[Car], ratings: &[Rating]) -> RatingAnalysis {
    let mut by_car: HashMap<Uuid, (u64, i64)> = HashMap::with_capacity(cars.len());
    for rating in ratings {
        let entry = by_car.entry(rating.car_id).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += i64::from(rating.rating);
    }

    let total_overall: u64 = cars
        .iter()
        .filter_map(|car| by_car.get(&car.id).map(|(count, _)| *count))
        .sum();

    let summaries: Vec<CarRatingSummary> = cars
        .iter()
        .map(|car| {
            let (total_ratings, score_sum) = by_car.get(&car.id).copied().unwrap_or((0, 0));
            summarize(car, total_ratings, score_sum, total_overall)
        })
        .collect();

    let mut ranked = summaries.clone();
    ranked.sort_by(|a, b| {
        b.average_rating
            .partial_cmp(&a.average_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_CARS);

    RatingAnalysis {
        top_cars: ranked,
        car_ratings_with_percentages: summaries,
    }
}

fn summarize(car: &Car, total_ratings: u64, score_sum: i64, total_overall: u64) -> CarRatingSummary {
    let average_rating = if total_ratings > 0 {
        score_sum as f64 / total_ratings as f64
    } else {
        0.0
    };

    let rating_percentage = if total_overall > 0 {
        (total_ratings as f64 / total_overall as f64) * 100.0
    } else {
        0.0
    };

    CarRatingSummary {
        car_id: car.id,
        brand: car.brand.clone(),
        model: car.model.clone(),
        total_ratings,
        average_rating,
        rating_percentage,
    }
}
