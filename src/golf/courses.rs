//! Golf course ranking by distance from the user

use std::cmp::Ordering;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::Coordinates;

/// A golf course as reported by the POI provider, before ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCandidate {
    pub id: u64,
    pub name: Option<String>,
    pub coordinates: Coordinates,
}

/// A ranked golf course with its distance from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub name: Option<String>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
}

impl Course {
    /// The course name, or `fallback` for unnamed courses
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Source of golf courses around a point
pub trait CourseProvider {
    fn find_courses(
        &self,
        center: Coordinates,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<CourseCandidate>>> + Send;
}

/// Great-circle distance in kilometers (mean earth radius 6371 km)
#[must_use]
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: from.latitude,
            longitude: from.longitude,
        },
        haversine::Location {
            latitude: to.latitude,
            longitude: to.longitude,
        },
        haversine::Units::Kilometers,
    )
}

pub struct CourseRanker;

impl CourseRanker {
    /// Attach distances and sort nearest first. Equal distances keep their input order.
    #[must_use]
    pub fn rank(origin: &Coordinates, candidates: Vec<CourseCandidate>) -> Vec<Course> {
        let mut courses: Vec<Course> = candidates
            .into_iter()
            .map(|candidate| Course {
                distance_km: distance_km(origin, &candidate.coordinates),
                id: candidate.id,
                name: candidate.name,
                coordinates: candidate.coordinates,
            })
            .collect();

        courses.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });
        courses
    }
}
