use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::model::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PerformanceReview {
    pub id: u64,
    pub employee_id: u64,
    pub employee_name: String,
    /// Nominally 1 to 5 in half steps; not range checked.
    #[serde(serialize_with = "serialize_rating")]
    pub rating: f64,
    pub feedback: String,
    pub reviewer: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub review_date: DateTime<Utc>,
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole ratings are written as integers (`5`, not `5.0`), the way the
/// dashboard form stores them.
fn serialize_rating<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if rating.fract() == 0.0 && rating.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*rating as i64)
    } else {
        serializer.serialize_f64(*rating)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerformanceReview {
    pub employee_id: u64,
    pub employee_name: String,
    pub rating: f64,
    pub feedback: String,
    pub reviewer: String,
}

impl NewPerformanceReview {
    pub fn into_review(self, id: u64, review_date: DateTime<Utc>) -> PerformanceReview {
        PerformanceReview {
            id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            rating: self.rating,
            feedback: self.feedback,
            reviewer: self.reviewer,
            review_date: timestamp::to_millis(review_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn review(rating: f64) -> PerformanceReview {
        NewPerformanceReview {
            employee_id: 4,
            employee_name: "Alice Williams".into(),
            rating,
            feedback: "Solid quarter.".into(),
            reviewer: "Jane Smith".into(),
        }
        .into_review(9, Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap())
    }

    #[test]
    fn whole_ratings_are_written_as_integers() {
        assert_eq!(serde_json::to_value(review(5.0)).unwrap()["rating"], json!(5));
        assert_eq!(serde_json::to_value(review(4.5)).unwrap()["rating"], json!(4.5));
    }

    #[test]
    fn review_date_uses_millisecond_timestamps() {
        let json = serde_json::to_value(review(4.0)).unwrap();
        assert_eq!(json["reviewDate"], "2026-03-02T08:30:00.000Z");
    }
}
