use tracing::{info, instrument};

use super::{MockApi, PERFORMANCE_REVIEWS, hold};
use crate::error::ServiceResult;
use crate::model::performance_review::{NewPerformanceReview, PerformanceReview};

impl MockApi {
    #[instrument(name = "get_performance_reviews", skip_all)]
    pub async fn get_performance_reviews(&self) -> ServiceResult<Vec<PerformanceReview>> {
        self.latency.wait(500).await;
        self.load(&PERFORMANCE_REVIEWS)
    }

    /// Stamps the review with today's date and puts it first.
    #[instrument(name = "add_performance_review", skip_all, fields(employee_id = review.employee_id))]
    pub async fn add_performance_review(
        &self,
        review: NewPerformanceReview,
    ) -> ServiceResult<PerformanceReview> {
        self.latency.wait(600).await;
        let _guard = hold(&self.locks.reviews);
        let mut reviews = self.load(&PERFORMANCE_REVIEWS)?;

        let now = self.clock.now();
        let id = self.allocate_id(&PERFORMANCE_REVIEWS, reviews.iter().map(|r| r.id))?;
        let review = review.into_review(id, now);
        reviews.insert(0, review.clone());
        self.save(&PERFORMANCE_REVIEWS, &reviews)?;

        info!(review_id = id, "performance review added");
        Ok(review)
    }
}
