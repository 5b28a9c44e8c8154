//! Joint dashboard fetch
//!
//! Transactions and the summary are requested together. A response that
//! arrives after the period changed is dropped by the caller.

use futures_util::future::try_join;

use crate::api::{ApiResult, FinanceApi, Summary, TimePeriod, Transaction};

/// Responses of one dashboard load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub period: TimePeriod,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl DashboardData {
    /// Zero data for `period`, shown before the first load and after a failure
    pub fn empty(period: TimePeriod) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// True when this response still matches the period on screen
    pub fn is_current_for(&self, period: TimePeriod) -> bool {
        self.period == period
    }

    /// Issue both fetches concurrently; succeeds only if both do
    pub async fn load<A>(api: &A, token: &str, period: TimePeriod) -> ApiResult<Self>
    where
        A: FinanceApi + ?Sized,
    {
        let (transactions, summary) =
            try_join(api.transactions(token, period), api.summary(token, period)).await?;

        tracing::debug!(
            period = %period,
            transactions = transactions.len(),
            "Dashboard data loaded"
        );

        Ok(Self {
            period,
            transactions,
            summary,
        })
    }

    /// Like [`load`](Self::load), but a failure is logged once and degrades
    /// to zero data
    pub async fn load_or_empty<A>(api: &A, token: &str, period: TimePeriod) -> Self
    where
        A: FinanceApi + ?Sized,
    {
        match Self::load(api, token, period).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(period = %period, "Error fetching dashboard data: {}", e);
                Self::empty(period)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Credentials, RegisterRequest, TokenResponse};
    use crate::session::User;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Records call order; both calls park once so the fetches overlap
    #[derive(Default)]
    struct FakeApi {
        in_flight: Cell<usize>,
        max_in_flight: Cell<usize>,
        periods: RefCell<Vec<TimePeriod>>,
        fail_summary: bool,
    }

    impl FakeApi {
        async fn enter(&self, period: TimePeriod) {
            self.periods.borrow_mut().push(period);
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight
                .set(self.max_in_flight.get().max(self.in_flight.get()));
            tokio::task::yield_now().await;
            self.in_flight.set(self.in_flight.get() - 1);
        }
    }

    #[async_trait(?Send)]
    impl FinanceApi for FakeApi {
        async fn login(&self, _credentials: &Credentials) -> ApiResult<TokenResponse> {
            unreachable!("not used by the dashboard")
        }

        async fn register(&self, _request: &RegisterRequest) -> ApiResult<()> {
            unreachable!("not used by the dashboard")
        }

        async fn current_user(&self, _token: &str) -> ApiResult<User> {
            unreachable!("not used by the dashboard")
        }

        async fn transactions(&self, _token: &str, period: TimePeriod) -> ApiResult<Vec<Transaction>> {
            self.enter(period).await;
            Ok(vec![Transaction {
                amount: -20.0,
                description: "Lunch".to_string(),
                ..Transaction::default()
            }])
        }

        async fn summary(&self, _token: &str, period: TimePeriod) -> ApiResult<Summary> {
            self.enter(period).await;
            if self.fail_summary {
                return Err(ApiError::Status { status: 500, detail: None });
            }
            Ok(Summary {
                total_expenses: 20.0,
                net: -20.0,
                ..Summary::default()
            })
        }
    }

    #[tokio::test]
    async fn test_load_fetches_concurrently() {
        let api = FakeApi::default();
        let data = DashboardData::load(&api, "tok", TimePeriod::Week).await.unwrap();

        assert_eq!(api.max_in_flight.get(), 2);
        assert_eq!(*api.periods.borrow(), vec![TimePeriod::Week, TimePeriod::Week]);
        assert_eq!(data.period, TimePeriod::Week);
        assert_eq!(data.transactions.len(), 1);
        assert_eq!(data.summary.net, -20.0);
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_load() {
        let api = FakeApi {
            fail_summary: true,
            ..FakeApi::default()
        };
        let err = DashboardData::load(&api, "tok", TimePeriod::Month)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500, detail: None });
    }

    #[tokio::test]
    async fn test_late_response_for_old_period_is_stale() {
        let api = FakeApi::default();
        let month = DashboardData::load(&api, "tok", TimePeriod::Month).await.unwrap();
        let day = DashboardData::load(&api, "tok", TimePeriod::Day).await.unwrap();

        // Month -> Week -> Day; the month response lands last
        let selected = TimePeriod::Day;
        assert!(day.is_current_for(selected));
        assert!(!month.is_current_for(selected));
        assert!(!DashboardData::empty(TimePeriod::Week).is_current_for(selected));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        let api = FakeApi {
            fail_summary: true,
            ..FakeApi::default()
        };
        let data = DashboardData::load_or_empty(&api, "tok", TimePeriod::Year).await;
        assert_eq!(data, DashboardData::empty(TimePeriod::Year));
        assert!(data.transactions.is_empty());
    }
}
