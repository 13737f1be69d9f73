use chrono::{Local, NaiveDate};
use http::{Method, StatusCode};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    api::{
        error::{ApiError, AuthenticationError},
        models::{
            HistoricDataResponse,
            HistoricQuery,
            LiveDataResponse,
            LoginRequest,
            LoginResponse,
            PeriodicDataResponse,
            SystemDetailsResponse,
        },
        session::{Session, SystemId},
        transport::{self, Request, Transport},
    },
    core::{
        aggregate::{HistoricAccumulator, PeriodicAccumulator},
        time_period::{TimePeriod, look_back},
        usage::{EnergyUsage, LivePowerUsage, PeriodicEnergyUsage},
    },
    prelude::*,
};

pub const DEFAULT_BASE_URL: &str = "https://api.geotogether.com/";

/// Session-bound client.
///
/// Calls must not be issued concurrently: every call that receives a response may update the session.
/// A call dropped before its response arrives leaves the session untouched.
pub struct Client<T = reqwest::Client> {
    transport: T,
    base_url: Url,
    session: Session,
}

impl Client {
    pub fn try_new(base_url: Url) -> reqwest::Result<Self> {
        Ok(Self::with_transport(transport::try_new()?, base_url))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, base_url: Url) -> Self {
        Self { transport, base_url, session: Session::default() }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in and keep the access token for the subsequent calls.
    ///
    /// Any failure is logged and reported as `false`, keeping the previous token (if any).
    #[instrument(skip_all)]
    pub async fn authenticate(&mut self, username: &str, password: &str) -> bool {
        info!("authenticating…");
        match self.log_in(username, password).await {
            Ok(access_token) => {
                self.session.authorize(access_token);
                info!("authenticated");
                true
            }
            Err(error) => {
                warn!("failed to authenticate: {error}");
                false
            }
        }
    }

    /// Select the first system with the name, or the first system when no name is given.
    ///
    /// Returns [`None`] when nothing matches or the call fails, keeping the previously resolved system.
    #[instrument(skip_all, fields(name = ?name))]
    pub async fn resolve_system(&mut self, name: Option<&str>) -> Option<SystemId> {
        match self.find_system(name).await {
            Ok(Some(system_id)) => {
                info!(%system_id, "resolved");
                self.session.bind(system_id.clone());
                Some(system_id)
            }
            Ok(None) => {
                warn!("no matching system");
                None
            }
            Err(error) => {
                warn!("failed to resolve the system: {error}");
                None
            }
        }
    }

    /// Current power draw per energy type.
    #[instrument(skip_all)]
    pub async fn get_live_usage(&mut self) -> Result<Vec<LivePowerUsage>> {
        let request = self.data_request("smets2-live-data")?;
        let usage = self.fetch::<LiveDataResponse>(request).await?.into_usage();
        info!(n_readings = usage.len(), "fetched");
        Ok(usage)
    }

    /// Vendor-computed usage for the current periods, one entry per energy type.
    #[instrument(skip_all)]
    pub async fn get_periodic_usage(&mut self) -> Result<Vec<PeriodicEnergyUsage>> {
        let request = self.data_request("smets2-periodic-data")?;
        let usage = self
            .fetch::<PeriodicDataResponse>(request)
            .await?
            .into_usage()
            .collect::<PeriodicAccumulator>()
            .into_vec();
        info!(n_energy_types = usage.len(), "fetched");
        Ok(usage)
    }

    /// Total usage per energy type over the period `offset` periods before the current one.
    pub async fn get_historic_usage(
        &mut self,
        period: TimePeriod,
        offset: i32,
    ) -> Result<Vec<EnergyUsage>> {
        self.get_historic_usage_on(period, offset, Local::now().date_naive()).await
    }

    /// Same as [`Client::get_historic_usage`], but relative to the `reference` date instead of today.
    ///
    /// The sign of `offset` is ignored: historic queries only look backwards.
    #[instrument(skip_all, fields(period = ?period, offset = offset, reference = %reference))]
    pub async fn get_historic_usage_on(
        &mut self,
        period: TimePeriod,
        offset: i32,
        reference: NaiveDate,
    ) -> Result<Vec<EnergyUsage>> {
        self.session.check()?;
        let granularity = historic_granularity(period).ok_or(ApiError::NoDateRange(period))?;
        let range = period.resolve(look_back(offset), reference).ok_or(ApiError::OutOfRange)?;
        debug!(?range, granularity, "resolved");
        let query = serde_qs::to_string(&HistoricQuery::from(range)).map_err(ApiError::from)?;
        let mut request = self.data_request(&format!("smets2-historic-{granularity}"))?;
        request.url.set_query(Some(&query));
        let usage = self
            .fetch::<HistoricDataResponse>(request)
            .await?
            .into_usage(period)
            .collect::<HistoricAccumulator>()
            .into_vec();
        info!(n_energy_types = usage.len(), "fetched");
        Ok(usage)
    }

    async fn log_in(&self, username: &str, password: &str) -> Result<String> {
        let body = serde_json::to_value(LoginRequest { identity: username, password })
            .map_err(ApiError::from)?;
        let request = Request::builder()
            .method(Method::POST)
            .url(self.url(["usersservice", "v2", "login"])?)
            .body(body)
            .build();
        let response: LoginResponse = self.exchange(request).await?;
        Ok(response.access_token.ok_or(ApiError::MissingField("accessToken"))?)
    }

    async fn find_system(&self, name: Option<&str>) -> Result<Option<SystemId>> {
        let mut url = self.url(["api", "userapi", "v2", "user", "detail-systems"])?;
        url.query_pairs_mut().append_pair("systemDetails", "true");
        let request = Request::builder()
            .method(Method::GET)
            .url(url)
            .maybe_bearer_token(self.session.access_token())
            .build();
        let response: SystemDetailsResponse = self.exchange(request).await?;
        Ok(response.find(name))
    }

    /// Build an authorized request to a system endpoint, failing fast when the session is not ready.
    fn data_request(&self, endpoint: &str) -> Result<Request> {
        let credentials = self.session.check()?;
        let url = self.url(["api", "userapi", "system", endpoint, credentials.system_id.as_ref()])?;
        Ok(Request::builder()
            .method(Method::GET)
            .url(url)
            .bearer_token(credentials.access_token)
            .build())
    }

    /// Send a data request, expiring the session on `401 Unauthorized`.
    async fn fetch<R: DeserializeOwned>(&mut self, request: Request) -> Result<R> {
        match self.exchange(request).await {
            Err(ApiError::Status(status)) if status == StatusCode::UNAUTHORIZED => {
                warn!("authentication has expired");
                self.session.expire();
                Err(AuthenticationError::Expired.into())
            }
            result => Ok(result?),
        }
    }

    async fn exchange<R: DeserializeOwned>(&self, request: Request) -> Result<R, ApiError> {
        debug!(?request, "sending…");
        let response = self.transport.send(request).await.map_err(ApiError::Connectivity)?;
        debug!(status = %response.status, n_bytes = response.body.len(), "received");
        if response.status != StatusCode::OK {
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Append the path segments to the base URL, escaping each one.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::BaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Granularity of the historic endpoint for the period.
///
/// Months are served by the daily endpoint.
const fn historic_granularity(period: TimePeriod) -> Option<&'static str> {
    match period {
        TimePeriod::Day | TimePeriod::Month => Some("day"),
        TimePeriod::Week => Some("week"),
        TimePeriod::Unbilled | TimePeriod::Forever => None,
    }
}
