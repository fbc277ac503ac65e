use super::{
    client::DnsApiClient,
    error::{InfobloxError, Result},
    models::*,
};
use crate::config::Config;
use async_trait::async_trait;
use log::{log, Level};
use reqwest::{Method, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const RETURN_AS_OBJECT: (&str, &str) = ("_return_as_object", "1");
const RETURN_FIELDS: (&str, &str) = ("_return_fields+", "comment");

pub struct InfobloxClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    debug: bool,
}

#[async_trait]
impl DnsApiClient for InfobloxClient {
    async fn create_record(
        &self,
        record_type: RecordType,
        record: &Record,
    ) -> Result<RecordResult> {
        let request = self
            .request(Method::POST, &format!("record:{}", record_type))
            .query(&[RETURN_FIELDS])
            .json(record);
        let (status, body) = self.send(request).await?;
        check_status(status, body.as_str())?;

        decode(&body)
    }

    async fn get_record(
        &self,
        record_type: RecordType,
        name: &str,
    ) -> Result<Option<RecordResults>> {
        let request = self
            .request(Method::GET, &format!("record:{}", record_type))
            .query(&[(record_type.search_field(), name)])
            .query(&[RETURN_FIELDS]);
        let (status, body) = self.send(request).await?;
        check_status(status, body.as_str())?;

        // A lookup that matches nothing comes back as "[]" or an empty result list.
        if is_empty_body(&body) {
            return Ok(None);
        }
        let records: RecordResults = decode(&body)?;
        if records.result.is_empty() {
            return Ok(None);
        }
        Ok(Some(records))
    }

    async fn update_record(
        &self,
        reference: &str,
        record: &Record,
    ) -> Result<Option<RecordResult>> {
        let request = self
            .request(Method::PUT, reference)
            .query(&[RETURN_FIELDS])
            .json(record);
        let (status, body) = self.send(request).await?;
        check_status(status, body.as_str())?;

        if is_empty_body(&body) {
            return Ok(None);
        }
        decode(&body).map(Some)
    }

    async fn delete_record(&self, reference: &str) -> Result<()> {
        let request = self.request(Method::DELETE, reference);
        let (status, body) = self.send(request).await?;
        check_status(status, body.as_str())
    }
}

impl InfobloxClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .connection_verbose(config.debug)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url(&config.url, &config.version),
            username: config.username.clone(),
            password: config.password.clone(),
            debug: config.debug,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        self.client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[RETURN_AS_OBJECT])
    }

    async fn send(&self, request: RequestBuilder) -> Result<(StatusCode, String)> {
        let level = self.log_level();
        let request = request.build()?;
        log!(level, "Request: {}", describe_request(&request));

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        log!(level, "Response: {} {}", status, body);

        Ok((status, body))
    }

    pub(crate) fn log_level(&self) -> Level {
        if self.debug {
            Level::Info
        } else {
            Level::Debug
        }
    }
}

pub(crate) fn base_url(url: &str, version: &str) -> String {
    let version = if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{}", version)
    };
    format!("{}/wapi/{}/", url.trim_end_matches('/'), version)
}

/// Method, URL and, when present, the request payload.
pub(crate) fn describe_request(request: &Request) -> String {
    match request.body().and_then(|body| body.as_bytes()) {
        Some(payload) => format!(
            "{} {} {}",
            request.method(),
            request.url(),
            String::from_utf8_lossy(payload)
        ),
        None => format!("{} {}", request.method(), request.url()),
    }
}

fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(InfobloxError::Unauthorized {
            body: body.to_string(),
        });
    }
    if !status.is_success() {
        return Err(InfobloxError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    Ok(())
}

fn is_empty_body(body: &str) -> bool {
    body.trim().len() <= 2
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| InfobloxError::Decode {
        source,
        body: body.to_string(),
    })
}
