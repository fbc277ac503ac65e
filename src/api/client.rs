use super::{error::Result, models::*};
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    async fn create_record(&self, record_type: RecordType, record: &Record)
        -> Result<RecordResult>;
    async fn get_record(&self, record_type: RecordType, name: &str)
        -> Result<Option<RecordResults>>;
    async fn update_record(&self, reference: &str, record: &Record)
        -> Result<Option<RecordResult>>;
    async fn delete_record(&self, reference: &str) -> Result<()>;
}
